//! HTTP handlers.
//!
//! Controllers decode path, query and body input, call the matching service and
//! convert the returned domain models into DTOs. Authentication happens before any
//! handler runs, in `middleware::auth`.

pub mod comment;
pub mod health;
pub mod param;
pub mod project;
pub mod task;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
