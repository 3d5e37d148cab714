//! Wire types shared by the HTTP API.
//!
//! DTOs here are what controllers deserialize from request bodies and serialize into
//! responses. They carry no behavior beyond serde and OpenAPI schema derivation.

pub mod api;
pub mod comment;
pub mod pagination;
pub mod project;
pub mod task;
pub mod team;
pub mod user;
