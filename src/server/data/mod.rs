//! Database repository layer for all domain entities.
//!
//! Repositories hold a borrowed connection, translate domain operations into SeaORM
//! queries and return domain models. Every read filters out soft-deleted rows, and
//! related entities are attached by explicit, separate queries rather than eager
//! loading, so each method states exactly what it fetches.

pub mod comment;
pub mod project;
pub mod task;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
