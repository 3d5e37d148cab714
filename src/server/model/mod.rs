//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the input of
//! an operation and its field-level validation rules.

pub mod comment;
pub mod page;
pub mod project;
pub mod task;
pub mod team;
pub mod user;
