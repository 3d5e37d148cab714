//! SeaORM entity definitions for the project management schema.
//!
//! Every primary table carries `created_at`, `updated_at` and a nullable
//! `deleted_at` column. Rows with `deleted_at` set are soft-deleted and are
//! filtered out by the repositories.

pub mod prelude;

pub mod comment;
pub mod project;
pub mod project_user;
pub mod task;
pub mod team;
pub mod team_user;
pub mod user;
