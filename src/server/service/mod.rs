//! Business logic between controllers and repositories.
//!
//! Each service validates its parameters, confirms that referenced records exist and
//! then delegates to the matching repository. Missing targets become
//! `AppError::NotFound`, dangling references become `AppError::BadRequest`.

pub mod comment;
pub mod project;
pub mod task;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
