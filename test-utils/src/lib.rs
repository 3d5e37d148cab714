//! Project Management API Test Utils
//!
//! Shared testing utilities for the project management API. Provides a builder for
//! in-memory SQLite test contexts with the required entity tables, plus factories for
//! inserting users, projects, tasks, teams and comments with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories for test data
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn finds_project() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new()
//!         .with_project_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let project = factory::create_project(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
