//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` builder for customization
//! and a `create_*` convenience function for quick default creation. Factories take the
//! foreign keys they need as constructor arguments; `helpers` wires common hierarchies.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let project = factory::create_project(db).await?;
//! let task = factory::task::TaskFactory::new(db, project.id)
//!     .title("Write docs")
//!     .build()
//!     .await?;
//!
//! let (project, task) = factory::helpers::create_task_with_project(db).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `project` - Create project entities
//! - `task` - Create task entities belonging to a project
//! - `team` - Create team entities
//! - `comment` - Create comment entities belonging to a task
//! - `helpers` - Unique id generation and dependency helpers

pub mod comment;
pub mod helpers;
pub mod project;
pub mod task;
pub mod team;
pub mod user;

pub use comment::create_comment;
pub use project::create_project;
pub use task::create_task;
pub use team::create_team;
pub use user::create_user;
