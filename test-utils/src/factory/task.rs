//! Task factory for creating test task entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tasks belonging to a project.
///
/// # Example
///
/// ```rust,ignore
/// let task = TaskFactory::new(&db, project.id)
///     .assigned_to(Some(user.id))
///     .build()
///     .await?;
/// ```
pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    project_id: i32,
    title: String,
    description: String,
    assigned_to: Option<i32>,
    deleted: bool,
}

impl<'a> TaskFactory<'a> {
    /// Creates a new TaskFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Task {id}"` where id is auto-incremented
    /// - description: `"Test task description"`
    /// - assigned_to: `None`
    pub fn new(db: &'a DatabaseConnection, project_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            project_id,
            title: format!("Task {}", id),
            description: "Test task description".to_string(),
            assigned_to: None,
            deleted: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn assigned_to(mut self, user_id: Option<i32>) -> Self {
        self.assigned_to = user_id;
        self
    }

    /// Marks the task as soft-deleted at insert time.
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Builds and inserts the task entity into the database.
    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        let now = Utc::now();
        entity::task::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            project_id: ActiveValue::Set(self.project_id),
            assigned_to: ActiveValue::Set(self.assigned_to),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a task with default values inside the given project.
pub async fn create_task(
    db: &DatabaseConnection,
    project_id: i32,
) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db, project_id).build().await
}
