//! Comment factory for creating test comment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments on a task.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    task_id: i32,
    user_id: Option<i32>,
    content: String,
    deleted: bool,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// Defaults:
    /// - content: `"Comment {id}"` where id is auto-incremented
    /// - user_id: `None`
    pub fn new(db: &'a DatabaseConnection, task_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            task_id,
            user_id: None,
            content: format!("Comment {}", id),
            deleted: false,
        }
    }

    pub fn user_id(mut self, user_id: Option<i32>) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Marks the comment as soft-deleted at insert time.
    pub fn deleted(mut self, deleted: bool) -> Self {
        self.deleted = deleted;
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        let now = Utc::now();
        entity::comment::ActiveModel {
            content: ActiveValue::Set(self.content),
            task_id: ActiveValue::Set(self.task_id),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default values on the given task.
pub async fn create_comment(
    db: &DatabaseConnection,
    task_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, task_id).build().await
}
