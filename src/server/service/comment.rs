use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::server::{
    data::{comment::CommentRepository, task::TaskRepository, user::UserRepository},
    error::AppError,
    model::{
        comment::{Comment, CommentWithRelations, CreateCommentParams},
        page::{Page, PageRequest},
    },
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment on an existing task.
    ///
    /// # Returns
    /// - `Ok(Comment)` - Created comment
    /// - `Err(AppError::Validation)` - Content empty or task id missing
    /// - `Err(AppError::BadRequest)` - Task or author does not exist
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        params.validate()?;

        if !TaskRepository::new(self.db).exists(params.task_id).await? {
            return Err(AppError::BadRequest("task not found".to_string()));
        }

        if let Some(user_id) = params.user_id {
            if !UserRepository::new(self.db).exists(user_id).await? {
                return Err(AppError::BadRequest("author not found".to_string()));
            }
        }

        let comment = CommentRepository::new(self.db).create(params).await?;

        tracing::info!("Created comment {} on task {}", comment.id, comment.task_id);

        Ok(comment)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<CommentWithRelations, AppError> {
        CommentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("comment not found".to_string()))
    }

    pub async fn get_paginated(
        &self,
        request: PageRequest,
        task_id: Option<i32>,
    ) -> Result<Page<Comment>, AppError> {
        let (comments, total) = CommentRepository::new(self.db)
            .get_paginated(request, task_id)
            .await?;

        Ok(Page::new(comments, total, request))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !CommentRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("comment not found".to_string()));
        }

        Ok(())
    }
}
