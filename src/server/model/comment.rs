//! Comment domain models and parameters.

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{
    model::comment::{CommentDetailDto, CommentDto, CreateCommentDto},
    server::model::{task::Task, user::User},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub content: String,
    pub task_id: i32,
    pub user_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            content: entity.content,
            task_id: entity.task_id,
            user_id: entity.user_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.id,
            content: self.content,
            task_id: self.task_id,
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentWithRelations {
    pub comment: Comment,
    pub task: Option<Task>,
    pub author: Option<User>,
}

impl CommentWithRelations {
    pub fn into_dto(self) -> CommentDetailDto {
        let comment = self.comment;

        CommentDetailDto {
            id: comment.id,
            content: comment.content,
            task_id: comment.task_id,
            user_id: comment.user_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            task: self.task.map(Task::into_dto),
            author: self.author.map(User::into_member_dto),
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct CreateCommentParams {
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    #[validate(range(min = 1, message = "task ID is required"))]
    pub task_id: i32,
    pub user_id: Option<i32>,
}

impl From<CreateCommentDto> for CreateCommentParams {
    fn from(dto: CreateCommentDto) -> Self {
        Self {
            content: dto.content,
            task_id: dto.task_id,
            user_id: dto.user_id,
        }
    }
}
