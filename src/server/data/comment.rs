use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    comment::{Comment, CommentWithRelations, CreateCommentParams},
    page::PageRequest,
    task::Task,
    user::User,
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let now = Utc::now();
        let comment = entity::comment::ActiveModel {
            content: ActiveValue::Set(params.content),
            task_id: ActiveValue::Set(params.task_id),
            user_id: ActiveValue::Set(params.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(comment))
    }

    /// Gets a live comment by ID with its task and author attached.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<CommentWithRelations>, DbErr> {
        let Some(comment) = self.find_live(id).await? else {
            return Ok(None);
        };

        let task = entity::prelude::Task::find_by_id(comment.task_id)
            .filter(entity::task::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        let author = match comment.user_id {
            Some(user_id) => {
                entity::prelude::User::find_by_id(user_id)
                    .filter(entity::user::Column::DeletedAt.is_null())
                    .one(self.db)
                    .await?
            }
            None => None,
        };

        Ok(Some(CommentWithRelations {
            comment: Comment::from_entity(comment),
            task: task.map(Task::from_entity),
            author: author.map(User::from_entity),
        }))
    }

    /// Gets a page of live comments, optionally restricted to one task.
    pub async fn get_paginated(
        &self,
        request: PageRequest,
        task_id: Option<i32>,
    ) -> Result<(Vec<Comment>, u64), DbErr> {
        let mut query =
            entity::prelude::Comment::find().filter(entity::comment::Column::DeletedAt.is_null());

        if let Some(task_id) = task_id {
            query = query.filter(entity::comment::Column::TaskId.eq(task_id));
        }

        let total = query.clone().count(self.db).await?;

        let comments = query
            .order_by_asc(entity::comment::Column::Id)
            .offset(request.offset())
            .limit(request.page_size)
            .all(self.db)
            .await?;

        Ok((
            comments.into_iter().map(Comment::from_entity).collect(),
            total,
        ))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let Some(comment) = self.find_live(id).await? else {
            return Ok(false);
        };

        let now = Utc::now();
        let mut active: entity::comment::ActiveModel = comment.into();
        active.deleted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await?;

        Ok(true)
    }

    async fn find_live(&self, id: i32) -> Result<Option<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find_by_id(id)
            .filter(entity::comment::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }
}
