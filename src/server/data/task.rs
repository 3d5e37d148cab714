use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    page::PageRequest,
    project::Project,
    task::{Task, TaskParams, TaskWithRelations},
    user::User,
};

pub struct TaskRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new task
    pub async fn create(&self, params: TaskParams) -> Result<Task, DbErr> {
        let now = Utc::now();
        let task = entity::task::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            project_id: ActiveValue::Set(params.project_id),
            assigned_to: ActiveValue::Set(params.assigned_to),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Task::from_entity(task))
    }

    /// Gets a live task by ID with its project and assignee attached.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<TaskWithRelations>, DbErr> {
        let Some(task) = self.find_live(id).await? else {
            return Ok(None);
        };

        let project = entity::prelude::Project::find_by_id(task.project_id)
            .filter(entity::project::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        let assignee = match task.assigned_to {
            Some(user_id) => {
                entity::prelude::User::find_by_id(user_id)
                    .filter(entity::user::Column::DeletedAt.is_null())
                    .one(self.db)
                    .await?
            }
            None => None,
        };

        Ok(Some(TaskWithRelations {
            task: Task::from_entity(task),
            project: project.map(Project::from_entity),
            assignee: assignee.map(User::from_entity),
        }))
    }

    /// Whether a live task with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Task::find_by_id(id)
            .filter(entity::task::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of live tasks, optionally restricted to one project.
    ///
    /// The count and the page query share the same filter.
    pub async fn get_paginated(
        &self,
        request: PageRequest,
        project_id: Option<i32>,
    ) -> Result<(Vec<Task>, u64), DbErr> {
        let mut query =
            entity::prelude::Task::find().filter(entity::task::Column::DeletedAt.is_null());

        if let Some(project_id) = project_id {
            query = query.filter(entity::task::Column::ProjectId.eq(project_id));
        }

        let total = query.clone().count(self.db).await?;

        let tasks = query
            .order_by_asc(entity::task::Column::Id)
            .offset(request.offset())
            .limit(request.page_size)
            .all(self.db)
            .await?;

        Ok((tasks.into_iter().map(Task::from_entity).collect(), total))
    }

    /// Gets every live task of a project ordered by ID.
    pub async fn get_by_project(&self, project_id: i32) -> Result<Vec<Task>, DbErr> {
        let tasks = entity::prelude::Task::find()
            .filter(entity::task::Column::ProjectId.eq(project_id))
            .filter(entity::task::Column::DeletedAt.is_null())
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await?;

        Ok(tasks.into_iter().map(Task::from_entity).collect())
    }

    /// Replaces every editable field of a live task. `None` when it does not exist.
    pub async fn update(&self, id: i32, params: TaskParams) -> Result<Option<Task>, DbErr> {
        let Some(task) = self.find_live(id).await? else {
            return Ok(None);
        };

        let mut active: entity::task::ActiveModel = task.into();
        active.title = ActiveValue::Set(params.title);
        active.description = ActiveValue::Set(params.description);
        active.project_id = ActiveValue::Set(params.project_id);
        active.assigned_to = ActiveValue::Set(params.assigned_to);
        active.updated_at = ActiveValue::Set(Utc::now());

        let task = active.update(self.db).await?;

        Ok(Some(Task::from_entity(task)))
    }

    /// Soft-deletes a task. Returns false when no live task has that ID.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let Some(task) = self.find_live(id).await? else {
            return Ok(false);
        };

        let now = Utc::now();
        let mut active: entity::task::ActiveModel = task.into();
        active.deleted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await?;

        Ok(true)
    }

    async fn find_live(&self, id: i32) -> Result<Option<entity::task::Model>, DbErr> {
        entity::prelude::Task::find_by_id(id)
            .filter(entity::task::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }
}
