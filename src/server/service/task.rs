use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::server::{
    data::{project::ProjectRepository, task::TaskRepository, user::UserRepository},
    error::AppError,
    model::{
        page::{Page, PageRequest},
        task::{Task, TaskParams, TaskWithRelations},
    },
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a task inside an existing project.
    ///
    /// # Returns
    /// - `Ok(Task)` - Created task
    /// - `Err(AppError::Validation)` - Title empty or project id missing
    /// - `Err(AppError::BadRequest)` - Project or assignee does not exist
    pub async fn create(&self, params: TaskParams) -> Result<Task, AppError> {
        params.validate()?;
        self.ensure_references(&params).await?;

        let task = TaskRepository::new(self.db).create(params).await?;

        tracing::info!("Created task {} in project {}", task.id, task.project_id);

        Ok(task)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<TaskWithRelations, AppError> {
        TaskRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn get_paginated(
        &self,
        request: PageRequest,
        project_id: Option<i32>,
    ) -> Result<Page<Task>, AppError> {
        let (tasks, total) = TaskRepository::new(self.db)
            .get_paginated(request, project_id)
            .await?;

        Ok(Page::new(tasks, total, request))
    }

    pub async fn update(&self, id: i32, params: TaskParams) -> Result<Task, AppError> {
        params.validate()?;

        let repo = TaskRepository::new(self.db);
        if !repo.exists(id).await? {
            return Err(not_found());
        }

        self.ensure_references(&params).await?;

        repo.update(id, params).await?.ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TaskRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }

    async fn ensure_references(&self, params: &TaskParams) -> Result<(), AppError> {
        if !ProjectRepository::new(self.db)
            .exists(params.project_id)
            .await?
        {
            return Err(AppError::BadRequest("project not found".to_string()));
        }

        if let Some(user_id) = params.assigned_to {
            if !UserRepository::new(self.db).exists(user_id).await? {
                return Err(AppError::BadRequest("assigned user not found".to_string()));
            }
        }

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("task not found".to_string())
}
