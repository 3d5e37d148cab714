use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::server::{
    data::{project::ProjectRepository, task::TaskRepository, user::UserRepository},
    error::AppError,
    model::{
        page::{Page, PageRequest},
        project::{Project, ProjectParams, ProjectWithRelations},
        task::Task,
    },
};

pub struct ProjectService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a project. A new project has no users, tasks or teams yet.
    pub async fn create(&self, params: ProjectParams) -> Result<ProjectWithRelations, AppError> {
        params.validate()?;

        let project = ProjectRepository::new(self.db).create(params).await?;

        tracing::info!("Created project {} ({})", project.id, project.name);

        Ok(ProjectWithRelations::without_relations(project))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ProjectWithRelations, AppError> {
        ProjectRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn get_paginated(&self, request: PageRequest) -> Result<Page<Project>, AppError> {
        let (projects, total) = ProjectRepository::new(self.db)
            .get_paginated(request)
            .await?;

        Ok(Page::new(projects, total, request))
    }

    /// Replaces every field of a project and returns it with its relations.
    pub async fn update(
        &self,
        id: i32,
        params: ProjectParams,
    ) -> Result<ProjectWithRelations, AppError> {
        params.validate()?;

        let repo = ProjectRepository::new(self.db);

        if repo.update(id, params).await?.is_none() {
            return Err(not_found());
        }

        repo.find_by_id(id).await?.ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ProjectRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }

    /// Gets all live tasks of a live project.
    pub async fn get_tasks(&self, project_id: i32) -> Result<Vec<Task>, AppError> {
        if !ProjectRepository::new(self.db).exists(project_id).await? {
            return Err(not_found());
        }

        Ok(TaskRepository::new(self.db)
            .get_by_project(project_id)
            .await?)
    }

    /// Adds a user to a project. Adding an existing member is a no-op.
    pub async fn add_user(&self, project_id: i32, user_id: i32) -> Result<(), AppError> {
        self.ensure_project_and_user(project_id, user_id).await?;

        ProjectRepository::new(self.db)
            .add_user(project_id, user_id)
            .await?;

        tracing::info!("Added user {} to project {}", user_id, project_id);

        Ok(())
    }

    pub async fn remove_user(&self, project_id: i32, user_id: i32) -> Result<(), AppError> {
        self.ensure_project_and_user(project_id, user_id).await?;

        if !ProjectRepository::new(self.db)
            .remove_user(project_id, user_id)
            .await?
        {
            return Err(AppError::NotFound(
                "user is not a member of the project".to_string(),
            ));
        }

        Ok(())
    }

    async fn ensure_project_and_user(&self, project_id: i32, user_id: i32) -> Result<(), AppError> {
        if !ProjectRepository::new(self.db).exists(project_id).await? {
            return Err(not_found());
        }
        if !UserRepository::new(self.db).exists(user_id).await? {
            return Err(AppError::NotFound("user not found".to_string()));
        }

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("project not found".to_string())
}
