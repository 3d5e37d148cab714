use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::server::{
    data::{project::ProjectRepository, team::TeamRepository, user::UserRepository},
    error::AppError,
    model::{
        page::{Page, PageRequest},
        team::{Team, TeamParams, TeamWithRelations},
    },
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team, optionally attached to a project.
    pub async fn create(&self, params: TeamParams) -> Result<TeamWithRelations, AppError> {
        params.validate()?;
        self.ensure_project(params.project_id).await?;

        let repo = TeamRepository::new(self.db);
        let team = repo.create(params).await?;

        tracing::info!("Created team {} ({})", team.id, team.name);

        repo.find_by_id(team.id).await?.ok_or_else(not_found)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<TeamWithRelations, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn get_paginated(&self, request: PageRequest) -> Result<Page<Team>, AppError> {
        let (teams, total) = TeamRepository::new(self.db).get_paginated(request).await?;

        Ok(Page::new(teams, total, request))
    }

    pub async fn update(&self, id: i32, params: TeamParams) -> Result<TeamWithRelations, AppError> {
        params.validate()?;

        let repo = TeamRepository::new(self.db);
        if !repo.exists(id).await? {
            return Err(not_found());
        }

        self.ensure_project(params.project_id).await?;

        repo.update(id, params).await?.ok_or_else(not_found)?;
        repo.find_by_id(id).await?.ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !TeamRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }

    /// Adds a user to a team. Adding an existing member is a no-op.
    pub async fn add_user(&self, team_id: i32, user_id: i32) -> Result<(), AppError> {
        self.ensure_team_and_user(team_id, user_id).await?;

        TeamRepository::new(self.db).add_user(team_id, user_id).await?;

        tracing::info!("Added user {} to team {}", user_id, team_id);

        Ok(())
    }

    pub async fn remove_user(&self, team_id: i32, user_id: i32) -> Result<(), AppError> {
        self.ensure_team_and_user(team_id, user_id).await?;

        if !TeamRepository::new(self.db)
            .remove_user(team_id, user_id)
            .await?
        {
            return Err(AppError::NotFound(
                "user is not a member of the team".to_string(),
            ));
        }

        Ok(())
    }

    async fn ensure_project(&self, project_id: Option<i32>) -> Result<(), AppError> {
        let Some(project_id) = project_id else {
            return Ok(());
        };

        if !ProjectRepository::new(self.db).exists(project_id).await? {
            return Err(AppError::BadRequest("project not found".to_string()));
        }

        Ok(())
    }

    async fn ensure_team_and_user(&self, team_id: i32, user_id: i32) -> Result<(), AppError> {
        if !TeamRepository::new(self.db).exists(team_id).await? {
            return Err(not_found());
        }
        if !UserRepository::new(self.db).exists(user_id).await? {
            return Err(AppError::NotFound("user not found".to_string()));
        }

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("team not found".to_string())
}
