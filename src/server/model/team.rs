//! Team domain models and parameters.

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{
    model::team::{CreateTeamDto, TeamDto, TeamSummaryDto, UpdateTeamDto},
    server::model::{project::Project, user::User},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub project_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            project_id: entity.project_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_summary_dto(self) -> TeamSummaryDto {
        TeamSummaryDto {
            id: self.id,
            name: self.name,
            description: self.description,
            project_id: self.project_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamWithRelations {
    pub team: Team,
    pub project: Option<Project>,
    pub users: Vec<User>,
}

impl TeamWithRelations {
    pub fn into_dto(self) -> TeamDto {
        let team = self.team;

        TeamDto {
            id: team.id,
            name: team.name,
            description: team.description,
            project_id: team.project_id,
            created_at: team.created_at,
            updated_at: team.updated_at,
            project: self.project.map(Project::into_summary_dto),
            users: self.users.into_iter().map(User::into_member_dto).collect(),
        }
    }
}

/// Parameters for creating a team or replacing all of its fields.
#[derive(Debug, Clone, Validate)]
pub struct TeamParams {
    #[validate(length(min = 1, message = "team name is required"))]
    pub name: String,
    pub description: String,
    pub project_id: Option<i32>,
}

impl From<CreateTeamDto> for TeamParams {
    fn from(dto: CreateTeamDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            project_id: dto.project_id,
        }
    }
}

impl From<UpdateTeamDto> for TeamParams {
    fn from(dto: UpdateTeamDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            project_id: dto.project_id,
        }
    }
}
