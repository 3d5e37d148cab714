//! Project domain models and parameters.

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{
    model::project::{CreateProjectDto, ProjectDto, ProjectSummaryDto, UpdateProjectDto},
    server::model::{task::Task, team::Team, user::User},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    pub fn from_entity(entity: entity::project::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            start_date: entity.start_date,
            end_date: entity.end_date,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_summary_dto(self) -> ProjectSummaryDto {
        ProjectSummaryDto {
            id: self.id,
            name: self.name,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Project with its live members, tasks and teams, each loaded by its own query.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectWithRelations {
    pub project: Project,
    pub users: Vec<User>,
    pub tasks: Vec<Task>,
    pub teams: Vec<Team>,
}

impl ProjectWithRelations {
    /// Wraps a project that has no relations yet, such as one just created.
    pub fn without_relations(project: Project) -> Self {
        Self {
            project,
            users: Vec::new(),
            tasks: Vec::new(),
            teams: Vec::new(),
        }
    }

    pub fn into_dto(self) -> ProjectDto {
        let project = self.project;

        ProjectDto {
            id: project.id,
            name: project.name,
            description: project.description,
            start_date: project.start_date,
            end_date: project.end_date,
            status: project.status,
            created_at: project.created_at,
            updated_at: project.updated_at,
            users: self.users.into_iter().map(User::into_member_dto).collect(),
            tasks: self.tasks.into_iter().map(Task::into_dto).collect(),
            teams: self.teams.into_iter().map(Team::into_summary_dto).collect(),
        }
    }
}

/// Parameters for creating a project or replacing all of its fields.
#[derive(Debug, Clone, Validate)]
pub struct ProjectParams {
    #[validate(length(min = 3, message = "project name must be at least 3 characters"))]
    pub name: String,
    pub description: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: String,
}

impl From<CreateProjectDto> for ProjectParams {
    fn from(dto: CreateProjectDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            start_date: dto.start_date,
            end_date: dto.end_date,
            status: dto.status,
        }
    }
}

impl From<UpdateProjectDto> for ProjectParams {
    fn from(dto: UpdateProjectDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            start_date: dto.start_date,
            end_date: dto.end_date,
            status: dto.status,
        }
    }
}
