//! Task domain models and parameters.

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{
    model::task::{CreateTaskDto, TaskDetailDto, TaskDto, UpdateTaskDto},
    server::model::{project::Project, user::User},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub project_id: i32,
    pub assigned_to: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn from_entity(entity: entity::task::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            project_id: entity.project_id,
            assigned_to: entity.assigned_to,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            id: self.id,
            title: self.title,
            description: self.description,
            project_id: self.project_id,
            assigned_to: self.assigned_to,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Task with its project and assignee. Either is `None` when soft-deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskWithRelations {
    pub task: Task,
    pub project: Option<Project>,
    pub assignee: Option<User>,
}

impl TaskWithRelations {
    pub fn into_dto(self) -> TaskDetailDto {
        let task = self.task;

        TaskDetailDto {
            id: task.id,
            title: task.title,
            description: task.description,
            project_id: task.project_id,
            assigned_to: task.assigned_to,
            created_at: task.created_at,
            updated_at: task.updated_at,
            project: self.project.map(Project::into_summary_dto),
            assignee: self.assignee.map(User::into_member_dto),
        }
    }
}

/// Parameters for creating a task or replacing all of its fields.
#[derive(Debug, Clone, Validate)]
pub struct TaskParams {
    #[validate(length(min = 1, message = "task title is required"))]
    pub title: String,
    pub description: String,
    #[validate(range(min = 1, message = "task must be associated with a project"))]
    pub project_id: i32,
    pub assigned_to: Option<i32>,
}

impl From<CreateTaskDto> for TaskParams {
    fn from(dto: CreateTaskDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            project_id: dto.project_id,
            assigned_to: dto.assigned_to,
        }
    }
}

impl From<UpdateTaskDto> for TaskParams {
    fn from(dto: UpdateTaskDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            project_id: dto.project_id,
            assigned_to: dto.assigned_to,
        }
    }
}
