use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{project::ProjectSummaryDto, user::MemberDto};

/// Team with its project and members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub project_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub project: Option<ProjectSummaryDto>,
    pub users: Vec<MemberDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamSummaryDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub project_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTeamDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub project_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateTeamDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub project_id: Option<i32>,
}
