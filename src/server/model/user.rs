//! User domain models and parameters.

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::model::user::{CreateUserDto, MemberDto, UserDto};

/// User without credentials. The password hash never leaves the data layer.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            role: entity.role,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts to the reduced representation embedded in projects and teams.
    pub fn into_member_dto(self) -> MemberDto {
        MemberDto {
            id: self.id,
            username: self.username,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
        }
    }
}

/// User together with the ids of the live projects it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct UserWithProjects {
    pub user: User,
    pub project_ids: Vec<i32>,
}

impl UserWithProjects {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.user.id,
            username: self.user.username,
            email: self.user.email,
            first_name: self.user.first_name,
            last_name: self.user.last_name,
            role: self.user.role,
            project_ids: self.project_ids,
            created_at: self.user.created_at,
            updated_at: self.user.updated_at,
        }
    }
}

/// Parameters for creating a user.
///
/// `password` holds the plaintext on the way into the service and the Argon2 hash on
/// the way into the repository.
#[derive(Debug, Clone, Validate)]
pub struct CreateUserParams {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub project_ids: Vec<i32>,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        let mut project_ids = dto.project_ids;
        project_ids.sort_unstable();
        project_ids.dedup();

        Self {
            username: dto.username,
            email: dto.email,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
            role: dto.role,
            project_ids,
        }
    }
}
