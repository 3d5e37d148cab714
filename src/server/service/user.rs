use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use validator::Validate;

use crate::server::{
    data::{project::ProjectRepository, user::UserRepository},
    error::AppError,
    model::{
        page::{Page, PageRequest},
        user::{CreateUserParams, UserWithProjects},
    },
    util::password::hash_password,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user and adds it to the requested projects.
    ///
    /// The plaintext password is replaced with its Argon2 hash before it reaches the
    /// repository. User and memberships are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(UserWithProjects)` - Created user
    /// - `Err(AppError::Validation)` - Username, email or password invalid
    /// - `Err(AppError::BadRequest)` - A project does not exist, or the username or
    ///   email is taken
    pub async fn create(&self, mut params: CreateUserParams) -> Result<UserWithProjects, AppError> {
        params.validate()?;

        if !params.project_ids.is_empty() {
            let found = ProjectRepository::new(self.db)
                .count_existing(&params.project_ids)
                .await?;
            if found != params.project_ids.len() as u64 {
                return Err(AppError::BadRequest("project not found".to_string()));
            }
        }

        params.password = hash_password(&params.password)?;

        let user = UserRepository::new(self.db)
            .create(params)
            .await
            .map_err(unique_violation_to_bad_request)?;

        tracing::info!("Created user {} ({})", user.user.id, user.user.username);

        Ok(user)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<UserWithProjects, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))
    }

    pub async fn get_paginated(
        &self,
        request: PageRequest,
    ) -> Result<Page<UserWithProjects>, AppError> {
        let (users, total) = UserRepository::new(self.db).get_paginated(request).await?;

        Ok(Page::new(users, total, request))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("user not found".to_string()));
        }

        Ok(())
    }
}

fn unique_violation_to_bad_request(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::BadRequest("username or email already exists".to_string())
        }
        _ => err.into(),
    }
}
