//! Shared helper utilities for factory methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// Keeps usernames and emails unique across factories within one test binary.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a project and one task inside it.
///
/// # Returns
/// - `Ok((project, task))` - Created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_task_with_project(
    db: &DatabaseConnection,
) -> Result<(entity::project::Model, entity::task::Model), DbErr> {
    let project = super::project::create_project(db).await?;
    let task = super::task::create_task(db, project.id).await?;

    Ok((project, task))
}

/// Adds a user to a project by inserting the join row directly.
pub async fn add_project_member(
    db: &DatabaseConnection,
    project_id: i32,
    user_id: i32,
) -> Result<entity::project_user::Model, DbErr> {
    entity::project_user::ActiveModel {
        project_id: ActiveValue::Set(project_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await
}

/// Adds a user to a team by inserting the join row directly.
pub async fn add_team_member(
    db: &DatabaseConnection,
    team_id: i32,
    user_id: i32,
) -> Result<entity::team_user::Model, DbErr> {
    entity::team_user::ActiveModel {
        team_id: ActiveValue::Set(team_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await
}
