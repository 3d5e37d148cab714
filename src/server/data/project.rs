use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{
    page::PageRequest,
    project::{Project, ProjectParams, ProjectWithRelations},
    task::Task,
    team::Team,
    user::User,
};

pub struct ProjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new project
    pub async fn create(&self, params: ProjectParams) -> Result<Project, DbErr> {
        let now = Utc::now();
        let project = entity::project::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            status: ActiveValue::Set(params.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Project::from_entity(project))
    }

    /// Gets a live project by ID with its live members, tasks and teams.
    ///
    /// Issues one query for the project and one per relation.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ProjectWithRelations>, DbErr> {
        let Some(project) = self.find_live(id).await? else {
            return Ok(None);
        };

        let users = entity::prelude::User::find()
            .join(JoinType::InnerJoin, entity::user::Relation::ProjectUser.def())
            .filter(entity::project_user::Column::ProjectId.eq(id))
            .filter(entity::user::Column::DeletedAt.is_null())
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        let tasks = entity::prelude::Task::find()
            .filter(entity::task::Column::ProjectId.eq(id))
            .filter(entity::task::Column::DeletedAt.is_null())
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await?;

        let teams = entity::prelude::Team::find()
            .filter(entity::team::Column::ProjectId.eq(id))
            .filter(entity::team::Column::DeletedAt.is_null())
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(ProjectWithRelations {
            project: Project::from_entity(project),
            users: users.into_iter().map(User::from_entity).collect(),
            tasks: tasks.into_iter().map(Task::from_entity).collect(),
            teams: teams.into_iter().map(Team::from_entity).collect(),
        }))
    }

    /// Whether a live project with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Project::find_by_id(id)
            .filter(entity::project::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Number of live projects among `ids`.
    pub async fn count_existing(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::Project::find()
            .filter(entity::project::Column::Id.is_in(ids.to_vec()))
            .filter(entity::project::Column::DeletedAt.is_null())
            .count(self.db)
            .await
    }

    /// Gets a page of live projects ordered by ID, plus the total count of live projects.
    pub async fn get_paginated(&self, request: PageRequest) -> Result<(Vec<Project>, u64), DbErr> {
        let query = entity::prelude::Project::find()
            .filter(entity::project::Column::DeletedAt.is_null());

        let total = query.clone().count(self.db).await?;

        let projects = query
            .order_by_asc(entity::project::Column::Id)
            .offset(request.offset())
            .limit(request.page_size)
            .all(self.db)
            .await?;

        Ok((
            projects.into_iter().map(Project::from_entity).collect(),
            total,
        ))
    }

    /// Replaces every editable field of a live project.
    ///
    /// # Returns
    /// - `Ok(Some(Project))` - Updated project
    /// - `Ok(None)` - No live project with that ID
    pub async fn update(&self, id: i32, params: ProjectParams) -> Result<Option<Project>, DbErr> {
        let Some(project) = self.find_live(id).await? else {
            return Ok(None);
        };

        let mut active: entity::project::ActiveModel = project.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.start_date = ActiveValue::Set(params.start_date);
        active.end_date = ActiveValue::Set(params.end_date);
        active.status = ActiveValue::Set(params.status);
        active.updated_at = ActiveValue::Set(Utc::now());

        let project = active.update(self.db).await?;

        Ok(Some(Project::from_entity(project)))
    }

    /// Soft-deletes a project. Returns false when no live project has that ID.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let Some(project) = self.find_live(id).await? else {
            return Ok(false);
        };

        let now = Utc::now();
        let mut active: entity::project::ActiveModel = project.into();
        active.deleted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await?;

        Ok(true)
    }

    /// Adds a user to a project. Adding an existing member is a no-op.
    pub async fn add_user(&self, project_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::ProjectUser::insert(entity::project_user::ActiveModel {
            project_id: ActiveValue::Set(project_id),
            user_id: ActiveValue::Set(user_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::project_user::Column::ProjectId,
                entity::project_user::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Removes a user from a project. Returns false when the user was not a member.
    pub async fn remove_user(&self, project_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ProjectUser::delete_by_id((project_id, user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_live(&self, id: i32) -> Result<Option<entity::project::Model>, DbErr> {
        entity::prelude::Project::find_by_id(id)
            .filter(entity::project::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }
}
