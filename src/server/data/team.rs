use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{
    page::PageRequest,
    project::Project,
    team::{Team, TeamParams, TeamWithRelations},
    user::User,
};

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: TeamParams) -> Result<Team, DbErr> {
        let now = Utc::now();
        let team = entity::team::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            project_id: ActiveValue::Set(params.project_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(team))
    }

    /// Gets a live team by ID with its project and live members.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<TeamWithRelations>, DbErr> {
        let Some(team) = self.find_live(id).await? else {
            return Ok(None);
        };

        let project = match team.project_id {
            Some(project_id) => {
                entity::prelude::Project::find_by_id(project_id)
                    .filter(entity::project::Column::DeletedAt.is_null())
                    .one(self.db)
                    .await?
            }
            None => None,
        };

        let users = entity::prelude::User::find()
            .join(JoinType::InnerJoin, entity::user::Relation::TeamUser.def())
            .filter(entity::team_user::Column::TeamId.eq(id))
            .filter(entity::user::Column::DeletedAt.is_null())
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(TeamWithRelations {
            team: Team::from_entity(team),
            project: project.map(Project::from_entity),
            users: users.into_iter().map(User::from_entity).collect(),
        }))
    }

    /// Whether a live team with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Team::find_by_id(id)
            .filter(entity::team::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn get_paginated(&self, request: PageRequest) -> Result<(Vec<Team>, u64), DbErr> {
        let query =
            entity::prelude::Team::find().filter(entity::team::Column::DeletedAt.is_null());

        let total = query.clone().count(self.db).await?;

        let teams = query
            .order_by_asc(entity::team::Column::Id)
            .offset(request.offset())
            .limit(request.page_size)
            .all(self.db)
            .await?;

        Ok((teams.into_iter().map(Team::from_entity).collect(), total))
    }

    /// Replaces every editable field of a live team. `None` when it does not exist.
    pub async fn update(&self, id: i32, params: TeamParams) -> Result<Option<Team>, DbErr> {
        let Some(team) = self.find_live(id).await? else {
            return Ok(None);
        };

        let mut active: entity::team::ActiveModel = team.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.project_id = ActiveValue::Set(params.project_id);
        active.updated_at = ActiveValue::Set(Utc::now());

        let team = active.update(self.db).await?;

        Ok(Some(Team::from_entity(team)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let Some(team) = self.find_live(id).await? else {
            return Ok(false);
        };

        let now = Utc::now();
        let mut active: entity::team::ActiveModel = team.into();
        active.deleted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await?;

        Ok(true)
    }

    /// Adds a user to a team. Adding an existing member is a no-op.
    pub async fn add_user(&self, team_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::TeamUser::insert(entity::team_user::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            user_id: ActiveValue::Set(user_id),
        })
        .on_conflict(
            OnConflict::columns([
                entity::team_user::Column::TeamId,
                entity::team_user::Column::UserId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Removes a user from a team. Returns false when the user was not a member.
    pub async fn remove_user(&self, team_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TeamUser::delete_by_id((team_id, user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn find_live(&self, id: i32) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(id)
            .filter(entity::team::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }
}
