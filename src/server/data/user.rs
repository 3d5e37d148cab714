use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    TransactionTrait,
};

use crate::server::model::{
    page::PageRequest,
    user::{CreateUserParams, User, UserWithProjects},
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user and its project memberships in a single transaction.
    ///
    /// `params.password` must already be hashed. If any membership insert fails the
    /// user row is rolled back with it.
    ///
    /// # Returns
    /// - `Ok(UserWithProjects)` - Created user with the memberships that were inserted
    /// - `Err(DbErr)` - Insert failed (including unique violations on username/email)
    pub async fn create(&self, params: CreateUserParams) -> Result<UserWithProjects, DbErr> {
        let txn = self.db.begin().await?;

        match Self::insert_with_projects(&txn, params).await {
            Ok(user) => {
                txn.commit().await?;
                Ok(user)
            }
            Err(err) => {
                txn.rollback().await?;
                Err(err)
            }
        }
    }

    async fn insert_with_projects(
        txn: &DatabaseTransaction,
        params: CreateUserParams,
    ) -> Result<UserWithProjects, DbErr> {
        let now = Utc::now();
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            role: ActiveValue::Set(params.role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        for project_id in &params.project_ids {
            entity::project_user::ActiveModel {
                project_id: ActiveValue::Set(*project_id),
                user_id: ActiveValue::Set(user.id),
            }
            .insert(txn)
            .await?;
        }

        Ok(UserWithProjects {
            user: User::from_entity(user),
            project_ids: params.project_ids,
        })
    }

    /// Gets a live user by ID with the ids of its live projects.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<UserWithProjects>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut memberships = self.project_ids_by_user(&[id]).await?;

        Ok(Some(UserWithProjects {
            user: User::from_entity(user),
            project_ids: memberships.remove(&id).unwrap_or_default(),
        }))
    }

    /// Whether a live user with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets a page of live users ordered by ID, plus the total count of live users.
    ///
    /// Memberships for the whole page are fetched with one additional query.
    pub async fn get_paginated(
        &self,
        request: PageRequest,
    ) -> Result<(Vec<UserWithProjects>, u64), DbErr> {
        let query =
            entity::prelude::User::find().filter(entity::user::Column::DeletedAt.is_null());

        let total = query.clone().count(self.db).await?;

        let users = query
            .order_by_asc(entity::user::Column::Id)
            .offset(request.offset())
            .limit(request.page_size)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
        let mut memberships = self.project_ids_by_user(&ids).await?;

        let users = users
            .into_iter()
            .map(|user| UserWithProjects {
                project_ids: memberships.remove(&user.id).unwrap_or_default(),
                user: User::from_entity(user),
            })
            .collect();

        Ok((users, total))
    }

    /// Soft-deletes a user.
    ///
    /// # Returns
    /// - `Ok(true)` - User was live and is now marked deleted
    /// - `Ok(false)` - No live user with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let now = Utc::now();
        let mut active: entity::user::ActiveModel = user.into();
        active.deleted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await?;

        Ok(true)
    }

    /// Maps each user ID to the sorted IDs of the live projects it belongs to.
    async fn project_ids_by_user(
        &self,
        user_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::ProjectUser::find()
            .join(
                JoinType::InnerJoin,
                entity::project_user::Relation::Project.def(),
            )
            .filter(entity::project_user::Column::UserId.is_in(user_ids.to_vec()))
            .filter(entity::project::Column::DeletedAt.is_null())
            .order_by_asc(entity::project_user::Column::ProjectId)
            .all(self.db)
            .await?;

        let mut map: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in rows {
            map.entry(row.user_id).or_default().push(row.project_id);
        }

        Ok(map)
    }
}
