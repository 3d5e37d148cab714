use crate::server::{
    data::user::UserRepository,
    model::{page::PageRequest, user::CreateUserParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_paginated;

fn params(username: &str, project_ids: Vec<i32>) -> CreateUserParams {
    CreateUserParams {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password: "$argon2id$placeholder".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        role: "developer".to_string(),
        project_ids,
    }
}
