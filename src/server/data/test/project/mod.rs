use crate::server::{
    data::project::ProjectRepository,
    model::{page::PageRequest, project::ProjectParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_paginated;
mod membership;
mod update;

fn params(name: &str) -> ProjectParams {
    ProjectParams {
        name: name.to_string(),
        description: "A project".to_string(),
        start_date: None,
        end_date: None,
        status: "planned".to_string(),
    }
}
