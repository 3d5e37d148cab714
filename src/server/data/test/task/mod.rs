use crate::server::{
    data::task::TaskRepository,
    model::{page::PageRequest, task::TaskParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod get_by_project;
mod get_paginated;
mod update;

fn params(title: &str, project_id: i32) -> TaskParams {
    TaskParams {
        title: title.to_string(),
        description: String::new(),
        project_id,
        assigned_to: None,
    }
}
