use crate::server::{
    data::team::TeamRepository,
    model::{page::PageRequest, team::TeamParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod crud;
mod membership;

fn params(name: &str, project_id: Option<i32>) -> TeamParams {
    TeamParams {
        name: name.to_string(),
        description: String::new(),
        project_id,
    }
}
