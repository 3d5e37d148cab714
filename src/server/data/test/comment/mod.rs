use crate::server::{
    data::comment::CommentRepository,
    model::{comment::CreateCommentParams, page::PageRequest},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
