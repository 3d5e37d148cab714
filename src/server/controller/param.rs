//! Query parameters shared by list endpoints.

use serde::Deserialize;

use crate::server::{
    model::page::{PageRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE},
    util::parse::{parse_id_filter, parse_positive_u64},
};

/// Raw pagination query.
///
/// Values are kept as strings so that malformed input falls back to the defaults
/// instead of failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<String>,
    #[serde(alias = "pageSize")]
    pub page_size: Option<String>,
}

impl PaginationQuery {
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::new(
            parse_positive_u64(self.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            parse_positive_u64(self.page_size.as_deref()).unwrap_or(DEFAULT_PAGE_SIZE),
        )
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct TaskListQuery {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(alias = "projectId")]
    pub project_id: Option<String>,
}

impl TaskListQuery {
    pub fn project_id(&self) -> Option<i32> {
        parse_id_filter(self.project_id.as_deref())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CommentListQuery {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(alias = "taskId")]
    pub task_id: Option<String>,
}

impl CommentListQuery {
    pub fn task_id(&self) -> Option<i32> {
        parse_id_filter(self.task_id.as_deref())
    }
}
