use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of a list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PageDto<T> {
    pub items: Vec<T>,
    /// Number of live records matching the query across all pages.
    pub total: u64,
    /// 1-based page number that was served.
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}
