use crate::model::pagination::PageDto;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;
/// Highest page accepted. Keeps `offset()` within the `i64` range databases bind.
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_PAGE_SIZE;

/// Resolved pagination input. `page` is 1-based and both values are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    /// Builds a request, replacing non-positive values with the defaults and capping
    /// the page at `MAX_PAGE` and the page size at `MAX_PAGE_SIZE`.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: match page {
                0 => DEFAULT_PAGE,
                page => page.min(MAX_PAGE),
            },
            page_size: match page_size {
                0 => DEFAULT_PAGE_SIZE,
                size => size.min(MAX_PAGE_SIZE),
            },
        }
    }

    /// Number of rows to skip: `(page - 1) * page_size`.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

/// One page of domain models plus the total count of matching rows.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self {
            items,
            total,
            request,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.request.page_size)
    }

    /// Converts every item with `f` and wraps the result for the API.
    pub fn into_dto<D>(self, f: impl FnMut(T) -> D) -> PageDto<D> {
        let total_pages = self.total_pages();

        PageDto {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.request.page,
            page_size: self.request.page_size,
            total_pages,
        }
    }
}
