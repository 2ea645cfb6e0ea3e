//! 1-based pagination shared by every listing.

use crate::server::error::AppError;

/// Largest page size a caller may request.
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Validated page request. `page` starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParam {
    pub page: u64,
    pub limit: u64,
}

impl PageParam {
    /// Validates a page request.
    ///
    /// # Returns
    /// - `Ok(PageParam)` - `page >= 1` and `1 <= limit <= MAX_PAGE_LIMIT`
    /// - `Err(AppError::ValidationFailed)` - Either bound violated
    pub fn new(page: u64, limit: u64) -> Result<Self, AppError> {
        if page < 1 {
            return Err(AppError::ValidationFailed(
                "page must be at least 1".to_string(),
            ));
        }
        if limit < 1 || limit > MAX_PAGE_LIMIT {
            return Err(AppError::ValidationFailed(format!(
                "limit must be between 1 and {}",
                MAX_PAGE_LIMIT
            )));
        }

        Ok(Self { page, limit })
    }

    /// Zero-based page index as used by the SeaORM paginator.
    pub fn index(&self) -> u64 {
        self.page - 1
    }
}

/// One page of results with the total across all pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub list: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl<T> Page<T> {
    pub fn new(list: Vec<T>, total: u64, param: PageParam) -> Self {
        Self {
            list,
            total,
            page: param.page,
            limit: param.limit,
        }
    }

    pub fn empty(param: PageParam) -> Self {
        Self::new(Vec::new(), 0, param)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            list: self.list.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
        }
    }
}
