/// Pagination support for queries
///
/// Pages are zero-based: page 0 is the first window of `page_size` items.
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pagination parameters for queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Build from optional query-string values, falling back to defaults
    pub fn from_query(page: Option<u32>, size: Option<u32>) -> AppResult<Self> {
        let params = Self::new(page.unwrap_or(0), size.unwrap_or(DEFAULT_PAGE_SIZE));
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(AppError::InvalidInput(format!(
                "page size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(())
    }

    /// Calculate offset for database queries
    pub fn offset(&self) -> i64 {
        self.page as i64 * self.page_size as i64
    }

    /// Get limit for database queries
    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total_count: u64, params: &PaginationParams) -> Self {
        let total_pages = total_count.div_ceil(params.page_size.max(1) as u64) as u32;

        Self {
            items,
            total_count,
            page: params.page,
            page_size: params.page_size,
            total_pages,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PaginatedResult<U> {
        PaginatedResult {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}
