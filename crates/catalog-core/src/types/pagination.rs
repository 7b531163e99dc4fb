//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// A validated, 1-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-based).
    pub page: u64,
    /// Number of items per page.
    pub size: u64,
}

impl PageRequest {
    /// Build a page request from raw caller parameters.
    ///
    /// Absent values fall back to page 1 and [`DEFAULT_PAGE_SIZE`]. A page
    /// or size below 1 would produce a negative skip; it is rejected as an
    /// invalid argument instead of being clamped.
    pub fn from_params(page: Option<i64>, size: Option<i64>) -> Result<Self, AppError> {
        let page = page.unwrap_or(1);
        let size = size.unwrap_or(DEFAULT_PAGE_SIZE as i64);

        if page < 1 {
            return Err(AppError::invalid_argument(format!(
                "page must be 1 or greater (pages are 1-based), got {page}"
            )));
        }
        if size < 1 {
            return Err(AppError::invalid_argument(format!(
                "page size must be 1 or greater, got {size}"
            )));
        }

        Ok(Self {
            page: page as u64,
            size: size as u64,
        })
    }

    /// Number of items skipped before this page: `(page - 1) * size`.
    pub fn offset(&self) -> usize {
        let offset = (self.page - 1).saturating_mul(self.size);
        usize::try_from(offset).unwrap_or(usize::MAX)
    }

    /// Maximum number of items on this page.
    pub fn limit(&self) -> usize {
        usize::try_from(self.size).unwrap_or(usize::MAX)
    }

    /// Keep only the items inside `[offset, offset + size)`.
    pub fn window<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.limit())
            .collect()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}
