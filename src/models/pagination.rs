//! Pagination filters and listing metadata

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{AppError, AppResult};

/// Hard cap on the number of records a single page may request
pub const MAX_PAGE_SIZE: i64 = 50;

/// Raw pagination query parameters (`?page=&length=`)
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PageQuery {
    /// Page number (default: 1)
    pub page: Option<i64>,
    /// Records per page (default: 10, max: 50)
    pub length: Option<i64>,
}

/// Resolved pagination filters
#[derive(Debug, Clone, Copy)]
pub struct Filters {
    pub page: i64,
    pub page_size: i64,
}

impl From<PageQuery> for Filters {
    fn from(query: PageQuery) -> Self {
        Self {
            page: query.page.unwrap_or(1),
            page_size: query.length.unwrap_or(10),
        }
    }
}

impl Filters {
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// Saturates instead of overflowing: an empty result set accepts any
    /// page number, so `page` can be arbitrarily large here.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    /// Range checks that need no knowledge of the record count.
    /// Runs before any database query.
    pub fn validate(&self) -> AppResult<()> {
        if self.page < 1 {
            return Err(AppError::Validation(
                "page must not be less than 1".to_string(),
            ));
        }
        if self.page_size < 1 {
            return Err(AppError::Validation(
                "length must not be less than 1".to_string(),
            ));
        }
        if self.page_size > MAX_PAGE_SIZE {
            return Err(AppError::Validation(format!(
                "length must not be greater than {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(())
    }

    /// Rejects pages past the end once the total is known. An empty result
    /// set has no last page, so any page number is accepted for it.
    pub fn validate_against(&self, metadata: &Metadata) -> AppResult<()> {
        if metadata.total_records > 0 && self.page > metadata.last_page {
            return Err(AppError::Validation(format!(
                "page must not be greater than {}",
                metadata.last_page
            )));
        }
        Ok(())
    }
}

/// Listing metadata, computed per request from the current record count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct Metadata {
    pub current_page: i64,
    pub page_size: i64,
    pub first_page: i64,
    pub last_page: i64,
    pub total_records: i64,
}

impl Metadata {
    /// Compute metadata for a listing. Zero records yields the zero value.
    pub fn calculate(total_records: i64, page: i64, page_size: i64) -> Self {
        if total_records == 0 {
            return Self::default();
        }
        Self {
            current_page: page,
            page_size,
            first_page: 1,
            last_page: (total_records + page_size - 1) / page_size,
            total_records,
        }
    }
}
