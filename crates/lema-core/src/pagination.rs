//! Page-based pagination.
//!
//! Clients pass `page` (1-indexed) and `limit` as query parameters. Raw text
//! is parsed by [`PaginationQuery::parse`]; absent or empty values fall back
//! to [`DEFAULT_PAGE`] and [`DEFAULT_LIMIT`], and text that is not an integer
//! is rejected with a descriptive [`PaginationError`].
//!
//! The resulting [`PageRequest`] is validated separately: `page` and `limit`
//! must both be at least 1. Nothing is clamped or coerced.
//!
//! # Example
//!
//! ```ignore
//! // GET /api/v1/users?page=3&limit=5
//! let request = PaginationQuery::new(Some("3"), Some("5")).parse()?;
//! request.validate()?;
//!
//! assert_eq!(request.offset(), 10);
//!
//! let meta = PageMeta::new(20, &request)?;
//! assert_eq!(meta.total_pages, 4);
//! assert!(meta.has_next);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("invalid page number")]
    InvalidPage,
    #[error("invalid limit number")]
    InvalidLimit,
    #[error("limit must be greater than zero")]
    NonPositiveLimit,
}

/// Number of rows to skip before the requested page.
///
/// Defined for `page >= 1` and `limit >= 1`; saturates instead of overflowing.
#[must_use]
pub fn offset(page: i64, limit: i64) -> i64 {
    page.saturating_sub(1).saturating_mul(limit)
}

/// `ceil(count / limit)` using integer arithmetic.
///
/// A non-positive `limit` is an error rather than a division by zero.
pub fn total_pages(count: i64, limit: i64) -> Result<i64, PaginationError> {
    if limit <= 0 {
        return Err(PaginationError::NonPositiveLimit);
    }
    if count <= 0 {
        return Ok(0);
    }
    Ok((count - 1) / limit + 1)
}

#[must_use]
pub fn has_next(page: i64, total_pages: i64) -> bool {
    page < total_pages
}

#[must_use]
pub fn has_prev(page: i64) -> bool {
    page > 1
}

fn parse_or_default(
    raw: Option<&str>,
    default: i64,
    err: PaginationError,
) -> Result<i64, PaginationError> {
    match raw {
        None | Some("") => Ok(default),
        Some(text) => text.parse::<i64>().map_err(|_| err),
    }
}

/// Raw `page` / `limit` query parameters, kept as text so that parse
/// failures can be reported with a specific message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page number, 1-indexed (default: 1)
    pub page: Option<String>,
    /// Items per page (default: 10)
    pub limit: Option<String>,
}

impl PaginationQuery {
    pub fn new(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: page.map(str::to_owned),
            limit: limit.map(str::to_owned),
        }
    }

    pub fn parse(&self) -> Result<PageRequest, PaginationError> {
        let page = parse_or_default(
            self.page.as_deref(),
            DEFAULT_PAGE,
            PaginationError::InvalidPage,
        )?;
        let limit = parse_or_default(
            self.limit.as_deref(),
            DEFAULT_LIMIT,
            PaginationError::InvalidLimit,
        )?;

        Ok(PageRequest { page, limit })
    }
}

/// A parsed page request. Call `validate()` before using it for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct PageRequest {
    #[validate(range(min = 1, message = "page must be greater than or equal to 1"))]
    pub page: i64,
    #[validate(range(min = 1, message = "limit must be greater than or equal to 1"))]
    pub limit: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    #[must_use]
    pub fn offset(&self) -> i64 {
        offset(self.page, self.limit)
    }
}

/// Position of a page within the full result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageMeta {
    /// Total number of items across all pages
    pub count: i64,
    pub total_pages: i64,
    pub page: i64,
    pub limit: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    pub fn new(count: i64, request: &PageRequest) -> Result<Self, PaginationError> {
        let total_pages = total_pages(count, request.limit)?;

        Ok(Self {
            count,
            total_pages,
            page: request.page,
            limit: request.limit,
            has_next: has_next(request.page, total_pages),
            has_prev: has_prev(request.page),
        })
    }
}
