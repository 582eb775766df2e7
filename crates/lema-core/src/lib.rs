//! # Lema Core
//!
//! Core types shared by every layer of the Lema API.
//!
//! - [`errors`]: error kinds and the [`AppError`] HTTP error type
//! - [`pagination`]: page/limit parsing and page arithmetic
//! - [`response`]: the uniform JSON envelope wrapped around every response
//!
//! # Example
//!
//! ```ignore
//! use lema_core::{ApiResponse, AppError, ErrorKind, PaginationQuery};
//!
//! let request = PaginationQuery::default().parse()?;
//! assert_eq!(request.offset(), 0);
//!
//! let ok = ApiResponse::new("Users fetched successfully").with_data(vec![1, 2, 3]);
//! let err = AppError::kind(ErrorKind::NotFound);
//! ```

pub mod errors;
pub mod pagination;
pub mod response;

pub use errors::{AppError, ErrorKind};
pub use pagination::{PageMeta, PageRequest, PaginationError, PaginationQuery};
pub use response::ApiResponse;
