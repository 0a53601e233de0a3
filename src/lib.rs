//! # GoRest Client
//!
//! An async client for the GoRest `users` collection, with paginated
//! listing, single-record calls and client-side sorting.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`GoRestConfig`] and [`GoRestConfigBuilder`]
//! - Layered JSON configuration files via [`FileConfigSource`]
//! - [`UserService`] with `list`, `list_page`, `get`, `update`, `delete` and `sort`
//! - Pagination metadata read from response headers into [`Pagination`]
//! - Failure classification via [`classify_error`] and [`FailureKind`]
//! - Injected log sinks via [`LogSink`], forwarding to `tracing` by default
//!
//! ## Quick Start
//!
//! ```rust
//! use gorest_client::{AccessToken, GoRestConfig, PerPage};
//!
//! let config = GoRestConfig::builder()
//!     .base_url("https://gorest.co.in")
//!     .access_token(AccessToken::new("your-access-token"))
//!     .default_per_page(PerPage::new(20).unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.default_per_page().get(), 20);
//! ```
//!
//! ## Calling the service
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use gorest_client::{SortKey, TracingSink, UserService, UserUpdate};
//!
//! let service = UserService::new(&config, Arc::new(TracingSink));
//!
//! let mut page = service.list_page(3, None).await;
//! if let Some(pagination) = page.pagination {
//!     println!("{} pages", pagination.total_pages);
//! }
//!
//! service.sort(&mut page.users, Some(SortKey::Name));
//! if let Some(last) = page.users.last() {
//!     service.update(&UserUpdate::new(last.id).name("Alex Smith")).await;
//!     service.delete(last.id).await;
//! }
//! ```
//!
//! ## Soft and strict calls
//!
//! The plain service methods never fail: errors are logged through the
//! configured [`LogSink`] and an empty page, `None` or `false` is returned.
//! Each has a `try_*` counterpart returning `Result<_, ServiceError>` for
//! callers that need to tell "empty" from "failed".
//!
//! ## Thread Safety
//!
//! [`UserService`], [`GoRestConfig`] and [`HttpClient`] are `Send + Sync`.

pub mod clients;
pub mod config;
pub mod error;
pub mod gorest;
pub mod logging;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, ConfigSource, FileConfigSource, GoRestConfig, GoRestConfigBuilder, PerPage,
};
pub use error::ConfigError;

pub use gorest::{
    sort_users, PageResult, Pagination, PaginationError, PaginationHeaders, RequestParams,
    ServiceError, SortKey, UnknownSortKeyError, User, UserService, UserUpdate,
};

pub use logging::{
    classify_error, FailureKind, LogFields, LogRecord, LogSink, MemorySink, TracingSink,
};

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};
