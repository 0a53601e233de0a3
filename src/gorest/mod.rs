//! The users collection: data model, pagination and service.
//!
//! # Overview
//!
//! - [`UserService`]: list, get, update, delete and sort calls
//! - [`User`], [`UserUpdate`]: records and partial updates
//! - [`PageResult`], [`Pagination`]: one page plus its position in the collection
//! - [`PaginationHeaders`]: names of the headers pagination is read from
//! - [`RequestParams`]: `page`/`per_page` query parameters
//! - [`SortKey`]: the field a sort compares on
//! - [`ServiceError`]: failure of a `try_*` call

mod errors;
mod model;
mod pagination;
mod service;

pub use errors::ServiceError;
pub use model::{
    sort_users, PageResult, RequestParams, SortKey, UnknownSortKeyError, User, UserUpdate,
};
pub use pagination::{Pagination, PaginationError, PaginationHeaders};
pub use service::UserService;
