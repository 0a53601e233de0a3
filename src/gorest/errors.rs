//! Error types for users collection operations.

use thiserror::Error;

use crate::clients::{HttpError, HttpResponseError, InvalidHttpRequestError};
use crate::gorest::PaginationError;

/// Error type for [`UserService`](crate::UserService) operations.
///
/// Returned by the `try_*` methods. The plain methods log these through the
/// error classifier and return an empty, absent or `false` result instead.
///
/// # Example
///
/// ```rust,ignore
/// match service.try_get(5555).await {
///     Ok(Some(user)) => println!("Found {}", user.name),
///     Ok(None) => println!("No user in the response"),
///     Err(e) if e.status() == Some(404) => println!("Not found"),
///     Err(e) => println!("Request failed: {}", e),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The transport failed or the server rejected the request.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Pagination headers were present but unusable.
    #[error(transparent)]
    Pagination(#[from] PaginationError),

    /// A success response body did not match the expected shape.
    #[error("Failed to decode {operation} response: {source}")]
    Decode {
        /// The operation whose response failed to decode.
        operation: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be serialized.
    #[error("Failed to encode {operation} request body: {source}")]
    Encode {
        /// The operation whose body failed to encode.
        operation: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A user id or page number was zero.
    #[error("Cannot {operation} with {field} 0; {field} must be a positive integer")]
    NotPositive {
        /// The operation that received the value.
        operation: &'static str,
        /// The offending parameter, `id` or `page`.
        field: &'static str,
    },

    /// An update was requested without a user id.
    #[error("Cannot {operation} a user without an id")]
    MissingId {
        /// The operation that required the id.
        operation: &'static str,
    },
}

impl ServiceError {
    /// Returns the HTTP status code if the server rejected the request.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(HttpError::Response(HttpResponseError { code, .. })) => Some(*code),
            _ => None,
        }
    }
}

impl From<HttpResponseError> for ServiceError {
    fn from(error: HttpResponseError) -> Self {
        Self::Http(HttpError::Response(error))
    }
}

impl From<InvalidHttpRequestError> for ServiceError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}
