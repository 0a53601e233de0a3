//! HTTP-specific error types for the GoRest client.
//!
//! - [`HttpResponseError`]: The server answered with a non-2xx status
//! - [`InvalidHttpRequestError`]: The request failed validation before sending
//! - [`HttpError`]: Unified error type for the transport layer
//!
//! # Example
//!
//! ```rust,ignore
//! use gorest_client::clients::{HttpClient, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}", e.code),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {}", e),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when the server responds with a non-successful status.
///
/// The body is kept as parsed JSON (a JSON string when the body was not
/// JSON, `null` when it was empty).
///
/// # Example
///
/// ```rust
/// use gorest_client::clients::HttpResponseError;
/// use serde_json::json;
///
/// let error = HttpResponseError {
///     code: 404,
///     status_text: Some("Not Found".to_string()),
///     body: json!({"message": "Resource not found"}),
/// };
///
/// assert_eq!(error.to_string(), "Request failed with status 404");
/// ```
#[derive(Debug, Error)]
#[error("Request failed with status {code}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The canonical reason phrase for the status, if known.
    pub status_text: Option<String>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path cannot be appended to the collection endpoint.
    #[error("Invalid request path: {path}")]
    InvalidPath {
        /// The rejected path.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The request could not be built, or the response (headers or body)
    /// did not arrive in full.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_response_error_message_includes_status_code() {
        let error = HttpResponseError {
            code: 422,
            status_text: Some("Unprocessable Entity".to_string()),
            body: json!([{"field": "email", "message": "has already been taken"}]),
        };
        assert_eq!(error.to_string(), "Request failed with status 422");
    }

    #[test]
    fn test_invalid_request_error_missing_body() {
        let error = InvalidHttpRequestError::MissingBody {
            method: "PUT".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot use PUT without specifying data.");
    }

    #[test]
    fn test_invalid_request_error_invalid_path() {
        let error = InvalidHttpRequestError::InvalidPath {
            path: "a b".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid request path: a b");
    }

    #[test]
    fn test_http_error_wraps_response_error() {
        let error: HttpError = HttpResponseError {
            code: 404,
            status_text: None,
            body: serde_json::Value::Null,
        }
        .into();

        assert!(matches!(error, HttpError::Response(ref e) if e.code == 404));
        assert_eq!(error.to_string(), "Request failed with status 404");
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let response_error: &dyn std::error::Error = &HttpResponseError {
            code: 400,
            status_text: None,
            body: serde_json::Value::Null,
        };
        let _ = response_error;

        let invalid_error: &dyn std::error::Error = &InvalidHttpRequestError::InvalidPath {
            path: "a b".to_string(),
        };
        let _ = invalid_error;
    }
}
