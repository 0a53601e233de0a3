//! HTTP transport for the GoRest client.
//!
//! This module provides the layer that turns a request description into one
//! outbound HTTP call and the call's outcome into an [`HttpResponse`] or an
//! [`HttpError`].
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client bound to one collection endpoint
//! - [`HttpRequest`]: A request to be sent, relative to the collection
//! - [`HttpResponse`]: A normalized response
//! - [`HttpMethod`]: Supported HTTP methods (GET, PUT, DELETE)
//!
//! # Example
//!
//! ```rust,ignore
//! use gorest_client::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config);
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "")
//!     .query_param("page", "3")
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
