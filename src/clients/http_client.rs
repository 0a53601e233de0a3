//! HTTP client for the remote resource collection.
//!
//! This module provides the [`HttpClient`] type, which holds the request
//! shape shared by every call (base URI, collection path, default headers)
//! and sends exactly one request per call.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::GoRestConfig;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client bound to one collection endpoint.
///
/// The client handles:
/// - URL construction from the configured base URL and collection path
/// - Default headers: `Content-Type`, `Authorization: Bearer <token>`, `User-Agent`
/// - Response header and body normalization
///
/// No retries are attempted and no timeout beyond the transport default is set.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI without a trailing slash (e.g., `https://gorest.co.in`).
    base_uri: String,
    /// Collection path without surrounding slashes (e.g., `public/v2/users`).
    collection_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut header_names: Vec<&str> = self.default_headers.keys().map(String::as_str).collect();
        header_names.sort_unstable();
        f.debug_struct("HttpClient")
            .field("base_uri", &self.base_uri)
            .field("collection_path", &self.collection_path)
            .field("default_headers", &header_names)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &GoRestConfig) -> Self {
        let base_uri = config.base_url().trim_end_matches('/').to_string();
        let collection_path = config.collection_path().trim_matches('/').to_string();

        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.access_token().bearer_header(),
        );
        default_headers.insert(
            "User-Agent".to_string(),
            format!("GoRest Client v{CLIENT_VERSION}"),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            collection_path,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the collection path for this client.
    #[must_use]
    pub fn collection_path(&self) -> &str {
        &self.collection_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the absolute URL for a path relative to the collection.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let mut url = self.base_uri.clone();
        for segment in [self.collection_path.as_str(), path.trim_matches('/')] {
            if !segment.is_empty() {
                url.push('/');
                url.push_str(segment);
            }
        }
        url
    }

    /// Sends an HTTP request and waits for its single response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The request cannot be built, no response arrives, or the response
    ///   body cannot be read in full (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let status_text = res.status().canonical_reason().map(String::from);
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let body = HttpResponse::parse_body(&body_text);

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        Err(HttpError::Response(HttpResponseError {
            code,
            status_text,
            body: response.body,
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AccessToken;

    fn create_test_config(base_url: &str) -> GoRestConfig {
        GoRestConfig::builder()
            .base_url(base_url)
            .access_token(AccessToken::new("test-access-token"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_normalizes_slashes() {
        let client = HttpClient::new(&create_test_config("https://gorest.co.in/"));

        assert_eq!(client.base_uri(), "https://gorest.co.in");
        assert_eq!(client.collection_path(), "public/v2/users");
    }

    #[test]
    fn test_url_for_collection_and_item() {
        let client = HttpClient::new(&create_test_config("https://gorest.co.in"));

        assert_eq!(client.url_for(""), "https://gorest.co.in/public/v2/users");
        assert_eq!(
            client.url_for("3718"),
            "https://gorest.co.in/public/v2/users/3718"
        );
    }

    #[test]
    fn test_url_for_with_empty_collection_path() {
        let config = GoRestConfig::builder()
            .base_url("http://localhost:8080")
            .access_token(AccessToken::new("token"))
            .collection_path("/")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        assert_eq!(client.url_for("7"), "http://localhost:8080/7");
    }

    #[test]
    fn test_authorization_header_uses_bearer_scheme() {
        let client = HttpClient::new(&create_test_config("https://gorest.co.in"));

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-access-token".to_string())
        );
    }

    #[test]
    fn test_content_type_header_is_json() {
        let client = HttpClient::new(&create_test_config("https://gorest.co.in"));

        assert_eq!(
            client.default_headers().get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config("https://gorest.co.in"));

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("GoRest Client v"));
    }

    #[test]
    fn test_debug_output_omits_header_values() {
        let client = HttpClient::new(&create_test_config("https://gorest.co.in"));
        let debug_str = format!("{client:?}");
        assert!(debug_str.contains("Authorization"));
        assert!(!debug_str.contains("test-access-token"));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
