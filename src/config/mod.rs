//! Configuration types for the GoRest client.
//!
//! # Overview
//!
//! - [`GoRestConfig`]: Settings consumed by [`UserService`](crate::UserService)
//! - [`GoRestConfigBuilder`]: Builder for [`GoRestConfig`]
//! - [`ConfigSource`]: Key/value lookup the configuration can be read from
//! - [`FileConfigSource`]: Layered JSON configuration files
//! - [`AccessToken`]: Bearer credential with masked debug output
//! - [`PerPage`]: Validated results-per-page value
//!
//! # Example
//!
//! ```rust
//! use gorest_client::{AccessToken, GoRestConfig};
//!
//! let config = GoRestConfig::builder()
//!     .base_url("https://gorest.co.in")
//!     .access_token(AccessToken::new("my-token"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.collection_path(), "/public/v2/users");
//! ```

mod newtypes;
mod source;

pub use newtypes::{AccessToken, PerPage};
pub use source::{ConfigSource, FileConfigSource, GLOBAL_CONFIG_FILE, USER_CONFIG_FILE};

use crate::error::ConfigError;
use crate::gorest::PaginationHeaders;

/// Configuration key holding the base endpoint.
pub const URL_KEY: &str = "url";

/// Configuration key holding the bearer credential.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Collection endpoint used when none is configured.
pub const DEFAULT_COLLECTION_PATH: &str = "/public/v2/users";

/// Settings for a [`UserService`](crate::UserService).
///
/// # Strict logging
///
/// When `strict_logging` is set, a success status other than the expected one
/// (or a success with an empty body) is logged at `error` instead of `warn`.
#[derive(Clone, Debug)]
pub struct GoRestConfig {
    base_url: String,
    access_token: AccessToken,
    collection_path: String,
    pagination_headers: PaginationHeaders,
    default_per_page: PerPage,
    strict_logging: bool,
}

impl GoRestConfig {
    /// Creates a new builder for constructing a `GoRestConfig`.
    #[must_use]
    pub fn builder() -> GoRestConfigBuilder {
        GoRestConfigBuilder::new()
    }

    /// Reads `url` and `accessToken` from a configuration source.
    ///
    /// Values are not validated. A missing key becomes an empty string and is
    /// reported with a warning; the requests built from it will fail and be
    /// classified like any other failure.
    #[must_use]
    pub fn from_source(source: &dyn ConfigSource) -> Self {
        let lookup = |key: &str| {
            source.get(key).unwrap_or_else(|| {
                tracing::warn!("Configuration key '{}' is not set", key);
                String::new()
            })
        };

        Self {
            base_url: lookup(URL_KEY),
            access_token: AccessToken::new(lookup(ACCESS_TOKEN_KEY)),
            collection_path: DEFAULT_COLLECTION_PATH.to_string(),
            pagination_headers: PaginationHeaders::default(),
            default_per_page: PerPage::default(),
            strict_logging: false,
        }
    }

    /// Returns the base endpoint (e.g. `https://gorest.co.in`).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the bearer credential.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the collection path appended to the base endpoint.
    #[must_use]
    pub fn collection_path(&self) -> &str {
        &self.collection_path
    }

    /// Returns the response header names carrying pagination metadata.
    #[must_use]
    pub const fn pagination_headers(&self) -> &PaginationHeaders {
        &self.pagination_headers
    }

    /// Returns the page size used by `list_page` when none is given.
    #[must_use]
    pub const fn default_per_page(&self) -> PerPage {
        self.default_per_page
    }

    /// Returns whether unexpected success responses are logged as errors.
    #[must_use]
    pub const fn strict_logging(&self) -> bool {
        self.strict_logging
    }

    /// Returns a copy of this configuration with strict logging toggled.
    #[must_use]
    pub fn with_strict_logging(mut self, strict: bool) -> Self {
        self.strict_logging = strict;
        self
    }
}

// Verify GoRestConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GoRestConfig>();
};

/// Builder for constructing [`GoRestConfig`] instances.
///
/// `base_url` and `access_token` are required.
///
/// # Defaults
///
/// - `collection_path`: `/public/v2/users`
/// - `pagination_headers`: `x-pagination-total`, `x-pagination-pages`,
///   `x-pagination-page`, `x-pagination-limit`
/// - `default_per_page`: 10
/// - `strict_logging`: `false`
#[derive(Debug, Default)]
pub struct GoRestConfigBuilder {
    base_url: Option<String>,
    access_token: Option<AccessToken>,
    collection_path: Option<String>,
    pagination_headers: Option<PaginationHeaders>,
    default_per_page: Option<PerPage>,
    strict_logging: Option<bool>,
}

impl GoRestConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base endpoint (required).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the bearer credential (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the collection path.
    #[must_use]
    pub fn collection_path(mut self, path: impl Into<String>) -> Self {
        self.collection_path = Some(path.into());
        self
    }

    /// Sets the pagination header names.
    #[must_use]
    pub fn pagination_headers(mut self, headers: PaginationHeaders) -> Self {
        self.pagination_headers = Some(headers);
        self
    }

    /// Sets the default page size.
    #[must_use]
    pub const fn default_per_page(mut self, per_page: PerPage) -> Self {
        self.default_per_page = Some(per_page);
        self
    }

    /// Sets whether unexpected success responses are logged as errors.
    #[must_use]
    pub const fn strict_logging(mut self, strict: bool) -> Self {
        self.strict_logging = Some(strict);
        self
    }

    /// Builds the [`GoRestConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or
    /// `access_token` are not set.
    pub fn build(self) -> Result<GoRestConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(GoRestConfig {
            base_url,
            access_token,
            collection_path: self
                .collection_path
                .unwrap_or_else(|| DEFAULT_COLLECTION_PATH.to_string()),
            pagination_headers: self.pagination_headers.unwrap_or_default(),
            default_per_page: self.default_per_page.unwrap_or_default(),
            strict_logging: self.strict_logging.unwrap_or(false),
        })
    }
}
