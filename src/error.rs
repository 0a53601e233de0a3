//! Configuration error types for the GoRest client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! invalid settings are rejected before a request is ever built.
//!
//! # Example
//!
//! ```rust
//! use gorest_client::{ConfigError, PerPage};
//!
//! let result = PerPage::new(0);
//! assert!(matches!(result, Err(ConfigError::InvalidPerPage { value: 0 })));
//! ```

use thiserror::Error;

/// Errors that can occur while building or loading client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The results-per-page value is outside the accepted range.
    #[error("Invalid results per page '{value}'. Expected a value between 1 and 100.")]
    InvalidPerPage {
        /// The rejected value.
        value: u32,
    },

    /// A configuration file could not be read or parsed.
    #[error("Failed to load configuration: {reason}")]
    Load {
        /// Description of the underlying failure.
        reason: String,
    },
}
