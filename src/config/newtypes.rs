//! Newtype wrappers for configuration and request values.
//!
//! This module provides type-safe wrappers around raw values so that
//! credentials cannot leak into logs and page sizes stay within the range
//! the API accepts.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A bearer credential presented in the `Authorization` header.
///
/// The token is opaque and not validated; an empty token simply produces
/// requests the server rejects.
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying only
/// `AccessToken(*****)`.
///
/// # Example
///
/// ```rust
/// use gorest_client::AccessToken;
///
/// let token = AccessToken::new("secret-token");
/// assert_eq!(token.as_ref(), "secret-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a bearer credential.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns `true` if no credential was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// Number of results requested per page, constrained to `1..=100`.
///
/// # Example
///
/// ```rust
/// use gorest_client::PerPage;
///
/// assert_eq!(PerPage::default().get(), 10);
/// assert_eq!(PerPage::new(100).unwrap().get(), 100);
/// assert!(PerPage::new(101).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PerPage(u32);

impl PerPage {
    /// Smallest accepted page size.
    pub const MIN: u32 = 1;
    /// Largest accepted page size.
    pub const MAX: u32 = 100;
    /// Page size used when none is given.
    pub const DEFAULT: u32 = 10;

    /// Creates a validated page size.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPerPage`] if `value` is outside `1..=100`.
    pub const fn new(value: u32) -> Result<Self, ConfigError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(ConfigError::InvalidPerPage { value });
        }
        Ok(Self(value))
    }

    /// Returns the raw page size.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for PerPage {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u32> for PerPage {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for PerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PerPage {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.0)
    }
}

impl<'de> Deserialize<'de> for PerPage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u32::deserialize(deserializer)?;
        Self::new(value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret-token");
        let debug_output = format!("{:?}", token);
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_access_token_bearer_header() {
        let token = AccessToken::new("abc123");
        assert_eq!(token.bearer_header(), "Bearer abc123");
    }

    #[test]
    fn test_access_token_allows_empty() {
        let token = AccessToken::new("");
        assert!(token.is_empty());
        assert_eq!(token.bearer_header(), "Bearer ");
    }

    #[test]
    fn test_per_page_accepts_bounds() {
        assert_eq!(PerPage::new(1).unwrap().get(), 1);
        assert_eq!(PerPage::new(100).unwrap().get(), 100);
    }

    #[test]
    fn test_per_page_rejects_out_of_range() {
        assert!(matches!(
            PerPage::new(0),
            Err(ConfigError::InvalidPerPage { value: 0 })
        ));
        assert!(matches!(
            PerPage::new(101),
            Err(ConfigError::InvalidPerPage { value: 101 })
        ));
    }

    #[test]
    fn test_per_page_default_is_ten() {
        assert_eq!(PerPage::default().get(), 10);
    }

    #[test]
    fn test_per_page_deserialize_validates() {
        let ok: PerPage = serde_json::from_str("25").unwrap();
        assert_eq!(ok.get(), 25);

        let err = serde_json::from_str::<PerPage>("500");
        assert!(err.is_err());
    }
}
