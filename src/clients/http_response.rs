//! HTTP response types for the GoRest client.

use std::collections::HashMap;

/// An HTTP response from the remote collection.
///
/// Header names are stored lowercased; values stay raw strings and are
/// parsed by whoever needs them.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body; `null` when the body was empty.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, normalizing header names to lowercase.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let headers = headers
            .into_iter()
            .map(|(name, values)| (name.to_lowercase(), values))
            .collect();

        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns `true` if the body carries data.
    ///
    /// `null`, an empty string, an empty array and an empty object all count
    /// as no data.
    #[must_use]
    pub fn has_body(&self) -> bool {
        match &self.body {
            serde_json::Value::Null => false,
            serde_json::Value::String(s) => !s.is_empty(),
            serde_json::Value::Array(items) => !items.is_empty(),
            serde_json::Value::Object(map) => !map.is_empty(),
            _ => true,
        }
    }

    /// Parses raw body text into a JSON value.
    ///
    /// Empty text becomes `null`; text that is not JSON is kept as a JSON string.
    #[must_use]
    pub fn parse_body(text: &str) -> serde_json::Value {
        if text.trim().is_empty() {
            return serde_json::Value::Null;
        }
        serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
    }
}
