//! Pagination metadata carried in response headers.
//!
//! The collection reports where a page sits through four headers. Their
//! values arrive as strings and are parsed here; a partial or non-numeric
//! set is reported as a [`PaginationError`] instead of being coerced.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::HttpResponse;

/// Position of a page within the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Number of records in the collection.
    pub total_results: u64,
    /// Number of pages at the current page size.
    pub total_pages: u64,
    /// 1-based number of this page.
    pub current_page: u64,
    /// Page size the server applied.
    pub results_per_page: u64,
}

/// Error returned when pagination headers are present but unusable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// Some pagination headers were sent but this one was not.
    #[error("Pagination header '{header}' is missing")]
    MissingHeader {
        /// The absent header name.
        header: String,
    },

    /// A pagination header does not hold a non-negative integer.
    #[error("Pagination header '{header}' has non-numeric value '{value}'")]
    InvalidValue {
        /// The header name.
        header: String,
        /// The raw header value.
        value: String,
    },
}

/// Names of the response headers that carry pagination metadata.
///
/// # Example
///
/// ```rust
/// use gorest_client::PaginationHeaders;
///
/// let headers = PaginationHeaders::default();
/// assert_eq!(headers.total, "x-pagination-total");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationHeaders {
    /// Header with the total record count.
    pub total: String,
    /// Header with the total page count.
    pub pages: String,
    /// Header with the current page number.
    pub page: String,
    /// Header with the page size.
    pub limit: String,
}

impl Default for PaginationHeaders {
    fn default() -> Self {
        Self {
            total: "x-pagination-total".to_string(),
            pages: "x-pagination-pages".to_string(),
            page: "x-pagination-page".to_string(),
            limit: "x-pagination-limit".to_string(),
        }
    }
}

impl PaginationHeaders {
    /// Builds [`Pagination`] from a response's headers.
    ///
    /// Returns `Ok(None)` when none of the four headers is present.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::MissingHeader`] if only some headers are
    /// present, or [`PaginationError::InvalidValue`] if a value is not a
    /// non-negative integer.
    pub fn parse(&self, response: &HttpResponse) -> Result<Option<Pagination>, PaginationError> {
        let names = [&self.total, &self.pages, &self.page, &self.limit];
        if names.iter().all(|name| response.header(name).is_none()) {
            return Ok(None);
        }

        let field = |name: &String| -> Result<u64, PaginationError> {
            let raw = response
                .header(name)
                .ok_or_else(|| PaginationError::MissingHeader {
                    header: name.clone(),
                })?;
            raw.trim()
                .parse::<u64>()
                .map_err(|_| PaginationError::InvalidValue {
                    header: name.clone(),
                    value: raw.to_string(),
                })
        };

        Ok(Some(Pagination {
            total_results: field(&self.total)?,
            total_pages: field(&self.pages)?,
            current_page: field(&self.page)?,
            results_per_page: field(&self.limit)?,
        }))
    }
}
