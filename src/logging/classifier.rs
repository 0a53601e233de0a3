//! Classification of failed calls into logged diagnostics.
//!
//! Every failure falls into one [`FailureKind`]. [`classify_error`] writes
//! one `error` diagnostic for it and hands the text back; it never retries
//! and never fails itself.

use std::fmt;

use crate::clients::{HttpError, HttpResponseError};
use crate::gorest::ServiceError;
use crate::logging::{Level, LogFields, LogSink};

/// The kind of failure behind a [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The server responded with a non-2xx status.
    RemoteRejection,
    /// The request was sent but no response arrived.
    NoResponse,
    /// The request could not be built or sent.
    RequestSetup,
    /// Pagination headers were present but unusable.
    InvalidPagination,
    /// A success body did not have the expected shape.
    UndecodableBody,
}

impl FailureKind {
    /// Determines the kind of a service error.
    #[must_use]
    pub fn of(error: &ServiceError) -> Self {
        match error {
            ServiceError::Http(HttpError::Response(_)) => Self::RemoteRejection,
            ServiceError::Http(HttpError::Network(e)) if e.is_builder() => Self::RequestSetup,
            ServiceError::Http(HttpError::Network(_)) => Self::NoResponse,
            ServiceError::Http(HttpError::InvalidRequest(_))
            | ServiceError::MissingId { .. }
            | ServiceError::NotPositive { .. }
            | ServiceError::Encode { .. } => Self::RequestSetup,
            ServiceError::Pagination(_) => Self::InvalidPagination,
            ServiceError::Decode { .. } => Self::UndecodableBody,
        }
    }
}

impl FailureKind {
    /// Returns a short human-readable name for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RemoteRejection => "remote rejection",
            Self::NoResponse => "no response",
            Self::RequestSetup => "request setup failure",
            Self::InvalidPagination => "invalid pagination",
            Self::UndecodableBody => "undecodable body",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logs a diagnostic for a failed call and returns its text.
///
/// `label` names the attempted operation, e.g. `"get 5555"`.
///
/// For a remote rejection the message carries the status code and the
/// response body (or the status text when the body is empty). If the body
/// cannot be rendered, the rendering failure, the raw error and the raw
/// response are logged instead and the first of those is returned.
///
/// Each diagnostic carries the label, the status (for a rejection) and the
/// [`FailureKind`] as [`LogFields`].
pub fn classify_error(error: &ServiceError, label: &str, sink: &dyn LogSink) -> String {
    let kind = FailureKind::of(error);
    let fields = LogFields {
        operation: Some(label),
        status: error.status(),
        kind: Some(kind),
    };

    let message = match (kind, error) {
        (FailureKind::RemoteRejection, ServiceError::Http(HttpError::Response(response))) => {
            match describe_body(response) {
                Ok(detail) => format!(
                    "Error calling {label} responseCode: {} - {detail}",
                    response.code
                ),
                Err(e) => {
                    let message = format!("Error trying to stringify response on: {label}: {e}");
                    sink.log_with(Level::ERROR, &message, &fields);
                    sink.log_with(Level::ERROR, &error.to_string(), &fields);
                    sink.log_with(Level::ERROR, &format!("{response:?}"), &fields);
                    return message;
                }
            }
        }
        (FailureKind::NoResponse, _) => {
            format!("The request was made but no response was received: {label} ({error})")
        }
        (FailureKind::InvalidPagination, _) => {
            format!("Invalid pagination metadata in {label} response: {error}")
        }
        (FailureKind::UndecodableBody, _) => format!("Error decoding {label} response: {error}"),
        _ => format!(
            "Something happened in setting up the {label} request that triggered an Error: {error}"
        ),
    };

    sink.log_with(Level::ERROR, &message, &fields);
    message
}

/// Renders a rejection body for a diagnostic.
fn describe_body(response: &HttpResponseError) -> Result<String, serde_json::Error> {
    match &response.body {
        serde_json::Value::Null => Ok(response.status_text.clone().unwrap_or_default()),
        serde_json::Value::String(text) => Ok(text.clone()),
        body => serde_json::to_string(body),
    }
}
