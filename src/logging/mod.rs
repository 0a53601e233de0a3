//! Logger sinks and failure diagnostics.
//!
//! The service never logs through a global: it is handed a [`LogSink`] and
//! writes every diagnostic to it. [`TracingSink`] forwards to `tracing`;
//! [`MemorySink`] keeps messages in memory for inspection.
//!
//! Failures are turned into one diagnostic each by [`classify_error`].

mod classifier;

pub use classifier::{classify_error, FailureKind};

use std::sync::{Mutex, PoisonError};

pub use tracing::Level;

/// Structured context attached to a diagnostic.
///
/// Every field is optional; sinks that cannot record structure drop it and
/// keep the message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFields<'a> {
    /// The operation label, e.g. `get 5555`.
    pub operation: Option<&'a str>,
    /// The HTTP status the diagnostic is about.
    pub status: Option<u16>,
    /// The failure kind of a classified error.
    pub kind: Option<FailureKind>,
}

/// A leveled diagnostic sink.
///
/// Only [`log`](Self::log) must be implemented; the per-level helpers and
/// [`log_with`](Self::log_with) delegate to it.
pub trait LogSink: Send + Sync {
    /// Records a message at the given level.
    fn log(&self, level: Level, message: &str);

    /// Records a message with structured context.
    ///
    /// The default implementation discards `fields`.
    fn log_with(&self, level: Level, message: &str, fields: &LogFields<'_>) {
        let _ = fields;
        self.log(level, message);
    }

    /// Records a `debug` message.
    fn debug(&self, message: &str) {
        self.log(Level::DEBUG, message);
    }

    /// Records an `info` message.
    fn info(&self, message: &str) {
        self.log(Level::INFO, message);
    }

    /// Records a `warn` message.
    fn warn(&self, message: &str) {
        self.log(Level::WARN, message);
    }

    /// Records an `error` message.
    fn error(&self, message: &str) {
        self.log(Level::ERROR, message);
    }
}

macro_rules! emit {
    ($event:ident, $message:expr, $fields:expr) => {
        tracing::$event!(
            target: "gorest_client",
            operation = $fields.operation,
            status = $fields.status,
            kind = $fields.kind.map(FailureKind::as_str),
            "{}",
            $message
        )
    };
}

/// Forwards messages to `tracing` events with target `gorest_client`.
///
/// [`LogFields`] become the event fields `operation`, `status` and `kind`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, level: Level, message: &str) {
        self.log_with(level, message, &LogFields::default());
    }

    fn log_with(&self, level: Level, message: &str, fields: &LogFields<'_>) {
        if level == Level::ERROR {
            emit!(error, message, fields);
        } else if level == Level::WARN {
            emit!(warn, message, fields);
        } else if level == Level::INFO {
            emit!(info, message, fields);
        } else if level == Level::DEBUG {
            emit!(debug, message, fields);
        } else {
            emit!(trace, message, fields);
        }
    }
}

/// A diagnostic held by a [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// The level the message was logged at.
    pub level: Level,
    /// The message text.
    pub message: String,
    /// The operation label, if one was attached.
    pub operation: Option<String>,
    /// The HTTP status, if one was attached.
    pub status: Option<u16>,
    /// The failure kind, if one was attached.
    pub kind: Option<FailureKind>,
}

/// Keeps every message in memory.
///
/// # Example
///
/// ```rust
/// use gorest_client::logging::{Level, LogSink, MemorySink};
///
/// let sink = MemorySink::new();
/// sink.warn("list returned an empty body");
///
/// assert_eq!(sink.messages_at(Level::WARN), vec!["list returned an empty body"]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded diagnostics with their fields, in order.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns all recorded levels and messages in order.
    #[must_use]
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.records()
            .into_iter()
            .map(|record| (record.level, record.message))
            .collect()
    }

    /// Returns the messages recorded at `level`, in order.
    #[must_use]
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message)
            .collect()
    }

    /// Discards all recorded entries.
    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl LogSink for MemorySink {
    fn log(&self, level: Level, message: &str) {
        self.log_with(level, message, &LogFields::default());
    }

    fn log_with(&self, level: Level, message: &str, fields: &LogFields<'_>) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LogRecord {
                level,
                message: message.to_string(),
                operation: fields.operation.map(String::from),
                status: fields.status,
                kind: fields.kind,
            });
    }
}
