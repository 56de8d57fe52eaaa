// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The error value carried on the error channel of a watched query.
//!
//! Network failures, decoding failures and errors reported by the GraphQL
//! server all end up as a single [`QueryError`]: a human readable message and,
//! optionally, the underlying error as its source.
//!
//! # Examples
//!
//! ```
//! use satwatch_core::QueryError;
//! use std::error::Error;
//!
//! let plain = QueryError::new("network down");
//! assert_eq!(plain.to_string(), "network down");
//! assert!(plain.source().is_none());
//!
//! let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
//! let wrapped = QueryError::with_cause("request failed", io);
//! assert_eq!(wrapped.source().unwrap().to_string(), "timed out");
//! ```

use std::error::Error;
use std::sync::Arc;

type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// Opaque failure of a watched query.
///
/// Cloning is cheap: the cause is shared, so the same error can be kept in a
/// view's state and broadcast to several subscribers.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct QueryError {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl QueryError {
    /// Create an error with a message and no cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Create an error that keeps `cause` as its source.
    pub fn with_cause(
        message: impl Into<String>,
        cause: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    /// The message shown to the user.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if an underlying error is attached.
    #[must_use]
    pub const fn has_cause(&self) -> bool {
        self.cause.is_some()
    }
}

// Causes are not comparable; two errors are equal when their messages are.
impl PartialEq for QueryError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

impl Eq for QueryError {}

impl From<&str> for QueryError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for QueryError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(error: serde_json::Error) -> Self {
        Self::with_cause(format!("Malformed query response: {error}"), error)
    }
}
