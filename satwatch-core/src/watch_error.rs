// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;

/// Errors raised while establishing a watch.
///
/// These describe the lifecycle of the watch source itself. Failures of the
/// query are [`QueryError`](crate::QueryError)s and travel on the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WatchError {
    /// The source has been closed and accepts no new watches or emissions.
    Closed,
    /// The source does not serve the requested field.
    UnknownQuery(String),
    /// No async runtime is available to drive the watch.
    NoRuntime,
}

impl fmt::Display for WatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "Watch source is closed"),
            Self::UnknownQuery(field) => write!(f, "Watch source does not serve '{field}'"),
            Self::NoRuntime => write!(f, "No async runtime available to drive the watch"),
        }
    }
}

impl std::error::Error for WatchError {}
