// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the satwatch workspace.
//!
//! Production code receives notifications from a [`WatchQuery`] source; tests
//! usually want to push them by hand. [`test_channel`] gives a sender plus a
//! [`NotificationStream`] so a test can drive a view one emission at a time.
//!
//! ```rust
//! use satwatch_test_utils::fixtures::{iss, loaded};
//! use satwatch_test_utils::test_channel;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, mut stream) = test_channel();
//! tx.send(loaded(vec![iss()])).unwrap();
//! assert!(stream.next().await.unwrap().is_value());
//! # }
//! ```
//!
//! # Module Organization
//!
//! - `fixtures` - satellite records and notification builders
//! - `helpers` - stream assertions
//!
//! [`WatchQuery`]: satwatch_core::WatchQuery

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod fixtures;
pub mod helpers;

use satwatch_core::{Notification, NotificationStream};
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use helpers::{assert_no_element_emitted, expect_next_notification};

/// Creates an unbounded channel whose receiving half is a [`NotificationStream`].
///
/// Dropping the sender ends the stream.
pub fn test_channel() -> (mpsc::UnboundedSender<Notification>, NotificationStream) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, Box::pin(UnboundedReceiverStream::new(rx)))
}
