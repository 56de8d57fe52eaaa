// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types for watching the satellite list of a GraphQL service.
//!
//! - [`Satellite`] is the record exchanged with the query service.
//! - [`QueryDescriptor`] names the watched query; [`QueryResult`] is one
//!   successful emission of it.
//! - [`Notification`] wraps either a result or a [`QueryError`].
//! - [`WatchQuery`] is the seam to the upstream collaborator, with
//!   [`QuerySubject`] as the in-memory implementation.
//! - [`TeardownToken`] signals that a subscription was released.

pub mod query;
pub mod query_error;
pub mod satellite;
pub mod stream_item;
pub mod teardown_token;
pub mod watch_error;
pub mod watch_query;

pub use self::query::{QueryDescriptor, QueryResult};
pub use self::query_error::QueryError;
pub use self::satellite::Satellite;
pub use self::stream_item::{Notification, StreamItem};
pub use self::teardown_token::{TeardownToken, TornDown};
pub use self::watch_error::WatchError;
pub use self::watch_query::{NotificationStream, QuerySubject, WatchQuery};
