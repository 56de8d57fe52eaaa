// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # satwatch
//!
//! Keeps the presentation state of a satellite list consistent while a watched
//! GraphQL query keeps emitting results.
//!
//! ## Overview
//!
//! A view subscribes to a [`WatchQuery`] source and receives a sequence of
//! notifications: results carrying satellite records and a loading flag, or a
//! single terminal error. satwatch folds that sequence into one
//! [`PresentationState`] (`items`, `loading`, `error`):
//!
//! - non-empty payloads replace the items wholesale, empty ones never clear them
//! - the loading flag is always taken from the latest result
//! - an error is kept next to the last good items and stops loading
//! - nothing changes after the subscription is torn down
//!
//! ## Quick Start
//!
//! ```rust
//! use satwatch::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source = QuerySubject::new();
//! let handle = initialize(
//!     &source,
//!     &QueryDescriptor::all_satellites(),
//!     ViewConfig::default(),
//!     NoRender,
//! )
//! .unwrap();
//!
//! assert!(handle.state().loading());
//! assert!(handle.state().items().is_empty());
//!
//! // Dropping the handle releases the subscription.
//! drop(handle);
//! # }
//! ```

pub use satwatch_core::{
    Notification, NotificationStream, QueryDescriptor, QueryError, QueryResult, QuerySubject,
    Satellite, StreamItem, TeardownToken, WatchError, WatchQuery,
};
pub use satwatch_exec::{
    initialize, reconcile_stream, ConfigError, NoRender, PresentationState, Reconciled,
    ReconcilerPhase, RenderSink, ViewConfig, ViewStateReconciler, WatchHandle,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        initialize, NoRender, PresentationState, QueryDescriptor, QueryError, QueryResult,
        QuerySubject, RenderSink, Satellite, StreamItem, ViewConfig, WatchHandle, WatchQuery,
    };
}
