// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Reconciling watched-query notifications into view state.
//!
//! [`ViewStateReconciler`] is the synchronous state machine. [`initialize`]
//! binds it to a [`WatchQuery`](satwatch_core::WatchQuery) source on a tokio
//! task and hands back a [`WatchHandle`] that owns the subscription.

#[macro_use]
mod logging;

pub mod config;
pub mod presentation;
pub mod reconciler;
pub mod render;
pub mod watched_view;

pub use config::{ConfigError, ViewConfig};
pub use presentation::PresentationState;
pub use reconciler::{Reconciled, ReconcilerPhase, ViewStateReconciler};
pub use render::{NoRender, RenderSink};
pub use watched_view::{initialize, reconcile_stream, WatchHandle};
