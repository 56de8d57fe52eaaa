// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Folds the notifications of one watch subscription into a [`PresentationState`].
//!
//! # Rules
//!
//! - A value carrying at least one record replaces `items` wholesale. An
//!   empty or missing payload leaves `items` as they were.
//! - A value always sets `loading` to the upstream flag.
//! - An error is stored, forces `loading` to `false` and keeps `items`.
//! - An error ends the subscription: later notifications are ignored, as is
//!   everything after [`teardown`](ViewStateReconciler::teardown).
//!
//! # Example
//!
//! ```
//! use satwatch_core::{QueryError, QueryResult, Satellite};
//! use satwatch_exec::{Reconciled, ViewConfig, ViewStateReconciler};
//!
//! let iss = Satellite::new("ISS", 25544, "2024-01-01", "1 ...", "2 ...");
//! let mut view = ViewStateReconciler::new(ViewConfig::default());
//!
//! assert_eq!(view.on_next(QueryResult::loaded(vec![iss.clone()])), Reconciled::Applied);
//! assert_eq!(view.on_error(QueryError::new("network down")), Reconciled::Applied);
//!
//! assert_eq!(view.state().items(), &[iss]);
//! assert!(!view.state().loading());
//! assert_eq!(view.state().error().unwrap().message(), "network down");
//! ```

use crate::{PresentationState, ViewConfig};
use satwatch_core::{Notification, QueryError, QueryResult, StreamItem};

/// Where a subscription is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReconcilerPhase {
    /// Subscribed, nothing received yet.
    Initial,
    /// At least one value received, no error.
    Streaming,
    /// An error was received. Terminal.
    Errored,
    /// The subscription was released. Terminal.
    TornDown,
}

impl ReconcilerPhase {
    /// Returns `true` if the phase still accepts notifications.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Initial | Self::Streaming)
    }
}

/// Outcome of feeding one notification to the reconciler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reconciled {
    /// The state was updated; the render boundary should refresh.
    Applied,
    /// The notification repeated the current state and was skipped.
    Unchanged,
    /// The subscription is errored or torn down; nothing happened.
    Ignored,
}

/// State machine owning the presentation state of one subscription.
#[derive(Debug, Clone)]
pub struct ViewStateReconciler {
    state: PresentationState,
    phase: ReconcilerPhase,
    config: ViewConfig,
}

impl ViewStateReconciler {
    /// Start a subscription with the default state.
    #[must_use]
    pub fn new(config: ViewConfig) -> Self {
        Self {
            state: PresentationState::default(),
            phase: ReconcilerPhase::Initial,
            config,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &PresentationState {
        &self.state
    }

    #[must_use]
    pub const fn phase(&self) -> ReconcilerPhase {
        self.phase
    }

    /// Apply a successful emission.
    pub fn on_next(&mut self, result: QueryResult) -> Reconciled {
        if !self.phase.is_active() {
            debug!("Ignoring query result in phase {:?}", self.phase);
            return Reconciled::Ignored;
        }
        self.phase = ReconcilerPhase::Streaming;

        let QueryResult { data, loading } = result;
        let data = data.filter(|records| !records.is_empty());

        if self.config.skip_identical_payloads
            && loading == self.state.loading
            && data.as_ref().map_or(true, |records| *records == self.state.items)
        {
            return Reconciled::Unchanged;
        }

        if let Some(records) = data {
            debug!("Replacing {} items with {}", self.state.items.len(), records.len());
            self.state.items = records;
        }
        self.state.loading = loading;
        Reconciled::Applied
    }

    /// Apply the terminal error of the subscription.
    pub fn on_error(&mut self, error: QueryError) -> Reconciled {
        if !self.phase.is_active() {
            debug!("Ignoring query error in phase {:?}: {}", self.phase, error);
            return Reconciled::Ignored;
        }

        warn!("Watched query failed: {}", error);
        self.phase = ReconcilerPhase::Errored;
        self.state.error = Some(error);
        self.state.loading = false;
        Reconciled::Applied
    }

    /// Dispatch a notification to [`on_next`](Self::on_next) or [`on_error`](Self::on_error).
    pub fn apply(&mut self, notification: Notification) -> Reconciled {
        match notification {
            StreamItem::Value(result) => self.on_next(result),
            StreamItem::Error(error) => self.on_error(error),
        }
    }

    /// Release the subscription. Later notifications are ignored.
    ///
    /// Returns `false` if it was already torn down.
    pub fn teardown(&mut self) -> bool {
        if self.phase == ReconcilerPhase::TornDown {
            return false;
        }
        self.phase = ReconcilerPhase::TornDown;
        true
    }
}

impl Default for ViewStateReconciler {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}
