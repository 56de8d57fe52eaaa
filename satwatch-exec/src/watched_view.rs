// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Binding a view to a watched query.
//!
//! [`initialize`] opens a watch on a [`WatchQuery`] source and spawns a task
//! that feeds every notification through a [`ViewStateReconciler`], calling
//! the [`RenderSink`] after each change. The returned [`WatchHandle`] owns the
//! subscription: tearing it down, explicitly or by dropping it, stops the
//! task and releases the watch.
//!
//! # Example
//!
//! ```
//! use satwatch_core::{QueryDescriptor, QueryResult, QuerySubject, Satellite};
//! use satwatch_exec::{initialize, PresentationState, ViewConfig};
//! use futures::channel::mpsc::unbounded;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source = QuerySubject::new();
//! let (rendered_tx, mut rendered) = unbounded();
//!
//! let handle = initialize(
//!     &source,
//!     &QueryDescriptor::all_satellites(),
//!     ViewConfig::default(),
//!     move |state: &PresentationState| {
//!         let _ = rendered_tx.unbounded_send(state.clone());
//!     },
//! )
//! .unwrap();
//!
//! let iss = Satellite::new("ISS", 25544, "2024-01-01", "1 ...", "2 ...");
//! source.emit(QueryResult::loaded(vec![iss.clone()])).unwrap();
//!
//! let state = rendered.next().await.unwrap();
//! assert_eq!(state.items(), &[iss]);
//! assert!(!state.loading());
//!
//! handle.teardown();
//! # }
//! ```

use crate::{PresentationState, Reconciled, ReconcilerPhase, RenderSink, ViewConfig, ViewStateReconciler};
use futures::{Stream, StreamExt};
use parking_lot::Mutex;
use satwatch_core::{Notification, QueryDescriptor, TeardownToken, WatchError, WatchQuery};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Drive `reconciler` with `stream` until the stream ends, the subscription
/// errors, or `token` is torn down.
///
/// Notifications are applied one at a time in arrival order. The render call
/// runs under the reconciler lock, so once the reconciler is torn down no
/// further render can start.
pub async fn reconcile_stream<S, R>(
    mut stream: S,
    reconciler: Arc<Mutex<ViewStateReconciler>>,
    mut sink: R,
    token: TeardownToken,
) where
    S: Stream<Item = Notification> + Unpin,
    R: RenderSink,
{
    loop {
        let item = tokio::select! {
            biased;
            () = token.torn_down() => break,
            item = stream.next() => item,
        };
        let Some(item) = item else {
            debug!("Watched query completed");
            break;
        };

        let phase = {
            let mut view = reconciler.lock();
            if view.apply(item) == Reconciled::Applied {
                sink.render(view.state());
            }
            view.phase()
        };

        if !phase.is_active() {
            break;
        }
    }
}

/// Watch `query` on `source` and keep a presentation state for it.
///
/// The state starts as loading with no items and no error. Every change is
/// pushed to `sink`.
///
/// # Errors
///
/// Returns [`WatchError::NoRuntime`] when called outside a tokio runtime, or
/// the source's [`WatchError`] if the watch cannot be established. Nothing is
/// subscribed or spawned in either case.
pub fn initialize<Q, R>(
    source: &Q,
    query: &QueryDescriptor,
    config: ViewConfig,
    sink: R,
) -> Result<WatchHandle, WatchError>
where
    Q: WatchQuery + ?Sized,
    R: RenderSink + Send + 'static,
{
    let runtime = Handle::try_current().map_err(|_| WatchError::NoRuntime)?;
    let stream = source.watch(query)?;
    let reconciler = Arc::new(Mutex::new(ViewStateReconciler::new(config)));
    let token = TeardownToken::new();

    let task = runtime.spawn(reconcile_stream(
        stream,
        reconciler.clone(),
        sink,
        token.clone(),
    ));
    info!("Watching query '{}'", query.field());

    Ok(WatchHandle {
        reconciler,
        token,
        task: Some(task),
    })
}

/// An active watch subscription.
///
/// Dropping the handle tears the subscription down.
#[derive(Debug)]
pub struct WatchHandle {
    reconciler: Arc<Mutex<ViewStateReconciler>>,
    token: TeardownToken,
    task: Option<JoinHandle<()>>,
}

impl WatchHandle {
    /// Snapshot of the current presentation state.
    #[must_use]
    pub fn state(&self) -> PresentationState {
        self.reconciler.lock().state().clone()
    }

    #[must_use]
    pub fn phase(&self) -> ReconcilerPhase {
        self.reconciler.lock().phase()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.token.is_torn_down()
    }

    /// Release the subscription.
    ///
    /// Once this returns, no notification changes the state or reaches the
    /// sink. Returns `false` if the subscription was already released.
    pub fn teardown(&self) -> bool {
        let released = self.reconciler.lock().teardown();
        if released {
            self.token.teardown();
            info!("Released watch subscription");
        }
        released
    }

    /// Wait for the driving task to stop.
    ///
    /// The task stops when the source completes, after an error, or after
    /// [`teardown`](Self::teardown).
    pub async fn finished(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(error) = task.await {
                warn!("Watch task ended abnormally: {}", error);
            }
        }
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}
