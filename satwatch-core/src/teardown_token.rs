// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared signal that a watch subscription has been released.

use event_listener::{Event, EventListener};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

/// Marks the end of a subscription.
///
/// Clones share one flag. Once [`teardown`](Self::teardown) is called on any
/// clone, [`is_torn_down`](Self::is_torn_down) is `true` everywhere and every
/// pending [`torn_down`](Self::torn_down) future resolves.
///
/// # Example
///
/// ```
/// use satwatch_core::TeardownToken;
///
/// # async fn example() {
/// let token = TeardownToken::new();
/// let driver = token.clone();
///
/// tokio::spawn(async move {
///     driver.torn_down().await;
/// });
///
/// token.teardown();
/// assert!(token.is_torn_down());
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct TeardownToken {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    torn_down: AtomicBool,
    event: Event,
}

impl TeardownToken {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                torn_down: AtomicBool::new(false),
                event: Event::new(),
            }),
        }
    }

    /// Release the subscription and wake every waiter.
    ///
    /// Returns `true` only for the call that performed the transition, so
    /// callers can run one-shot cleanup. Later calls are no-ops.
    pub fn teardown(&self) -> bool {
        let first = !self.inner.torn_down.swap(true, Ordering::AcqRel);
        if first {
            self.inner.event.notify(usize::MAX);
        }
        first
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.inner.torn_down.load(Ordering::Acquire)
    }

    /// Wait until the subscription is released.
    ///
    /// Resolves immediately if it already was.
    pub fn torn_down(&self) -> TornDown<'_> {
        TornDown {
            token: self,
            listener: None,
        }
    }
}

impl Default for TeardownToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Future returned by [`TeardownToken::torn_down`].
pub struct TornDown<'a> {
    token: &'a TeardownToken,
    listener: Option<EventListener>,
}

impl Future for TornDown<'_> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();
        loop {
            if this.token.is_torn_down() {
                return Poll::Ready(());
            }

            match this.listener.as_mut() {
                // Loop back to re-check: teardown may have raced the listen.
                None => this.listener = Some(this.token.inner.event.listen()),
                Some(listener) => {
                    if Pin::new(listener).poll(cx).is_pending() {
                        return Poll::Pending;
                    }
                    this.listener = None;
                }
            }
        }
    }
}
