// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::PresentationState;

/// The render boundary of a watched view.
///
/// Decouples reconciliation from whatever draws the satellite list. A sink
/// is called after every notification that changed the state, with the state
/// already updated, and never after the subscription was torn down.
pub trait RenderSink {
    /// Refresh the view from `state`.
    fn render(&mut self, state: &PresentationState);
}

impl<F> RenderSink for F
where
    F: FnMut(&PresentationState),
{
    fn render(&mut self, state: &PresentationState) {
        self(state);
    }
}

/// A sink for views that poll [`WatchHandle::state`](crate::WatchHandle::state) instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRender;

impl RenderSink for NoRender {
    fn render(&mut self, _state: &PresentationState) {}
}
