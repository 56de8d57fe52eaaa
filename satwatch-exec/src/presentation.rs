// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use satwatch_core::{QueryError, Satellite};

/// What a view renders: the satellite list, a loading flag and the last error.
///
/// A fresh state is loading with no items and no error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationState {
    pub(crate) items: Vec<Satellite>,
    pub(crate) loading: bool,
    pub(crate) error: Option<QueryError>,
}

impl PresentationState {
    /// Records from the most recent non-empty payload.
    #[must_use]
    pub fn items(&self) -> &[Satellite] {
        &self.items
    }

    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn error(&self) -> Option<&QueryError> {
        self.error.as_ref()
    }
}

impl Default for PresentationState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }
}
