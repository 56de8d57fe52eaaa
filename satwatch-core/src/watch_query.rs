// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The upstream side of a watched query.
//!
//! [`WatchQuery`] is what a view subscribes to. [`QuerySubject`] implements it
//! in memory: a hot source that broadcasts each emission to every current
//! watcher.
//!
//! ## Characteristics of `QuerySubject`
//!
//! - **Hot**: late watchers only see emissions sent after they subscribed.
//! - **Unbounded**: every watcher gets its own unbounded channel.
//! - **Shared**: cheap to clone; clones drive the same watchers.
//! - **Terminal errors**: [`fail`](QuerySubject::fail) delivers the error and
//!   closes the subject.
//!
//! ## Example
//!
//! ```
//! use satwatch_core::{QueryDescriptor, QueryResult, QuerySubject, StreamItem, WatchQuery};
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = QuerySubject::new();
//! let mut watch = subject.watch(&QueryDescriptor::all_satellites()).unwrap();
//!
//! subject.emit(QueryResult::pending()).unwrap();
//! subject.close();
//!
//! assert_eq!(watch.next().await, Some(StreamItem::Value(QueryResult::pending())));
//! assert_eq!(watch.next().await, None);
//! # }
//! ```

use crate::{Notification, QueryDescriptor, QueryError, QueryResult, StreamItem, WatchError};
use futures::channel::mpsc::{self, UnboundedSender};
use futures::Stream;
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed stream of notifications for one watch.
pub type NotificationStream = Pin<Box<dyn Stream<Item = Notification> + Send + 'static>>;

/// A service that can watch a query and re-emit its result over time.
pub trait WatchQuery {
    /// Start watching `query`.
    ///
    /// Dropping the returned stream releases the watch on the source side.
    ///
    /// # Errors
    ///
    /// Returns a [`WatchError`] if the watch cannot be established.
    fn watch(&self, query: &QueryDescriptor) -> Result<NotificationStream, WatchError>;
}

struct SubjectState {
    closed: bool,
    senders: Vec<UnboundedSender<Notification>>,
}

/// In-memory watch source for a single query.
pub struct QuerySubject {
    field: Arc<str>,
    state: Arc<Mutex<SubjectState>>,
}

impl QuerySubject {
    /// A subject serving the `allSatellites` query.
    #[must_use]
    pub fn new() -> Self {
        Self::for_query(&QueryDescriptor::all_satellites())
    }

    /// A subject serving `query`. Watches for any other field are refused.
    #[must_use]
    pub fn for_query(query: &QueryDescriptor) -> Self {
        Self {
            field: Arc::from(query.field()),
            state: Arc::new(Mutex::new(SubjectState {
                closed: false,
                senders: Vec::new(),
            })),
        }
    }

    /// Send a notification to every current watcher.
    ///
    /// Watchers whose stream was dropped are pruned here.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::Closed`] if the subject has been closed.
    pub fn send(&self, item: Notification) -> Result<(), WatchError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(WatchError::Closed);
        }

        state
            .senders
            .retain(|tx| tx.unbounded_send(item.clone()).is_ok());
        Ok(())
    }

    /// Emit a result on the "next" channel.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::Closed`] if the subject has been closed.
    pub fn emit(&self, result: QueryResult) -> Result<(), WatchError> {
        self.send(StreamItem::Value(result))
    }

    /// Emit an error on the "error" channel, then close the subject.
    ///
    /// # Errors
    ///
    /// Returns [`WatchError::Closed`] if the subject was already closed.
    pub fn fail(&self, error: QueryError) -> Result<(), WatchError> {
        let result = self.send(StreamItem::Error(error));
        self.close();
        result
    }

    /// Close the subject, ending every watcher's stream.
    ///
    /// Idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        state.closed = true;
        state.senders.clear();
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Number of watchers still registered.
    ///
    /// Dropped watchers are only removed on the next send.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl WatchQuery for QuerySubject {
    fn watch(&self, query: &QueryDescriptor) -> Result<NotificationStream, WatchError> {
        if query.field() != &*self.field {
            return Err(WatchError::UnknownQuery(query.field().to_owned()));
        }

        let mut state = self.state.lock();
        if state.closed {
            return Err(WatchError::Closed);
        }

        let (tx, rx) = mpsc::unbounded();
        state.senders.push(tx);
        Ok(Box::pin(rx))
    }
}

impl Default for QuerySubject {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for QuerySubject {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone(),
            state: self.state.clone(),
        }
    }
}
