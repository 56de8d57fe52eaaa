// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use satwatch_core::{QueryError, StreamItem};
use std::error::Error;

#[derive(Debug, thiserror::Error)]
#[error("socket closed")]
struct SocketClosed;

#[test]
fn test_display_is_the_message() {
    let error = QueryError::new("network down");
    assert_eq!(error.to_string(), "network down");
    assert_eq!(error.message(), "network down");
}

#[test]
fn test_plain_error_has_no_source() {
    let error = QueryError::from("network down");
    assert!(error.source().is_none());
    assert!(!error.has_cause());
}

#[test]
fn test_cause_is_exposed_as_source() {
    let error = QueryError::with_cause("request failed", SocketClosed);

    assert!(error.has_cause());
    assert_eq!(error.source().map(ToString::to_string), Some("socket closed".to_string()));
}

#[test]
fn test_clone_keeps_cause() {
    let error = QueryError::with_cause("request failed", SocketClosed);
    let cloned = error.clone();

    assert_eq!(error, cloned);
    assert!(cloned.source().is_some());
}

#[test]
fn test_equality_compares_messages() {
    assert_eq!(
        QueryError::new("boom"),
        QueryError::with_cause("boom", SocketClosed)
    );
    assert_ne!(QueryError::new("boom"), QueryError::new("bang"));
}

#[test]
fn test_from_string() {
    let error: QueryError = String::from("timeout").into();
    assert_eq!(error.message(), "timeout");
}

#[test]
fn test_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QueryError>();
}

#[test]
fn test_stream_item_conversions() {
    let value: StreamItem<u32> = Ok::<u32, QueryError>(7).into();
    assert!(value.is_value());
    assert_eq!(value.clone().ok(), Some(7));
    assert_eq!(value.map(|v| v * 2), StreamItem::Value(14));

    let error: StreamItem<u32> = Err::<u32, QueryError>(QueryError::new("boom")).into();
    assert!(error.is_error());
    let result: Result<u32, QueryError> = error.clone().into();
    assert_eq!(result, Err(QueryError::new("boom")));
    assert_eq!(error.err().map(|e| e.message().to_owned()), Some("boom".to_owned()));
}
