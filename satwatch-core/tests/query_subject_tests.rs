// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use futures::StreamExt;
use satwatch_core::{QueryDescriptor, QueryError, QueryResult, QuerySubject, WatchError, WatchQuery};
use satwatch_test_utils::fixtures::{failure, hubble, iss, loaded};
use satwatch_test_utils::{assert_no_element_emitted, expect_next_notification};

#[tokio::test]
async fn test_broadcasts_to_every_watcher() -> anyhow::Result<()> {
    let subject = QuerySubject::new();
    let query = QueryDescriptor::all_satellites();
    let mut a = subject.watch(&query)?;
    let mut b = subject.watch(&query)?;

    subject.emit(QueryResult::loaded(vec![iss()]))?;

    expect_next_notification(&mut a, loaded(vec![iss()])).await;
    expect_next_notification(&mut b, loaded(vec![iss()])).await;
    Ok(())
}

#[tokio::test]
async fn test_preserves_emission_order() -> anyhow::Result<()> {
    let subject = QuerySubject::new();
    let mut watch = subject.watch(&QueryDescriptor::all_satellites())?;

    subject.emit(QueryResult::loaded(vec![iss()]))?;
    subject.emit(QueryResult::loaded(vec![hubble()]))?;
    subject.emit(QueryResult::loaded(vec![iss(), hubble()]))?;

    expect_next_notification(&mut watch, loaded(vec![iss()])).await;
    expect_next_notification(&mut watch, loaded(vec![hubble()])).await;
    expect_next_notification(&mut watch, loaded(vec![iss(), hubble()])).await;
    Ok(())
}

#[tokio::test]
async fn test_late_watcher_misses_earlier_emissions() -> anyhow::Result<()> {
    let subject = QuerySubject::new();
    let query = QueryDescriptor::all_satellites();
    let _early = subject.watch(&query)?;

    subject.emit(QueryResult::loaded(vec![iss()]))?;
    let mut late = subject.watch(&query)?;

    assert_no_element_emitted(&mut late, 20).await;
    Ok(())
}

#[tokio::test]
async fn test_fail_delivers_error_then_closes() -> anyhow::Result<()> {
    let subject = QuerySubject::new();
    let mut watch = subject.watch(&QueryDescriptor::all_satellites())?;

    subject.fail(QueryError::new("network down"))?;

    expect_next_notification(&mut watch, failure("network down")).await;
    assert_eq!(watch.next().await, None);
    assert!(subject.is_closed());
    Ok(())
}

#[tokio::test]
async fn test_watch_after_close_is_refused() {
    let subject = QuerySubject::new();
    subject.close();
    subject.close();

    let result = subject.watch(&QueryDescriptor::all_satellites());

    assert_eq!(result.err(), Some(WatchError::Closed));
    assert_eq!(
        subject.emit(QueryResult::pending()),
        Err(WatchError::Closed)
    );
}

#[tokio::test]
async fn test_unknown_query_is_refused() {
    let subject = QuerySubject::new();
    let query = QueryDescriptor::new("query { allOwners { name } }", "allOwners");

    let result = subject.watch(&query);

    assert_eq!(
        result.err(),
        Some(WatchError::UnknownQuery("allOwners".to_string()))
    );
}

#[tokio::test]
async fn test_dropped_watchers_are_pruned_on_send() -> anyhow::Result<()> {
    let subject = QuerySubject::new();
    let query = QueryDescriptor::all_satellites();
    let kept = subject.watch(&query)?;
    let dropped = subject.watch(&query)?;
    assert_eq!(subject.subscriber_count(), 2);

    drop(dropped);
    subject.emit(QueryResult::pending())?;

    assert_eq!(subject.subscriber_count(), 1);
    drop(kept);
    Ok(())
}

#[tokio::test]
async fn test_clones_share_watchers() -> anyhow::Result<()> {
    let subject = QuerySubject::new();
    let producer = subject.clone();
    let mut watch = subject.watch(&QueryDescriptor::all_satellites())?;

    producer.emit(QueryResult::loaded(vec![hubble()]))?;

    expect_next_notification(&mut watch, loaded(vec![hubble()])).await;
    Ok(())
}

#[test]
fn test_watch_error_display() {
    assert_eq!(WatchError::Closed.to_string(), "Watch source is closed");
    assert_eq!(
        WatchError::UnknownQuery("allOwners".into()).to_string(),
        "Watch source does not serve 'allOwners'"
    );
    assert_eq!(
        WatchError::NoRuntime.to_string(),
        "No async runtime available to drive the watch"
    );
}
