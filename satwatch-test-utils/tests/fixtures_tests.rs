// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// SPDX-License-Identifier: MIT OR Apache-2.0

use futures::StreamExt;
use satwatch_core::{QueryDescriptor, QueryResult, Satellite, StreamItem};
use satwatch_test_utils::fixtures::{
    awaiting_tle, emission, failure, graphql_body, hubble, iss, loaded, loading_empty, noaa_19,
};
use satwatch_test_utils::{assert_no_element_emitted, expect_next_notification, test_channel};

#[test]
fn test_fixture_ids_are_distinct() {
    let ids = [iss().id, hubble().id, noaa_19().id];
    assert_eq!(ids, [Some(25544), Some(20580), Some(33591)]);
}

#[test]
fn test_tle_lines_start_with_line_number() {
    for satellite in [iss(), hubble(), noaa_19()] {
        assert!(satellite.line1.starts_with("1 "));
        assert!(satellite.line2.starts_with("2 "));
        assert_eq!(satellite.line1.len(), 69);
        assert_eq!(satellite.line2.len(), 69);
    }
}

#[test]
fn test_notification_builders() {
    assert_eq!(loaded(vec![iss()]), StreamItem::Value(QueryResult::loaded(vec![iss()])));
    assert_eq!(loading_empty(), emission(Some(Vec::new()), true));
    assert!(failure("boom").is_error());
}

#[test]
fn test_graphql_body_decodes_back() {
    let body = graphql_body(&[iss(), noaa_19()]);

    let result = QueryResult::from_graphql_response(&QueryDescriptor::all_satellites(), &body)
        .expect("fixture body should decode");

    assert_eq!(result.data, Some(vec![iss(), noaa_19()]));
}

#[test]
fn test_graphql_body_escapes_names() {
    let quoted = Satellite::new(r#"COSMOS "2251" \ DEB"#, 34427, "2024-01-04", iss().line1, iss().line2);
    let body = graphql_body(&[quoted.clone(), awaiting_tle()]);

    let result = QueryResult::from_graphql_response(&QueryDescriptor::all_satellites(), &body)
        .expect("escaped body should decode");

    assert_eq!(result.data, Some(vec![quoted, awaiting_tle()]));
}

#[tokio::test]
async fn test_channel_delivers_in_order_and_ends_on_drop() {
    let (tx, mut stream) = test_channel();

    tx.send(loaded(vec![iss()])).unwrap();
    tx.send(failure("boom")).unwrap();
    drop(tx);

    expect_next_notification(&mut stream, loaded(vec![iss()])).await;
    expect_next_notification(&mut stream, failure("boom")).await;
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn test_assert_no_element_emitted_on_idle_channel() {
    let (_tx, mut stream) = test_channel();
    assert_no_element_emitted(&mut stream, 10).await;
}
