// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use satwatch_core::Notification;
use std::fmt::Debug;
use std::time::Duration;
use tokio::time::sleep;

pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
    T: Debug,
{
    tokio::select! {
        item = stream.next() => {
            if let Some(item) = item {
                panic!("Unexpected item emitted, expected no output: {item:?}");
            }
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

pub async fn expect_next_notification<S>(stream: &mut S, expected: Notification)
where
    S: Stream<Item = Notification> + Unpin,
{
    let item = stream.next().await.expect("expected next notification");
    assert_eq!(item, expected);
}
