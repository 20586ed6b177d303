// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::{Stream, StreamExt};
use sieve_core::StreamItem;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Asserts that `stream` yields nothing for `timeout_ms` milliseconds.
///
/// With a paused clock a zero timeout checks only what is ready right now.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        biased;
        state = stream.next() => {
            if state.is_some() {
                panic!("Unexpected item emitted, expected no output.");
            }
            panic!("Unexpected end of stream, expected no output.");
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}

/// Waits for the next item, panicking on timeout or on end of stream.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> StreamItem<T>
where
    S: Stream<Item = StreamItem<T>> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(item)) => item,
        Ok(None) => panic!("Expected StreamItem but stream ended"),
        Err(_) => panic!("Timeout: No item received within {timeout_ms} ms"),
    }
}

/// Extracts the value from an item, panicking on errors or on `None`.
pub fn unwrap_value<T>(item: Option<StreamItem<T>>) -> T {
    match item {
        Some(StreamItem::Value(value)) => value,
        Some(StreamItem::Error(e)) => panic!("Expected Value but got Error: {e}"),
        None => panic!("Expected Value but stream ended"),
    }
}

/// Asserts that `stream` ends within `timeout_ms` milliseconds.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(_)) => panic!("Expected stream to end but it returned a value"),
        Err(_) => panic!("Timeout: Stream did not end within {timeout_ms} ms"),
    }
}

/// Drains `stream` to its end and splits the items into values and error messages.
pub async fn collect_flow<S, T>(stream: S) -> (Vec<T>, Vec<String>)
where
    S: Stream<Item = StreamItem<T>>,
{
    let items: Vec<StreamItem<T>> = stream.collect().await;
    let mut values = Vec::new();
    let mut errors = Vec::new();

    for item in items {
        match item {
            StreamItem::Value(value) => values.push(value),
            StreamItem::Error(e) => errors.push(e.to_string()),
        }
    }

    (values, errors)
}
