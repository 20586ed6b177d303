// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sieve_core::{SieveError, StreamItem};
use sieve_filter::prelude::*;
use sieve_filter::SAMPLE_SETTLE_MARGIN;
use sieve_test_utils::test_data::{person_alice, person_bob};
use sieve_test_utils::{test_channel_with_errors, unwrap_stream, TestData};
use std::time::Duration;
use tokio::time::{pause, sleep};

#[tokio::test]
async fn test_sample_forwards_errors_without_waiting_for_tick() -> anyhow::Result<()> {
    // Arrange
    pause();

    let period = Duration::from_millis(200);
    let (tx, stream) = test_channel_with_errors::<TestData>();
    let mut sampled = stream.sample(period);

    // Act
    tx.send(StreamItem::Value(person_alice()))?;
    tx.send(StreamItem::Error(SieveError::stream_error("dropped frame")))?;
    tx.send(StreamItem::Value(person_bob()))?;

    // Assert
    assert!(unwrap_stream(&mut sampled, 10).await.is_error());

    sleep(period + SAMPLE_SETTLE_MARGIN + Duration::from_millis(10)).await;
    assert_eq!(unwrap_stream(&mut sampled, 0).await.unwrap(), person_bob());

    Ok(())
}
