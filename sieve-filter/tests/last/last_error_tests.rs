// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sieve_core::{SieveError, StreamItem};
use sieve_filter::prelude::*;
use sieve_filter::Last;
use sieve_stage::Stage;
use sieve_test_utils::test_data::{person_alice, person_bob};
use sieve_test_utils::{
    assert_stream_ended, collect_flow, test_channel_with_errors, unwrap_stream, unwrap_value,
    TestData,
};

#[tokio::test]
async fn test_last_forwards_errors_immediately() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<TestData>();
    let mut last = stream.last();

    // Act
    tx.send(StreamItem::Value(person_alice()))?;
    tx.send(StreamItem::Error(SieveError::stream_error("flaky")))?;
    tx.send(StreamItem::Value(person_bob()))?;

    // Assert
    assert!(unwrap_stream(&mut last, 500).await.is_error());

    drop(tx);
    assert_eq!(
        unwrap_value(Some(unwrap_stream(&mut last, 500).await)),
        person_bob()
    );
    assert_stream_ended(&mut last, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_intercepting_last_can_end_with_an_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<TestData>();
    let last = Stage::new(stream).intercept_errors(true).run(Last);

    // Act
    tx.send(StreamItem::Value(person_alice()))?;
    tx.send(StreamItem::Error(SieveError::stream_error("final")))?;
    drop(tx);
    let (values, errors) = collect_flow(last).await;

    // Assert
    assert!(values.is_empty());
    assert_eq!(errors, vec!["Stream processing error: final"]);

    Ok(())
}
