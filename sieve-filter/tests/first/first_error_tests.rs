// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sieve_core::{SieveError, StreamItem};
use sieve_filter::prelude::*;
use sieve_filter::First;
use sieve_stage::Stage;
use sieve_test_utils::test_data::{person_alice, person_bob};
use sieve_test_utils::{collect_flow, test_channel_with_errors, TestData};

#[tokio::test]
async fn test_first_forwards_errors_before_first_value() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<TestData>();
    let first = stream.first();

    // Act
    tx.send(StreamItem::Error(SieveError::stream_error("warming up")))?;
    tx.send(StreamItem::Value(person_alice()))?;
    tx.send(StreamItem::Value(person_bob()))?;
    drop(tx);
    let (values, errors) = collect_flow(first).await;

    // Assert
    assert_eq!(values, vec![person_alice()]);
    assert_eq!(errors, vec!["Stream processing error: warming up"]);

    Ok(())
}

#[tokio::test]
async fn test_first_drops_errors_after_termination() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<TestData>();
    let first = stream.first();

    // Act
    tx.send(StreamItem::Value(person_alice()))?;
    tx.send(StreamItem::Error(SieveError::stream_error("too late")))?;
    drop(tx);
    let (values, errors) = collect_flow(first).await;

    // Assert
    assert_eq!(values, vec![person_alice()]);
    assert!(errors.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_intercepting_first_can_emit_an_error() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<TestData>();
    let first = Stage::new(stream).intercept_errors(true).run(First);

    // Act
    tx.send(StreamItem::Error(SieveError::stream_error("head")))?;
    tx.send(StreamItem::Value(person_alice()))?;
    drop(tx);
    let (values, errors) = collect_flow(first).await;

    // Assert
    assert!(values.is_empty());
    assert_eq!(errors, vec!["Stream processing error: head"]);

    Ok(())
}
