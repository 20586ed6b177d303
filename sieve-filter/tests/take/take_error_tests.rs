// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sieve_core::{SieveError, StreamItem};
use sieve_filter::prelude::*;
use sieve_filter::Take;
use sieve_stage::Stage;
use sieve_test_utils::test_data::{person_alice, person_bob, person_charlie};
use sieve_test_utils::{collect_flow, test_channel_with_errors, TestData};

#[tokio::test]
async fn test_take_items_forwards_errors_without_counting_them() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<TestData>();
    let taken = stream.take_items(2);

    // Act
    tx.send(StreamItem::Value(person_alice()))?;
    tx.send(StreamItem::Error(SieveError::stream_error("glitch")))?;
    tx.send(StreamItem::Value(person_bob()))?;
    tx.send(StreamItem::Value(person_charlie()))?;
    drop(tx);
    let (values, errors) = collect_flow(taken).await;

    // Assert
    assert_eq!(values, vec![person_alice(), person_bob()]);
    assert_eq!(errors, vec!["Stream processing error: glitch"]);

    Ok(())
}

#[tokio::test]
async fn test_take_items_still_forwards_errors_after_limit() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<TestData>();
    let taken = stream.take_items(1);

    // Act
    tx.send(StreamItem::Value(person_alice()))?;
    tx.send(StreamItem::Value(person_bob()))?;
    tx.send(StreamItem::Error(SieveError::stream_error("late")))?;
    drop(tx);
    let (values, errors) = collect_flow(taken).await;

    // Assert
    assert_eq!(values, vec![person_alice()]);
    assert_eq!(errors, vec!["Stream processing error: late"]);

    Ok(())
}

#[tokio::test]
async fn test_intercepting_take_counts_errors() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<TestData>();
    let taken = Stage::new(stream).intercept_errors(true).run(Take::new(2));

    // Act
    tx.send(StreamItem::Error(SieveError::stream_error("first")))?;
    tx.send(StreamItem::Value(person_alice()))?;
    tx.send(StreamItem::Value(person_bob()))?;
    drop(tx);
    let (values, errors) = collect_flow(taken).await;

    // Assert
    assert_eq!(values, vec![person_alice()]);
    assert_eq!(errors, vec!["Stream processing error: first"]);

    Ok(())
}
