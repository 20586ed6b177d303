// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream;
use sieve_core::IntoStreamItems;
use sieve_filter::prelude::*;
use sieve_test_utils::test_data::{person_alice, person_bob, person_charlie, person_diane};
use sieve_test_utils::{
    assert_no_element_emitted, assert_stream_ended, collect_flow, test_channel, unwrap_stream,
    TestData,
};

#[tokio::test]
async fn test_skip_last_drops_trailing_items() -> anyhow::Result<()> {
    // Arrange
    let upstream = stream::iter(vec![1, 2, 3, 4, 5]).into_stream_items();

    // Act
    let (values, _) = collect_flow(upstream.skip_last(2)).await;

    // Assert
    assert_eq!(values, vec![1, 2, 3]);

    Ok(())
}

#[tokio::test]
async fn test_skip_last_releases_items_as_newer_ones_arrive() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<TestData>();
    let mut held = stream.skip_last(2);

    // Act
    tx.send(person_alice())?;
    tx.send(person_bob())?;
    assert_no_element_emitted(&mut held, 100).await;

    tx.send(person_charlie())?;

    // Assert
    assert_eq!(unwrap_stream(&mut held, 500).await.unwrap(), person_alice());

    tx.send(person_diane())?;
    assert_eq!(unwrap_stream(&mut held, 500).await.unwrap(), person_bob());

    drop(tx);
    assert_stream_ended(&mut held, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_skip_last_longer_than_stream_emits_nothing() -> anyhow::Result<()> {
    // Arrange
    let upstream = stream::iter(vec![1, 2]).into_stream_items();

    // Act
    let (values, _) = collect_flow(upstream.skip_last(5)).await;

    // Assert
    assert!(values.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_skip_last_zero_is_identity() -> anyhow::Result<()> {
    // Arrange
    let upstream = stream::iter(vec![1, 2, 3]).into_stream_items();

    // Act
    let (values, _) = collect_flow(upstream.skip_last(0)).await;

    // Assert
    assert_eq!(values, vec![1, 2, 3]);

    Ok(())
}
