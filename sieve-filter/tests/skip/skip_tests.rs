// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream;
use sieve_core::IntoStreamItems;
use sieve_filter::prelude::*;
use sieve_test_utils::test_data::{animal_dog, person_alice, person_bob, person_charlie};
use sieve_test_utils::{
    assert_no_element_emitted, assert_stream_ended, collect_flow, test_channel, unwrap_stream,
    TestData,
};

#[tokio::test]
async fn test_skip_items_drops_first_n() -> anyhow::Result<()> {
    // Arrange
    let upstream = stream::iter(vec![10, 20, 30, 40, 50]).into_stream_items();

    // Act
    let (values, _) = collect_flow(upstream.skip_items(4)).await;

    // Assert
    assert_eq!(values, vec![50]);

    Ok(())
}

#[tokio::test]
async fn test_skip_items_emits_everything_after_n() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<TestData>();
    let mut skipped = stream.skip_items(1);

    // Act
    tx.send(person_alice())?;
    assert_no_element_emitted(&mut skipped, 100).await;

    tx.send(person_bob())?;
    tx.send(person_charlie())?;

    // Assert
    assert_eq!(unwrap_stream(&mut skipped, 500).await.unwrap(), person_bob());
    assert_eq!(
        unwrap_stream(&mut skipped, 500).await.unwrap(),
        person_charlie()
    );

    drop(tx);
    assert_stream_ended(&mut skipped, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_skip_items_beyond_length_emits_nothing() -> anyhow::Result<()> {
    // Arrange
    let upstream = stream::iter(vec![person_alice(), animal_dog()]).into_stream_items();

    // Act
    let (values, errors) = collect_flow(upstream.skip_items(2)).await;

    // Assert
    assert!(values.is_empty());
    assert!(errors.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_skip_items_zero_is_identity() -> anyhow::Result<()> {
    // Arrange
    let upstream = stream::iter(vec![1, 2, 3]).into_stream_items();

    // Act
    let (values, _) = collect_flow(upstream.skip_items(0)).await;

    // Assert
    assert_eq!(values, vec![1, 2, 3]);

    Ok(())
}
