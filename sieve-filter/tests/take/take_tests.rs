// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream;
use sieve_core::IntoStreamItems;
use sieve_filter::prelude::*;
use sieve_filter::Take;
use sieve_stage::{ConcurrencyMode, Stage};
use sieve_test_utils::test_data::{person_alice, person_bob, person_charlie, person_diane};
use sieve_test_utils::{
    assert_no_element_emitted, assert_stream_ended, collect_flow, test_channel, unwrap_stream,
    TestData,
};

#[tokio::test]
async fn test_take_items_emits_first_n() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<TestData>();
    let mut taken = stream.take_items(2);

    // Act
    tx.send(person_alice())?;
    tx.send(person_bob())?;
    tx.send(person_charlie())?;

    // Assert
    assert_eq!(unwrap_stream(&mut taken, 500).await.unwrap(), person_alice());
    assert_eq!(unwrap_stream(&mut taken, 500).await.unwrap(), person_bob());
    assert_no_element_emitted(&mut taken, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_take_items_keeps_draining_until_upstream_ends() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<TestData>();
    let mut taken = stream.take_items(1);

    // Act
    tx.send(person_alice())?;
    tx.send(person_bob())?;
    tx.send(person_charlie())?;

    // Assert
    assert_eq!(unwrap_stream(&mut taken, 500).await.unwrap(), person_alice());
    assert_no_element_emitted(&mut taken, 100).await;

    tx.send(person_diane())?;
    assert_no_element_emitted(&mut taken, 100).await;

    drop(tx);
    assert_stream_ended(&mut taken, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_take_items_more_than_available() -> anyhow::Result<()> {
    // Arrange
    let upstream = stream::iter(vec![person_alice(), person_bob()]).into_stream_items();

    // Act
    let (values, errors) = collect_flow(upstream.take_items(10)).await;

    // Assert
    assert_eq!(values, vec![person_alice(), person_bob()]);
    assert!(errors.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_take_items_zero_emits_nothing() -> anyhow::Result<()> {
    // Arrange
    let upstream = stream::iter(vec![1, 2, 3]).into_stream_items();

    // Act
    let (values, _) = collect_flow(upstream.take_items(0)).await;

    // Assert
    assert!(values.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_take_items_on_empty_upstream_closes() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<TestData>();
    let mut taken = stream.take_items(3);

    // Act
    drop(tx);

    // Assert
    assert_stream_ended(&mut taken, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_take_fan_out_selects_by_arrival() -> anyhow::Result<()> {
    // Arrange
    let upstream = stream::iter(1..=8).into_stream_items();

    // Act
    let flow = Stage::new(upstream)
        .concurrency(ConcurrencyMode::FanOutIo)
        .run(Take::new(3));
    let (mut values, _) = collect_flow(flow).await;

    // Assert
    values.sort_unstable();
    assert_eq!(values, vec![1, 2, 3]);

    Ok(())
}
