// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream;
use sieve_core::IntoStreamItems;
use sieve_filter::prelude::*;
use sieve_test_utils::test_data::{animal_cat, animal_dog, person_alice, person_bob};
use sieve_test_utils::{
    assert_no_element_emitted, assert_stream_ended, collect_flow, test_channel, unwrap_stream,
    TestData,
};

#[tokio::test]
async fn test_element_at_emits_only_target_position() -> anyhow::Result<()> {
    // Arrange
    let upstream =
        stream::iter(vec![person_alice(), person_bob(), animal_dog(), animal_cat()])
            .into_stream_items();

    // Act
    let (values, _) = collect_flow(upstream.element_at(2)).await;

    // Assert
    assert_eq!(values, vec![animal_dog()]);

    Ok(())
}

#[tokio::test]
async fn test_element_at_first_position() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel::<TestData>();
    let mut picked = stream.element_at(0);

    // Act
    tx.send(person_alice())?;
    tx.send(person_bob())?;

    // Assert
    assert_eq!(unwrap_stream(&mut picked, 500).await.unwrap(), person_alice());
    assert_no_element_emitted(&mut picked, 100).await;

    drop(tx);
    assert_stream_ended(&mut picked, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_element_at_out_of_range_emits_nothing() -> anyhow::Result<()> {
    // Arrange
    let upstream = stream::iter(vec![1, 2, 3]).into_stream_items();

    // Act
    let (values, errors) = collect_flow(upstream.element_at(3)).await;

    // Assert
    assert!(values.is_empty());
    assert!(errors.is_empty());

    Ok(())
}
