// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream;
use sieve_core::IntoStreamItems;
use sieve_filter::prelude::*;
use sieve_test_utils::test_data::{animal_dog, person_alice};
use sieve_test_utils::{assert_no_element_emitted, assert_stream_ended, collect_flow, test_channel};

#[tokio::test]
async fn test_ignore_elements_emits_nothing() -> anyhow::Result<()> {
    // Arrange
    let upstream = stream::iter(vec![person_alice(), animal_dog()]).into_stream_items();

    // Act
    let (values, errors) = collect_flow(upstream.ignore_elements()).await;

    // Assert
    assert!(values.is_empty());
    assert!(errors.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_ignore_elements_completes_with_upstream() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel();
    let mut ignored = stream.ignore_elements();

    // Act
    tx.send(person_alice())?;

    // Assert
    assert_no_element_emitted(&mut ignored, 100).await;
    drop(tx);
    assert_stream_ended(&mut ignored, 500).await;

    Ok(())
}
