// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sieve_core::{SieveError, StreamItem};
use sieve_filter::prelude::*;
use sieve_filter::Distinct;
use sieve_stage::Stage;
use sieve_test_utils::{collect_flow, test_channel_with_errors};

#[tokio::test]
async fn test_distinct_forwards_every_error_by_default() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<String>();
    let unique = stream.distinct();

    // Act
    tx.send(StreamItem::Error(SieveError::stream_error("timeout")))?;
    tx.send(StreamItem::Error(SieveError::stream_error("timeout")))?;
    tx.send(StreamItem::Value("timeout".to_string()))?;
    drop(tx);
    let (values, errors) = collect_flow(unique).await;

    // Assert
    assert_eq!(values, vec!["timeout".to_string()]);
    assert_eq!(errors.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_intercepting_distinct_dedupes_errors_apart_from_values() -> anyhow::Result<()> {
    // Arrange
    let (tx, stream) = test_channel_with_errors::<String>();
    let unique = Stage::new(stream)
        .intercept_errors(true)
        .run(Distinct::new());

    // Act
    tx.send(StreamItem::Value("Stream processing error: timeout".to_string()))?;
    tx.send(StreamItem::Error(SieveError::stream_error("timeout")))?;
    tx.send(StreamItem::Error(SieveError::stream_error("timeout")))?;
    drop(tx);
    let (values, errors) = collect_flow(unique).await;

    // Assert
    assert_eq!(values, vec!["Stream processing error: timeout".to_string()]);
    assert_eq!(errors, vec!["Stream processing error: timeout"]);

    Ok(())
}
