// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for sieve stages and operators.
//!
//! Production code builds stages from streams; tests need to push items in one
//! at a time and watch what comes out. The channels here bridge the two: the
//! sender side stays in the test, the receiver side is a `Stream` of
//! [`StreamItem`]s that any stage accepts as upstream.
//!
//! ```rust
//! use sieve_test_utils::test_data::{person_alice, TestData};
//! use sieve_test_utils::{test_channel, unwrap_stream};
//!
//! # async fn example() {
//! let (tx, mut stream) = test_channel::<TestData>();
//! tx.send(person_alice()).unwrap();
//!
//! assert_eq!(unwrap_stream(&mut stream, 100).await.unwrap(), person_alice());
//! # }
//! ```

pub mod animal;
pub mod helpers;
pub mod person;
pub mod test_data;

use futures::{Stream, StreamExt};
use sieve_core::StreamItem;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use helpers::{
    assert_no_element_emitted, assert_stream_ended, collect_flow, unwrap_stream, unwrap_value,
};
pub use test_data::TestData;

/// Creates a test channel that wraps every sent value in `StreamItem::Value`.
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let stream = UnboundedReceiverStream::new(rx).map(StreamItem::Value);
    (tx, stream)
}

/// Creates a test channel that accepts `StreamItem<T>`, so tests can inject errors.
///
/// ```rust
/// use sieve_core::{SieveError, StreamItem};
/// use sieve_test_utils::test_channel_with_errors;
///
/// let (tx, _stream) = test_channel_with_errors::<i32>();
/// tx.send(StreamItem::Value(42)).unwrap();
/// tx.send(StreamItem::Error(SieveError::stream_error("sensor offline"))).unwrap();
/// ```
pub fn test_channel_with_errors<T: Send + 'static>() -> (
    mpsc::UnboundedSender<StreamItem<T>>,
    impl Stream<Item = StreamItem<T>> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}
