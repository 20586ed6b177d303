// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::StreamItem;
use futures::stream::{Map, Stream, StreamExt};

/// Lifts a plain stream of values into a stream of [`StreamItem`]s.
///
/// Stages consume `Stream<Item = StreamItem<T>>`; this adapter lets any
/// producer of bare values feed one.
///
/// ```
/// use sieve_core::{IntoStreamItems, StreamItem};
/// use futures::{stream, StreamExt};
///
/// # #[tokio::main]
/// # async fn main() {
/// let items: Vec<_> = stream::iter(vec![1, 2]).into_stream_items().collect().await;
/// assert_eq!(items, vec![StreamItem::Value(1), StreamItem::Value(2)]);
/// # }
/// ```
pub trait IntoStreamItems: Stream + Sized {
    /// Wraps every value in `StreamItem::Value`.
    fn into_stream_items(self) -> Map<Self, fn(Self::Item) -> StreamItem<Self::Item>>;
}

impl<S> IntoStreamItems for S
where
    S: Stream,
{
    fn into_stream_items(self) -> Map<Self, fn(Self::Item) -> StreamItem<Self::Item>> {
        self.map(StreamItem::Value as fn(Self::Item) -> StreamItem<Self::Item>)
    }
}
