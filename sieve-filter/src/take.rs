// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take operator that emits only the first n items of a stream.

use async_trait::async_trait;
use futures::Stream;
use sieve_core::{Flow, StreamItem};
use sieve_stage::{ControlFlow, Decision, Operator, Stage, StageContext};
use std::sync::Arc;

/// Extension trait providing the `take_items` operator for streams.
pub trait TakeExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Send + 'static,
{
    /// Emits the first `n` items and drops the rest.
    ///
    /// The stage keeps reading upstream after the n-th item instead of asking
    /// it to stop: the output flow ends only when upstream ends.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sieve_filter::TakeExt;
    /// use sieve_core::{IntoStreamItems, StreamItem};
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let first_two: Vec<i32> = stream::iter([1, 2, 3, 4])
    ///     .into_stream_items()
    ///     .take_items(2)
    ///     .map(StreamItem::unwrap)
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(first_two, vec![1, 2]);
    /// # }
    /// ```
    ///
    /// # See Also
    ///
    /// - [`SkipExt::skip_items`](crate::SkipExt::skip_items) - Skip first n items
    fn take_items(self, n: usize) -> Flow<T>;
}

impl<S, T> TakeExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    fn take_items(self, n: usize) -> Flow<T> {
        Stage::new(self).run(Take::new(n))
    }
}

/// Operator behind [`TakeExt::take_items`].
#[derive(Debug, Clone, Copy)]
pub struct Take {
    n: usize,
}

impl Take {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

#[async_trait]
impl<T> Operator<T> for Take
where
    T: Send + 'static,
{
    fn name(&self) -> &'static str {
        "take"
    }

    async fn on_item(
        &self,
        item: StreamItem<T>,
        arrival: usize,
        ctx: &Arc<StageContext<T>>,
    ) -> Decision {
        if arrival < self.n {
            ctx.emit(item).await
        } else {
            ControlFlow::Continue(())
        }
    }
}
