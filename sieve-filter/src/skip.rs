// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Skip operator that drops the first n items of a stream.

use async_trait::async_trait;
use futures::Stream;
use sieve_core::{Flow, StreamItem};
use sieve_stage::{ControlFlow, Decision, Operator, Stage, StageContext};
use std::sync::Arc;

/// Extension trait providing the `skip_items` operator for streams.
pub trait SkipExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Send + 'static,
{
    /// Drops the first `n` items and emits every item after them.
    ///
    /// If upstream yields `n` items or fewer, nothing is emitted.
    ///
    /// # Error Handling
    ///
    /// Errors only count towards `n` on stages that intercept errors; by default
    /// they bypass the operator and are forwarded where they arrive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sieve_filter::SkipExt;
    /// use sieve_core::{IntoStreamItems, StreamItem};
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let tail: Vec<i32> = stream::iter([10, 20, 30, 40, 50])
    ///     .into_stream_items()
    ///     .skip_items(4)
    ///     .map(StreamItem::unwrap)
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(tail, vec![50]);
    /// # }
    /// ```
    ///
    /// # See Also
    ///
    /// - [`TakeExt::take_items`](crate::TakeExt::take_items) - Take first n items
    /// - [`SkipLastExt::skip_last`](crate::SkipLastExt::skip_last) - Drop the last n items
    fn skip_items(self, n: usize) -> Flow<T>;
}

impl<S, T> SkipExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    fn skip_items(self, n: usize) -> Flow<T> {
        Stage::new(self).run(Skip::new(n))
    }
}

/// Operator behind [`SkipExt::skip_items`].
#[derive(Debug, Clone, Copy)]
pub struct Skip {
    n: usize,
}

impl Skip {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

#[async_trait]
impl<T> Operator<T> for Skip
where
    T: Send + 'static,
{
    fn name(&self) -> &'static str {
        "skip"
    }

    async fn on_item(
        &self,
        item: StreamItem<T>,
        arrival: usize,
        ctx: &Arc<StageContext<T>>,
    ) -> Decision {
        if arrival >= self.n {
            ctx.emit(item).await
        } else {
            ControlFlow::Continue(())
        }
    }
}
