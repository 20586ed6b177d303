// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Last operator that emits the final item once upstream ends.

use async_trait::async_trait;
use futures::Stream;
use sieve_core::{Flow, StreamItem};
use sieve_stage::{ControlFlow, Decision, Operator, Stage, StageContext};
use std::sync::Arc;

/// Extension trait providing the `last` operator for streams.
pub trait LastExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Send + 'static,
{
    /// Emits the most recent item after upstream ends.
    ///
    /// Nothing is emitted while upstream is running. An empty upstream
    /// produces no output.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sieve_filter::LastExt;
    /// use sieve_core::{IntoStreamItems, StreamItem};
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let last: Vec<&str> = stream::iter(["a", "b", "c"])
    ///     .into_stream_items()
    ///     .last()
    ///     .map(StreamItem::unwrap)
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(last, vec!["c"]);
    /// # }
    /// ```
    fn last(self) -> Flow<T>;

    /// Like [`last`](Self::last), but emits `default` when upstream yields
    /// nothing.
    fn last_or(self, default: T) -> Flow<T>;
}

impl<S, T> LastExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    fn last(self) -> Flow<T> {
        Stage::new(self).run(Last)
    }

    fn last_or(self, default: T) -> Flow<T> {
        Stage::new(self)
            .flush_with(StreamItem::Value(default))
            .run(Last)
    }
}

/// Operator behind [`LastExt::last`]. Every item replaces the stage's flush
/// item, which the harness emits after upstream ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct Last;

#[async_trait]
impl<T> Operator<T> for Last
where
    T: Send + 'static,
{
    fn name(&self) -> &'static str {
        "last"
    }

    async fn on_item(
        &self,
        item: StreamItem<T>,
        _arrival: usize,
        ctx: &Arc<StageContext<T>>,
    ) -> Decision {
        ctx.set_flush(item);
        ControlFlow::Continue(())
    }
}
