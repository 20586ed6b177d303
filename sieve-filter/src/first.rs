// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use futures::Stream;
use sieve_core::{Flow, StreamItem};
use sieve_stage::{ControlFlow, Decision, Operator, Stage, StageContext};
use std::sync::Arc;

/// Extension trait providing the `first` operator for streams.
pub trait FirstExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Send + 'static,
{
    /// Emits the first item, then terminates the stage.
    ///
    /// Everything after the first item is drained and dropped, errors included.
    /// An empty upstream produces no output.
    fn first(self) -> Flow<T>;
}

impl<S, T> FirstExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    fn first(self) -> Flow<T> {
        Stage::new(self).run(First)
    }
}

/// Operator behind [`FirstExt::first`].
#[derive(Debug, Clone, Copy, Default)]
pub struct First;

#[async_trait]
impl<T> Operator<T> for First
where
    T: Send + 'static,
{
    fn name(&self) -> &'static str {
        "first"
    }

    async fn on_item(
        &self,
        item: StreamItem<T>,
        _arrival: usize,
        ctx: &Arc<StageContext<T>>,
    ) -> Decision {
        let _ = ctx.emit(item).await;
        ControlFlow::Break(())
    }
}
