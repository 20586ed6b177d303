// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use futures::Stream;
use sieve_core::{Flow, StreamItem};
use sieve_stage::{ControlFlow, Decision, Operator, Stage, StageContext};
use std::sync::Arc;

/// Extension trait providing the `element_at` operator for streams.
pub trait ElementAtExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Send + 'static,
{
    /// Emits only the item at zero-based position `index`.
    ///
    /// Upstream is read to its end either way; a stream shorter than
    /// `index + 1` items produces no output.
    fn element_at(self, index: usize) -> Flow<T>;
}

impl<S, T> ElementAtExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    fn element_at(self, index: usize) -> Flow<T> {
        Stage::new(self).run(ElementAt::new(index))
    }
}

/// Operator behind [`ElementAtExt::element_at`].
#[derive(Debug, Clone, Copy)]
pub struct ElementAt {
    index: usize,
}

impl ElementAt {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

#[async_trait]
impl<T> Operator<T> for ElementAt
where
    T: Send + 'static,
{
    fn name(&self) -> &'static str {
        "element_at"
    }

    async fn on_item(
        &self,
        item: StreamItem<T>,
        arrival: usize,
        ctx: &Arc<StageContext<T>>,
    ) -> Decision {
        if arrival == self.index {
            ctx.emit(item).await
        } else {
            ControlFlow::Continue(())
        }
    }
}
