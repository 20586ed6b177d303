// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use futures::Stream;
use sieve_core::{Flow, StreamItem};
use sieve_stage::{ControlFlow, Decision, Operator, Stage, StageContext};
use std::sync::Arc;

/// Extension trait providing the `ignore_elements` operator for streams.
pub trait IgnoreElementsExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Send + 'static,
{
    /// Drops every value. Upstream errors still pass through, and the output
    /// ends when upstream ends.
    fn ignore_elements(self) -> Flow<T>;
}

impl<S, T> IgnoreElementsExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    fn ignore_elements(self) -> Flow<T> {
        Stage::new(self).run(IgnoreElements)
    }
}

/// Operator behind [`IgnoreElementsExt::ignore_elements`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreElements;

#[async_trait]
impl<T> Operator<T> for IgnoreElements
where
    T: Send + 'static,
{
    fn name(&self) -> &'static str {
        "ignore_elements"
    }

    async fn on_item(
        &self,
        _item: StreamItem<T>,
        _arrival: usize,
        _ctx: &Arc<StageContext<T>>,
    ) -> Decision {
        ControlFlow::Continue(())
    }
}
