// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use futures::Stream;
use parking_lot::Mutex;
use sieve_core::{Flow, StreamItem};
use sieve_stage::{ControlFlow, Decision, Operator, Stage, StageContext};
use std::collections::VecDeque;
use std::sync::Arc;

/// Extension trait providing the `skip_last` operator for streams.
pub trait SkipLastExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Send + 'static,
{
    /// Emits every item except the last `n`.
    ///
    /// Each item is held back until `n` newer items have arrived. The items
    /// still held when upstream ends are discarded, never flushed.
    fn skip_last(self, n: usize) -> Flow<T>;
}

impl<S, T> SkipLastExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    fn skip_last(self, n: usize) -> Flow<T> {
        Stage::new(self).run(SkipLast::new(n))
    }
}

/// Operator behind [`SkipLastExt::skip_last`].
#[derive(Debug)]
pub struct SkipLast<T> {
    n: usize,
    pending: Mutex<VecDeque<StreamItem<T>>>,
}

impl<T> SkipLast<T> {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            pending: Mutex::new(VecDeque::with_capacity(n.saturating_add(1).min(1024))),
        }
    }
}

#[async_trait]
impl<T> Operator<T> for SkipLast<T>
where
    T: Send + 'static,
{
    fn name(&self) -> &'static str {
        "skip_last"
    }

    async fn on_item(
        &self,
        item: StreamItem<T>,
        _arrival: usize,
        ctx: &Arc<StageContext<T>>,
    ) -> Decision {
        let released = {
            let mut pending = self.pending.lock();
            pending.push_back(item);
            if pending.len() > self.n {
                pending.pop_front()
            } else {
                None
            }
        };

        match released {
            Some(oldest) => ctx.emit(oldest).await,
            None => ControlFlow::Continue(()),
        }
    }
}
