// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::Timer;
use async_trait::async_trait;
use core::sync::atomic::{AtomicUsize, Ordering};
use core::time::Duration;
use futures::Stream;
use sieve_core::{trace, Flow, StreamItem};
use sieve_stage::{ConcurrencyMode, ControlFlow, Decision, Operator, Stage, StageContext};
use std::sync::Arc;

/// Extension trait providing the `debounce` operator for streams.
///
/// This trait allows any stream of `StreamItem<T>` to debounce emissions by a
/// quiet window.
pub trait DebounceExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Send + 'static,
{
    /// Debounces the stream by `window`, using [`TokioTimer`](crate::TokioTimer).
    ///
    /// This implements **trailing debounce** semantics:
    /// - Every arrival waits `window` on its own task
    /// - When the wait ends, the item is emitted only if nothing newer arrived
    ///   in the meantime
    /// - The output ends after the last pending wait has finished
    ///
    /// Errors pass through immediately without debounce, to ensure timely
    /// error propagation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sieve_filter::DebounceExt;
    /// use sieve_core::{IntoStreamItems, StreamItem};
    /// use futures::{stream, StreamExt};
    /// use std::time::Duration;
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// // A burst settles to its final item.
    /// let settled: Vec<i32> = stream::iter([1, 2, 3])
    ///     .into_stream_items()
    ///     .debounce(Duration::from_millis(20))
    ///     .map(StreamItem::unwrap)
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(settled, vec![3]);
    /// # }
    /// ```
    #[cfg(feature = "runtime-tokio")]
    fn debounce(self, window: Duration) -> Flow<T> {
        self.debounce_with_timer(window, crate::TokioTimer)
    }

    /// Debounces the stream by `window`, waiting on `timer`.
    fn debounce_with_timer<TM: Timer>(self, window: Duration, timer: TM) -> Flow<T>;
}

impl<S, T> DebounceExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    fn debounce_with_timer<TM: Timer>(self, window: Duration, timer: TM) -> Flow<T> {
        Stage::new(self).run(Debounce::with_timer(window, timer))
    }
}

/// Operator behind [`DebounceExt::debounce`].
///
/// Prefers [`ConcurrencyMode::FanOutCompute`]: each arrival waits on its own
/// task, so a newer arrival can supersede an older one while it waits. Run
/// sequentially, every wait completes before the next item is read and every
/// item is emitted.
///
/// The wait does not observe the stage's cancellation token. After the output
/// flow is dropped, pending waits still run out their window; their emission
/// attempt then reports a stop.
#[derive(Debug)]
pub struct Debounce<TM> {
    window: Duration,
    timer: TM,
    latest: AtomicUsize,
}

#[cfg(feature = "runtime-tokio")]
impl Debounce<crate::TokioTimer> {
    pub fn new(window: Duration) -> Self {
        Self::with_timer(window, crate::TokioTimer)
    }
}

impl<TM: Timer> Debounce<TM> {
    pub fn with_timer(window: Duration, timer: TM) -> Self {
        Self {
            window,
            timer,
            latest: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl<T, TM> Operator<T> for Debounce<TM>
where
    T: Send + 'static,
    TM: Timer,
{
    fn name(&self) -> &'static str {
        "debounce"
    }

    fn default_concurrency(&self) -> ConcurrencyMode {
        ConcurrencyMode::FanOutCompute
    }

    async fn on_item(
        &self,
        item: StreamItem<T>,
        arrival: usize,
        ctx: &Arc<StageContext<T>>,
    ) -> Decision {
        self.latest.fetch_max(arrival, Ordering::AcqRel);
        let arrived = self.timer.now();

        self.timer.sleep_future(self.window).await;

        if self.latest.load(Ordering::Acquire) != arrival {
            trace!(
                "stage {}: item {} superseded after {:?}",
                ctx.name(),
                arrival,
                self.timer.now() - arrived
            );
            return ControlFlow::Continue(());
        }

        ctx.emit(item).await
    }
}
