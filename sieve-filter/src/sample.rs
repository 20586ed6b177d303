// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sample operator that periodically emits the most recent item.
//!
//! Items are not emitted when they arrive. The first arrival starts a ticker
//! owned by the stage; every `period` plus [`SAMPLE_SETTLE_MARGIN`] the ticker
//! emits the newest item buffered since the previous tick, or nothing when no
//! item arrived. The ticker ends when the stage is cancelled, when the consumer
//! stops, or on the first tick after upstream has ended, which is how the final
//! sample reaches the output before it closes.

use crate::timer::Timer;
use async_trait::async_trait;
use core::sync::atomic::{AtomicBool, Ordering};
use core::time::Duration;
use futures::Stream;
use parking_lot::Mutex;
use sieve_core::{debug, Flow, StreamItem};
use sieve_stage::{ConcurrencyMode, ControlFlow, Decision, Operator, Stage, StageContext};
use std::collections::VecDeque;
use std::sync::Arc;

/// Added to every sampling period so items arriving right at a tick boundary
/// are counted in the tick that follows them.
pub const SAMPLE_SETTLE_MARGIN: Duration = Duration::from_millis(50);

/// Number of recent items kept between two ticks.
pub const SAMPLE_BUFFER_CAPACITY: usize = 256;

/// Extension trait providing the `sample` operator for streams.
pub trait SampleExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Send + 'static,
{
    /// Samples the stream every `period`, using [`TokioTimer`](crate::TokioTimer).
    ///
    /// Errors bypass the sampler and are forwarded as they arrive.
    #[cfg(feature = "runtime-tokio")]
    fn sample(self, period: Duration) -> Flow<T> {
        self.sample_with_timer(period, crate::TokioTimer)
    }

    /// Samples the stream every `period`, waiting on `timer`.
    fn sample_with_timer<TM: Timer>(self, period: Duration, timer: TM) -> Flow<T>;
}

impl<S, T> SampleExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    fn sample_with_timer<TM: Timer>(self, period: Duration, timer: TM) -> Flow<T> {
        Stage::new(self).run(Sample::with_timer(period, timer))
    }
}

/// Items that arrived since the previous tick, tagged with their arrival index.
#[derive(Debug)]
struct Window<T> {
    recent: VecDeque<(usize, StreamItem<T>)>,
}

impl<T> Window<T> {
    fn push(&mut self, arrival: usize, item: StreamItem<T>) {
        if self.recent.len() == SAMPLE_BUFFER_CAPACITY {
            self.recent.pop_front();
        }
        self.recent.push_back((arrival, item));
    }

    /// Takes the item that arrived last and forgets the rest.
    fn take_latest(&mut self) -> Option<StreamItem<T>> {
        let newest = self
            .recent
            .iter()
            .enumerate()
            .max_by_key(|(_, (arrival, _))| *arrival)
            .map(|(position, _)| position)?;
        let latest = self.recent.swap_remove_back(newest).map(|(_, item)| item);
        self.recent.clear();
        latest
    }
}

/// Operator behind [`SampleExt::sample`].
#[derive(Debug)]
pub struct Sample<T, TM> {
    period: Duration,
    timer: TM,
    window: Arc<Mutex<Window<T>>>,
    ticker_claimed: AtomicBool,
}

#[cfg(feature = "runtime-tokio")]
impl<T> Sample<T, crate::TokioTimer> {
    pub fn new(period: Duration) -> Self {
        Self::with_timer(period, crate::TokioTimer)
    }
}

impl<T, TM: Timer> Sample<T, TM> {
    pub fn with_timer(period: Duration, timer: TM) -> Self {
        Self {
            period,
            timer,
            window: Arc::new(Mutex::new(Window {
                recent: VecDeque::with_capacity(SAMPLE_BUFFER_CAPACITY),
            })),
            ticker_claimed: AtomicBool::new(false),
        }
    }
}

impl<T, TM> Sample<T, TM>
where
    T: Send + 'static,
    TM: Timer,
{
    fn start_ticker(&self, ctx: &Arc<StageContext<T>>) {
        let interval = self.period + SAMPLE_SETTLE_MARGIN;
        let timer = self.timer.clone();
        let window = Arc::clone(&self.window);

        ctx.spawn_background(move |ctx| async move {
            debug!("stage {}: ticker started, interval {:?}", ctx.name(), interval);

            loop {
                tokio::select! {
                    biased;
                    () = ctx.cancellation_token().cancelled() => break,
                    () = timer.sleep_future(interval) => {}
                }

                let drained = ctx.is_drained();
                let latest = window.lock().take_latest();
                if let Some(item) = latest {
                    if ctx.emit(item).await.is_break() {
                        break;
                    }
                }
                if drained {
                    break;
                }
            }

            debug!("stage {}: ticker stopped", ctx.name());
        });
    }
}

#[async_trait]
impl<T, TM> Operator<T> for Sample<T, TM>
where
    T: Send + 'static,
    TM: Timer,
{
    fn name(&self) -> &'static str {
        "sample"
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
        self.window.lock().push(arrival, item);

        if self
            .ticker_claimed
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            self.start_ticker(ctx);
        }

        ControlFlow::Continue(())
    }
}
