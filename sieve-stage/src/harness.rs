// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ConcurrencyMode, Operator, StageContext};
use futures::{FutureExt, Stream, StreamExt};
use sieve_core::{debug, error, trace, StreamItem};
use std::panic::AssertUnwindSafe;
use std::process::abort;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};

/// The loop behind every stage.
///
/// Runs to completion exactly once: reads upstream until it ends, dispatches
/// items according to `mode`, waits for every unit of work it started, emits
/// the pending flush item and closes the flow.
pub(crate) struct Harness<S, T, O> {
    pub(crate) upstream: S,
    pub(crate) operator: Arc<O>,
    pub(crate) mode: ConcurrencyMode,
    pub(crate) intercept_errors: bool,
    pub(crate) limiter: Option<Arc<Semaphore>>,
    pub(crate) ctx: Arc<StageContext<T>>,
}

impl<S, T, O> Harness<S, T, O>
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
    O: Operator<T>,
{
    pub(crate) async fn run(self) {
        let Self {
            upstream,
            operator,
            mode,
            intercept_errors,
            limiter,
            ctx,
        } = self;

        debug!(
            "stage {}: started (mode={:?}, intercept_errors={})",
            ctx.name(),
            mode,
            intercept_errors
        );

        let mut upstream = std::pin::pin!(upstream);
        let mut units = JoinSet::new();
        let mut arrivals = 0usize;

        while let Some(item) = upstream.next().await {
            if ctx.is_terminated() {
                trace!("stage {}: discarding item after termination", ctx.name());
                continue;
            }

            if item.is_error() && !intercept_errors {
                if ctx.emit(item).await.is_break() {
                    ctx.terminate();
                }
                continue;
            }

            let arrival = arrivals;
            arrivals += 1;

            if !mode.is_fan_out() {
                dispatch(operator.as_ref(), item, arrival, &ctx).await;
                continue;
            }

            let permit = match &limiter {
                Some(limiter) => Arc::clone(limiter).acquire_owned().await.ok(),
                None => None,
            };
            let operator = Arc::clone(&operator);
            let unit_ctx = Arc::clone(&ctx);
            units.spawn(async move {
                let _permit = permit;
                dispatch(operator.as_ref(), item, arrival, &unit_ctx).await;
            });

            while let Some(finished) = units.try_join_next() {
                abort_on_panic(ctx.name(), finished);
            }
        }

        trace!(
            "stage {}: upstream ended, joining {} unit(s)",
            ctx.name(),
            units.len()
        );
        while let Some(finished) = units.join_next().await {
            abort_on_panic(ctx.name(), finished);
        }

        ctx.mark_drained();
        ctx.join_background().await;

        if let Some(item) = ctx.take_flush() {
            if ctx.emit(item).await.is_break() {
                debug!("stage {}: flush item not delivered", ctx.name());
            }
        }

        ctx.sink().close();
        debug!("stage {}: closed", ctx.name());
    }
}

/// Runs one Decision Function call and records a `Break`.
///
/// A panicking operator is a broken stage: the process aborts.
async fn dispatch<T, O>(
    operator: &O,
    item: StreamItem<T>,
    arrival: usize,
    ctx: &Arc<StageContext<T>>,
) where
    T: Send + 'static,
    O: Operator<T>,
{
    match AssertUnwindSafe(operator.on_item(item, arrival, ctx))
        .catch_unwind()
        .await
    {
        Ok(decision) => {
            if decision.is_break() {
                ctx.terminate();
            }
        }
        Err(_) => abort_stage(ctx.name(), "operator panicked"),
    }
}

/// Aborts if a finished task of the stage panicked.
pub(crate) fn abort_on_panic(name: &str, result: Result<(), JoinError>) {
    if let Err(err) = result {
        if err.is_panic() {
            abort_stage(name, "stage task panicked");
        }
    }
}

pub(crate) fn abort_stage(name: &str, what: &str) -> ! {
    error!("stage {}: {}, aborting", name, what);
    abort()
}
