// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::harness::Harness;
use crate::{ConcurrencyMode, Operator, StageConfig, StageContext};
use core::num::NonZeroUsize;
use futures::Stream;
use sieve_core::{flow_channel, Flow, StreamItem};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;

/// Builder for one processing stage.
///
/// A stage binds an upstream stream of [`StreamItem`]s to an [`Operator`] and
/// returns the output [`Flow`] immediately; the work itself runs on a spawned
/// tokio task. The output flow is closed exactly once, after upstream has ended,
/// all dispatched work has finished and the pending flush item (if any) has been
/// emitted.
///
/// # Example
///
/// ```
/// use sieve_stage::{Decision, Operator, Stage, StageContext};
/// use sieve_core::{IntoStreamItems, StreamItem};
/// use futures::{stream, StreamExt};
/// use std::sync::Arc;
///
/// struct Echo;
///
/// #[async_trait::async_trait]
/// impl Operator<u8> for Echo {
///     fn name(&self) -> &'static str {
///         "echo"
///     }
///
///     async fn on_item(&self, item: StreamItem<u8>, _: usize, ctx: &Arc<StageContext<u8>>) -> Decision {
///         ctx.emit(item).await
///     }
/// }
///
/// # #[tokio::main]
/// # async fn main() {
/// let flow = Stage::new(stream::iter([1u8, 2, 3]).into_stream_items()).run(Echo);
///
/// let out: Vec<u8> = flow.map(StreamItem::unwrap).collect().await;
/// assert_eq!(out, vec![1, 2, 3]);
/// # }
/// ```
pub struct Stage<S, T> {
    upstream: S,
    config: StageConfig,
    parent: Option<CancellationToken>,
    flush: Option<StreamItem<T>>,
}

impl<S, T> Stage<S, T>
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    pub fn new(upstream: S) -> Self {
        Self {
            upstream,
            config: StageConfig::default(),
            parent: None,
            flush: None,
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.config.concurrency = Some(mode);
        self
    }

    #[must_use]
    pub fn intercept_errors(mut self, intercept: bool) -> Self {
        self.config.intercept_errors = intercept;
        self
    }

    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config = self.config.with_capacity(capacity);
        self
    }

    #[must_use]
    pub fn max_in_flight(mut self, limit: NonZeroUsize) -> Self {
        self.config.max_in_flight = Some(limit);
        self
    }

    /// Replaces every setting at once.
    #[must_use]
    pub fn with_config(mut self, config: StageConfig) -> Self {
        self.config = config;
        self
    }

    /// Ties the stage to `parent`: cancelling it stops the stage as if the
    /// output flow had been dropped.
    #[must_use]
    pub fn cancellation_token(mut self, parent: &CancellationToken) -> Self {
        self.parent = Some(parent.child_token());
        self
    }

    /// Pre-loads the item emitted after upstream ends.
    #[must_use]
    pub fn flush_with(mut self, item: StreamItem<T>) -> Self {
        self.flush = Some(item);
        self
    }

    /// Starts the stage and returns its output flow.
    ///
    /// Must be called from within a tokio runtime.
    pub fn run<O>(self, operator: O) -> Flow<T>
    where
        O: Operator<T>,
    {
        let Self {
            upstream,
            config,
            parent,
            flush,
        } = self;

        let cancel = parent.unwrap_or_default();
        let (sink, flow) = flow_channel(config.capacity, cancel);

        let name = config
            .name
            .unwrap_or_else(|| operator.name().to_string());
        let mode = config
            .concurrency
            .unwrap_or_else(|| operator.default_concurrency());

        let harness = Harness {
            upstream,
            operator: Arc::new(operator),
            mode,
            intercept_errors: config.intercept_errors,
            limiter: config
                .max_in_flight
                .map(|limit| Arc::new(Semaphore::new(limit.get()))),
            ctx: Arc::new(StageContext::new(name, sink, flush)),
        };

        #[cfg(feature = "tracing")]
        {
            use tracing::Instrument;
            let span = tracing::debug_span!("stage", name = %harness.ctx.name());
            tokio::spawn(harness.run().instrument(span));
        }
        #[cfg(not(feature = "tracing"))]
        tokio::spawn(harness.run());

        flow
    }
}

impl<S, T> std::fmt::Debug for Stage<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("config", &self.config)
            .field("has_parent", &self.parent.is_some())
            .field("has_flush", &self.flush.is_some())
            .finish_non_exhaustive()
    }
}
