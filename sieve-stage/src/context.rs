// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Per-stage state handed to every [`Operator::on_item`](crate::Operator::on_item) call.

use crate::harness::{abort_on_panic, abort_stage};
use crate::Decision;
use core::future::Future;
use core::ops::ControlFlow;
use core::sync::atomic::{AtomicBool, Ordering};
use futures::FutureExt;
use parking_lot::Mutex;
use sieve_core::{debug, FlowSink, StreamItem};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};

/// Everything an operator may touch while a stage runs.
///
/// One context exists per stage run. It is shared behind an [`Arc`] by the
/// harness loop, every fan-out task and every background task the operator
/// starts.
pub struct StageContext<T> {
    name: String,
    sink: FlowSink<T>,
    flush: Mutex<Option<StreamItem<T>>>,
    terminated: AtomicBool,
    drained: CancellationToken,
    background: Mutex<Vec<JoinHandle<()>>>,
}

impl<T> StageContext<T>
where
    T: Send + 'static,
{
    pub(crate) fn new(name: String, sink: FlowSink<T>, flush: Option<StreamItem<T>>) -> Self {
        Self {
            name,
            sink,
            flush: Mutex::new(flush),
            terminated: AtomicBool::new(false),
            drained: CancellationToken::new(),
            background: Mutex::new(Vec::new()),
        }
    }

    /// The stage name used in log output.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sends one item downstream.
    ///
    /// Returns `Break` when the consumer asked to stop, so an operator can hand
    /// the answer straight back to the harness.
    pub async fn emit(&self, item: StreamItem<T>) -> Decision {
        if self.sink.send(item).await {
            debug!("stage {}: downstream requested stop", self.name);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    /// Shorthand for `emit(StreamItem::Value(value))`.
    pub async fn emit_value(&self, value: T) -> Decision {
        self.emit(StreamItem::Value(value)).await
    }

    /// Replaces the item emitted after upstream ends.
    pub fn set_flush(&self, item: StreamItem<T>) {
        *self.flush.lock() = Some(item);
    }

    /// Removes and returns the pending flush item, if any.
    pub fn take_flush(&self) -> Option<StreamItem<T>> {
        self.flush.lock().take()
    }

    /// Returns `true` once a `Break` decision has been taken for this stage.
    pub fn is_terminated(&self) -> bool {
        self.terminated.load(Ordering::Acquire)
    }

    pub(crate) fn terminate(&self) {
        if !self.terminated.swap(true, Ordering::AcqRel) {
            debug!("stage {}: terminated", self.name);
        }
    }

    /// The stage's cancellation token, cancelled when the output flow is dropped
    /// or a parent token is cancelled.
    pub fn cancellation_token(&self) -> &CancellationToken {
        self.sink.cancellation_token()
    }

    /// Returns `true` once upstream has ended and all fan-out work has finished.
    pub fn is_drained(&self) -> bool {
        self.drained.is_cancelled()
    }

    /// Resolves once upstream has ended and all fan-out work has finished.
    pub fn drained(&self) -> WaitForCancellationFuture<'_> {
        self.drained.cancelled()
    }

    pub(crate) fn mark_drained(&self) {
        self.drained.cancel();
    }

    pub(crate) fn sink(&self) -> &FlowSink<T> {
        &self.sink
    }

    /// Starts a task that lives beside the item loop.
    ///
    /// The harness waits for every background task after upstream has drained
    /// and before the flow is closed, so a background task must end on its own
    /// once [`drained`](Self::drained) resolves or the stage is cancelled.
    /// A panicking background task aborts the process.
    pub fn spawn_background<F, Fut>(self: &Arc<Self>, task: F)
    where
        F: FnOnce(Arc<Self>) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let name = self.name.clone();
        let work = AssertUnwindSafe(task(Arc::clone(self))).catch_unwind();
        let handle = tokio::spawn(async move {
            if work.await.is_err() {
                abort_stage(&name, "background task panicked");
            }
        });
        self.background.lock().push(handle);
    }

    pub(crate) async fn join_background(&self) {
        loop {
            let handles = std::mem::take(&mut *self.background.lock());
            if handles.is_empty() {
                return;
            }

            for handle in handles {
                abort_on_panic(&self.name, handle.await);
            }
        }
    }
}

impl<T> std::fmt::Debug for StageContext<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StageContext")
            .field("name", &self.name)
            .field("terminated", &self.terminated.load(Ordering::Relaxed))
            .field("drained", &self.drained.is_cancelled())
            .finish_non_exhaustive()
    }
}
