// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The write side of a flow.
//!
//! A [`FlowSink`] is shared by everything a stage runs: the harness loop, every
//! fan-out task and any background ticker. Delivery races the stage's
//! cancellation token, and the answer to every send is a single boolean: did the
//! consumer ask us to stop?

use crate::{error, StreamItem};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Cloneable write handle of a flow.
pub struct FlowSink<T> {
    inner: Arc<Inner<T>>,
}

struct Inner<T> {
    sender: Mutex<Option<mpsc::Sender<StreamItem<T>>>>,
    cancel: CancellationToken,
}

impl<T> FlowSink<T> {
    pub(crate) fn new(sender: mpsc::Sender<StreamItem<T>>, cancel: CancellationToken) -> Self {
        Self {
            inner: Arc::new(Inner {
                sender: Mutex::new(Some(sender)),
                cancel,
            }),
        }
    }

    /// Delivers `item` downstream.
    ///
    /// Returns `true` when the consumer has asked to stop: the stage was
    /// cancelled, the receiving [`Flow`](crate::Flow) was dropped, or the flow is
    /// already closed. A `true` answer is final, the item was not delivered.
    pub async fn send(&self, item: StreamItem<T>) -> bool {
        let Some(sender) = self.inner.sender.lock().clone() else {
            return true;
        };

        if self.inner.cancel.is_cancelled() {
            return true;
        }

        tokio::select! {
            biased;
            () = self.inner.cancel.cancelled() => true,
            result = sender.send(item) => result.is_err(),
        }
    }

    /// Closes the flow. The receiving side ends once buffered items are read.
    ///
    /// Closing a flow twice is a contract violation: it is logged and the
    /// process aborts.
    pub fn close(&self) {
        let sender = self.inner.sender.lock().take();
        if sender.is_none() {
            error!("flow closed twice, aborting");
            std::process::abort();
        }
    }

    /// Returns `true` once [`close`](Self::close) has run.
    pub fn is_closed(&self) -> bool {
        self.inner.sender.lock().is_none()
    }

    /// The cancellation token observed by [`send`](Self::send).
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.inner.cancel
    }
}

impl<T> Clone for FlowSink<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> std::fmt::Debug for FlowSink<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowSink")
            .field("closed", &self.is_closed())
            .field("cancelled", &self.inner.cancel.is_cancelled())
            .finish()
    }
}
