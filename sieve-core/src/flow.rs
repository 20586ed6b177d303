// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{FlowSink, StreamItem};
use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use pin_project::pin_project;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::{CancellationToken, DropGuard};

/// Default number of items a flow buffers before `send` waits for the consumer.
pub const DEFAULT_FLOW_CAPACITY: usize = 64;

/// The read side of a flow: the output of a stage.
///
/// A `Flow` is a `Stream` of [`StreamItem`]s that ends exactly once, after the
/// producing stage has closed its [`FlowSink`]. Dropping a `Flow` cancels the
/// stage feeding it, so every later send on that stage reports "stop".
#[pin_project]
pub struct Flow<T> {
    #[pin]
    inner: ReceiverStream<StreamItem<T>>,
    cancel: CancellationToken,
    _guard: DropGuard,
}

impl<T> Flow<T> {
    /// The token cancelled when this flow is dropped.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }
}

impl<T> Stream for Flow<T> {
    type Item = StreamItem<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().inner.poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> std::fmt::Debug for Flow<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flow")
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}

/// Creates a connected [`FlowSink`] / [`Flow`] pair.
///
/// `capacity` is clamped to at least one slot. `cancel` is observed by the sink
/// and cancelled when the flow is dropped.
///
/// # Example
///
/// ```
/// use sieve_core::{flow_channel, StreamItem};
/// use futures::StreamExt;
/// use tokio_util::sync::CancellationToken;
///
/// # #[tokio::main]
/// # async fn main() {
/// let (sink, mut flow) = flow_channel(8, CancellationToken::new());
///
/// assert!(!sink.send(StreamItem::Value("ping")).await);
/// sink.close();
///
/// assert_eq!(flow.next().await.unwrap().unwrap(), "ping");
/// assert!(flow.next().await.is_none());
/// # }
/// ```
pub fn flow_channel<T>(capacity: usize, cancel: CancellationToken) -> (FlowSink<T>, Flow<T>) {
    let (tx, rx) = mpsc::channel(capacity.max(1));
    let flow = Flow {
        inner: ReceiverStream::new(rx),
        cancel: cancel.clone(),
        _guard: cancel.clone().drop_guard(),
    };
    (FlowSink::new(tx, cancel), flow)
}
