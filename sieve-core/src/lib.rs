// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core types shared by every sieve stage.
//!
//! - [`StreamItem`] - the tagged `Value` / `Error` item travelling between stages
//! - [`SieveError`] - the error payload of `StreamItem::Error`
//! - [`FlowSink`] - the write side of a flow: cancellable send, close exactly once
//! - [`Flow`] - the read side of a flow, returned by every stage
//! - [`IntoStreamItems`] - lifts a stream of plain values into stream items

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod flow;
pub mod flow_sink;
pub mod into_stream_items;
mod logging;
pub mod sieve_error;
pub mod stream_item;

pub use self::flow::{flow_channel, Flow, DEFAULT_FLOW_CAPACITY};
pub use self::flow_sink::FlowSink;
pub use self::into_stream_items::IntoStreamItems;
pub use self::sieve_error::{IntoSieveError, Result, ResultExt, SieveError};
pub use self::stream_item::StreamItem;
pub use tokio_util::sync::CancellationToken;

#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "tracing")]
    pub use tracing;
}
