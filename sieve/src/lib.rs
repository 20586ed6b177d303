// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Sieve
//!
//! Filtering and windowing operators for async streams, each running as its own
//! supervised stage.
//!
//! ## Overview
//!
//! A stage reads a `Stream` of [`StreamItem`]s, hands every item to an
//! [`Operator`], and publishes what the operator emits on a [`Flow`]. The stage
//! owns the bookkeeping every operator would otherwise repeat:
//!
//! - errors bypass the operator unless the stage intercepts them
//! - an operator that returns `Break` stops dispatch, upstream is still drained
//! - fan-out stages run items concurrently and join them before closing
//! - a flush item set by the operator is emitted after the last item
//! - dropping a [`Flow`] cancels the stage feeding it
//!
//! ## Quick Start
//!
//! ```rust
//! use sieve::prelude::*;
//! use futures::{stream, StreamExt};
//!
//! #[tokio::main]
//! async fn main() {
//!     let readings = stream::iter([7, 7, 3, 9, 3, 4, 8]).into_stream_items();
//!
//!     let kept: Vec<i32> = readings
//!         .distinct()
//!         .skip_last(1)
//!         .take_items(3)
//!         .map(StreamItem::unwrap)
//!         .collect()
//!         .await;
//!
//!     assert_eq!(kept, vec![7, 3, 9]);
//! }
//! ```
//!
//! ## Custom Stages
//!
//! Operators are plain types, so a stage can be configured before it runs:
//!
//! ```rust
//! use sieve::{ConcurrencyMode, Stage, Take};
//! use sieve::prelude::*;
//! use futures::{stream, StreamExt};
//! use std::num::NonZeroUsize;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let flow = Stage::new(stream::iter(0..100).into_stream_items())
//!     .name("first-ten")
//!     .concurrency(ConcurrencyMode::FanOutCompute)
//!     .max_in_flight(NonZeroUsize::new(4).unwrap())
//!     .run(Take::new(10));
//!
//! let mut taken: Vec<i32> = flow.map(StreamItem::unwrap).collect().await;
//! taken.sort_unstable();
//! assert_eq!(taken, (0..10).collect::<Vec<_>>());
//! # }
//! ```

// Re-export core types
pub use sieve_core::{
    flow_channel, CancellationToken, Flow, FlowSink, IntoSieveError, IntoStreamItems, Result,
    ResultExt, SieveError, StreamItem, DEFAULT_FLOW_CAPACITY,
};

// Re-export the stage harness
pub use sieve_stage::{
    ConcurrencyMode, ControlFlow, Decision, Operator, Stage, StageConfig, StageContext,
};

// Re-export operators
#[cfg(feature = "runtime-tokio")]
pub use sieve_filter::TokioTimer;
pub use sieve_filter::{
    Debounce, Distinct, ElementAt, First, IgnoreElements, Last, Sample, Skip, SkipLast, Take,
    Timer, SAMPLE_BUFFER_CAPACITY, SAMPLE_SETTLE_MARGIN,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use sieve_core::{IntoStreamItems, SieveError, StreamItem};
    pub use sieve_filter::prelude::*;
    pub use sieve_stage::{ConcurrencyMode, Stage};
}
