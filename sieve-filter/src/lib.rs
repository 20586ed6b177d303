// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filtering and windowing operators built on the sieve stage harness.
//!
//! Every operator is a small [`Operator`](sieve_stage::Operator) implementation
//! plus an extension trait that runs it as a stage with default settings:
//!
//! | operator | extension | default mode |
//! |----------|-----------|--------------|
//! | [`Debounce`] | [`DebounceExt::debounce`] | fan-out |
//! | [`Distinct`] | [`DistinctExt::distinct`], [`DistinctExt::distinct_by`] | sequential |
//! | [`ElementAt`] | [`ElementAtExt::element_at`] | sequential |
//! | [`First`] | [`FirstExt::first`] | sequential |
//! | [`IgnoreElements`] | [`IgnoreElementsExt::ignore_elements`] | sequential |
//! | [`Last`] | [`LastExt::last`], [`LastExt::last_or`] | sequential |
//! | [`Sample`] | [`SampleExt::sample`] | fan-out |
//! | [`Skip`] | [`SkipExt::skip_items`] | sequential |
//! | [`SkipLast`] | [`SkipLastExt::skip_last`] | sequential |
//! | [`Take`] | [`TakeExt::take_items`] | sequential |
//!
//! To change how an operator runs, build the stage yourself:
//!
//! ```rust
//! use sieve_filter::Distinct;
//! use sieve_stage::{ConcurrencyMode, Stage};
//! use sieve_core::IntoStreamItems;
//! use futures::stream;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let flow = Stage::new(stream::iter(["a", "b", "a"]).into_stream_items())
//!     .name("dedupe-tags")
//!     .concurrency(ConcurrencyMode::Sequential)
//!     .intercept_errors(true)
//!     .run(Distinct::new());
//! # drop(flow);
//! # }
//! ```
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - [`TokioTimer`] and the `debounce`/`sample`
//!   shorthands that use it
//! - `tracing` - route stage and ticker logs through `tracing`

mod debounce;
mod distinct;
mod element_at;
mod first;
mod ignore_elements;
mod last;
mod sample;
mod skip;
mod skip_last;
mod take;
pub mod timer;

pub mod prelude;

pub use self::debounce::{Debounce, DebounceExt};
pub use self::distinct::{Distinct, DistinctExt};
pub use self::element_at::{ElementAt, ElementAtExt};
pub use self::first::{First, FirstExt};
pub use self::ignore_elements::{IgnoreElements, IgnoreElementsExt};
pub use self::last::{Last, LastExt};
pub use self::sample::{Sample, SampleExt, SAMPLE_BUFFER_CAPACITY, SAMPLE_SETTLE_MARGIN};
pub use self::skip::{Skip, SkipExt};
pub use self::skip_last::{SkipLast, SkipLastExt};
pub use self::take::{Take, TakeExt};
pub use self::timer::Timer;
#[cfg(feature = "runtime-tokio")]
pub use self::timer::TokioTimer;
