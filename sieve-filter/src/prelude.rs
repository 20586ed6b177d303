// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting every operator extension trait.
//!
//! ```rust
//! use sieve_filter::prelude::*;
//! use sieve_core::{IntoStreamItems, StreamItem};
//! use futures::{stream, StreamExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let out: Vec<i32> = stream::iter([3, 3, 1, 4, 1, 5, 9])
//!     .into_stream_items()
//!     .distinct()
//!     .skip_items(1)
//!     .take_items(3)
//!     .map(StreamItem::unwrap)
//!     .collect()
//!     .await;
//!
//! assert_eq!(out, vec![1, 4, 5]);
//! # }
//! ```
//!
//! # Contents
//!
//! - [`DebounceExt`] - Emit only after a quiet window
//! - [`DistinctExt`] - Drop repeats of already seen items
//! - [`ElementAtExt`] - Emit the item at one position
//! - [`FirstExt`] - Emit the first item and stop
//! - [`IgnoreElementsExt`] - Emit nothing but errors and completion
//! - [`LastExt`] - Emit the final item at completion
//! - [`SampleExt`] - Emit the most recent item at intervals
//! - [`SkipExt`] - Drop the first n items
//! - [`SkipLastExt`] - Drop the last n items
//! - [`TakeExt`] - Emit the first n items

pub use crate::debounce::DebounceExt;
pub use crate::distinct::DistinctExt;
pub use crate::element_at::ElementAtExt;
pub use crate::first::FirstExt;
pub use crate::ignore_elements::IgnoreElementsExt;
pub use crate::last::LastExt;
pub use crate::sample::SampleExt;
pub use crate::skip::SkipExt;
pub use crate::skip_last::SkipLastExt;
pub use crate::take::TakeExt;
