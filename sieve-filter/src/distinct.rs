// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Distinct operator that suppresses every repeat of an already seen item.
//!
//! Items are compared by a textual fingerprint, not by structural equality:
//! two items that render to the same string are duplicates even if their types
//! or internal representations differ. [`DistinctExt::distinct`] uses the
//! item's `Display` output; [`DistinctExt::distinct_by`] takes any fingerprint
//! function.

use async_trait::async_trait;
use core::fmt::Display;
use core::marker::PhantomData;
use futures::Stream;
use parking_lot::Mutex;
use sieve_core::{trace, Flow, StreamItem};
use sieve_stage::{ControlFlow, Decision, Operator, Stage, StageContext};
use std::collections::HashSet;
use std::sync::Arc;

/// Extension trait providing the `distinct` operators for streams.
pub trait DistinctExt<T>: Stream<Item = StreamItem<T>> + Sized
where
    T: Send + 'static,
{
    /// Emits each item the first time its `Display` rendering is seen.
    ///
    /// Output keeps first-occurrence order in the default sequential mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sieve_filter::DistinctExt;
    /// use sieve_core::{IntoStreamItems, StreamItem};
    /// use futures::{stream, StreamExt};
    ///
    /// # #[tokio::main]
    /// # async fn main() {
    /// let unique: Vec<i32> = stream::iter([1, 8, 9, 10, 1, 8, 8])
    ///     .into_stream_items()
    ///     .distinct()
    ///     .map(StreamItem::unwrap)
    ///     .collect()
    ///     .await;
    ///
    /// assert_eq!(unique, vec![1, 8, 9, 10]);
    /// # }
    /// ```
    fn distinct(self) -> Flow<T>
    where
        T: Display;

    /// Emits each item the first time `fingerprint` maps it to a new string.
    fn distinct_by<F>(self, fingerprint: F) -> Flow<T>
    where
        F: Fn(&T) -> String + Send + Sync + 'static;
}

impl<S, T> DistinctExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Send + 'static,
{
    fn distinct(self) -> Flow<T>
    where
        T: Display,
    {
        Stage::new(self).run(Distinct::new())
    }

    fn distinct_by<F>(self, fingerprint: F) -> Flow<T>
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Stage::new(self).run(Distinct::by(fingerprint))
    }
}

/// Fingerprints of values and of intercepted errors never collide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Fingerprint {
    Value(String),
    Error(String),
}

/// Operator behind [`DistinctExt::distinct`] and [`DistinctExt::distinct_by`].
pub struct Distinct<T, F> {
    fingerprint: F,
    seen: Mutex<HashSet<Fingerprint>>,
    _item: PhantomData<fn(&T)>,
}

impl<T: Display> Distinct<T, fn(&T) -> String> {
    pub fn new() -> Self {
        Self::by(ToString::to_string)
    }
}

impl<T: Display> Default for Distinct<T, fn(&T) -> String> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> Distinct<T, F>
where
    F: Fn(&T) -> String,
{
    pub fn by(fingerprint: F) -> Self {
        Self {
            fingerprint,
            seen: Mutex::new(HashSet::new()),
            _item: PhantomData,
        }
    }

    fn fingerprint_of(&self, item: &StreamItem<T>) -> Fingerprint {
        match item {
            StreamItem::Value(value) => Fingerprint::Value((self.fingerprint)(value)),
            StreamItem::Error(e) => Fingerprint::Error(e.to_string()),
        }
    }
}

impl<T, F> std::fmt::Debug for Distinct<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Distinct")
            .field("seen", &self.seen.lock().len())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl<T, F> Operator<T> for Distinct<T, F>
where
    T: Send + 'static,
    F: Fn(&T) -> String + Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        "distinct"
    }

    async fn on_item(
        &self,
        item: StreamItem<T>,
        _arrival: usize,
        ctx: &Arc<StageContext<T>>,
    ) -> Decision {
        let key = self.fingerprint_of(&item);
        if !self.seen.lock().insert(key) {
            trace!("stage {}: duplicate dropped", ctx.name());
            return ControlFlow::Continue(());
        }
        ctx.emit(item).await
    }
}
