// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{ConcurrencyMode, StageContext};
use async_trait::async_trait;
use core::ops::ControlFlow;
use sieve_core::StreamItem;
use std::sync::Arc;

/// What an operator asks of the harness after handling one item.
///
/// `Continue(())` keeps the stage running. `Break(())` sets the stage's
/// termination flag: the harness drains the rest of upstream without
/// dispatching it, then flushes and closes.
pub type Decision = ControlFlow<()>;

/// The per-item behavior of a stage.
///
/// The harness owns the loop, the concurrency and the completion protocol; an
/// operator only decides what to do with one item. State shared between items
/// lives inside the operator and must be safe to touch from several fan-out
/// tasks at once.
///
/// # Example
///
/// ```
/// use sieve_stage::{Decision, Operator, StageContext};
/// use sieve_core::StreamItem;
/// use std::ops::ControlFlow;
/// use std::sync::Arc;
///
/// struct Doubler;
///
/// #[async_trait::async_trait]
/// impl Operator<i32> for Doubler {
///     fn name(&self) -> &'static str {
///         "doubler"
///     }
///
///     async fn on_item(
///         &self,
///         item: StreamItem<i32>,
///         _arrival: usize,
///         ctx: &Arc<StageContext<i32>>,
///     ) -> Decision {
///         match item {
///             StreamItem::Value(v) => ctx.emit_value(v * 2).await,
///             StreamItem::Error(e) => ctx.emit(StreamItem::Error(e)).await,
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Operator<T>: Send + Sync + 'static
where
    T: Send + 'static,
{
    /// Short name used in log output when the stage is not given one.
    fn name(&self) -> &'static str;

    /// Dispatch mode used when the stage does not set one.
    fn default_concurrency(&self) -> ConcurrencyMode {
        ConcurrencyMode::Sequential
    }

    /// Handles one item. Errors only reach this method on stages that
    /// intercept errors.
    ///
    /// `arrival` is the zero-based position of `item` among the items
    /// dispatched to this operator, assigned on the harness loop in upstream
    /// order. Under a fan-out mode calls may run in any order, but `arrival`
    /// still reflects the order items were read.
    async fn on_item(
        &self,
        item: StreamItem<T>,
        arrival: usize,
        ctx: &Arc<StageContext<T>>,
    ) -> Decision;
}
