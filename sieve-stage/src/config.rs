// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::num::NonZeroUsize;
use sieve_core::DEFAULT_FLOW_CAPACITY;

/// How a stage dispatches items to its operator.
///
/// # Ordering
///
/// Only [`Sequential`](Self::Sequential) keeps execution and emission in arrival
/// order. Under a fan-out mode every item is still handled exactly once, but
/// operators that keep order-dependent state (distinct, skip-last) see items in
/// task scheduling order, and emissions of concurrent items may interleave.
/// Such operators are order-correct in sequential mode only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConcurrencyMode {
    /// Each item is handled inline by the harness loop, one after the other.
    #[default]
    Sequential,
    /// One spawned task per item, for operators that mostly wait.
    FanOutIo,
    /// One spawned task per item, for operators that mostly compute.
    ///
    /// Scheduled exactly like [`FanOutIo`](Self::FanOutIo); the two are kept
    /// apart so stages can state their intent.
    FanOutCompute,
}

impl ConcurrencyMode {
    /// Returns `true` for the modes that spawn a task per item.
    pub const fn is_fan_out(self) -> bool {
        matches!(self, Self::FanOutIo | Self::FanOutCompute)
    }
}

/// Settings a stage is built with.
///
/// Every field is optional in spirit: `StageConfig::default()` describes a stage
/// that lets its operator pick the concurrency mode, forwards upstream errors
/// untouched, buffers [`DEFAULT_FLOW_CAPACITY`] items downstream and fans out
/// without a limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageConfig {
    /// Name used in log output. Defaults to the operator's name.
    pub name: Option<String>,
    /// Dispatch mode. Defaults to the operator's preference.
    pub concurrency: Option<ConcurrencyMode>,
    /// When `false`, error items skip the operator and are forwarded as they are.
    pub intercept_errors: bool,
    /// Capacity of the downstream flow.
    pub capacity: usize,
    /// Upper bound on concurrently running fan-out tasks.
    pub max_in_flight: Option<NonZeroUsize>,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            name: None,
            concurrency: None,
            intercept_errors: false,
            capacity: DEFAULT_FLOW_CAPACITY,
            max_in_flight: None,
        }
    }
}

impl StageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency = Some(mode);
        self
    }

    #[must_use]
    pub fn with_intercept_errors(mut self, intercept: bool) -> Self {
        self.intercept_errors = intercept;
        self
    }

    /// Sets the downstream capacity; zero is raised to one.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    #[must_use]
    pub fn with_max_in_flight(mut self, limit: NonZeroUsize) -> Self {
        self.max_in_flight = Some(limit);
        self
    }
}
