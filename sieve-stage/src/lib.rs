// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The stage harness shared by every sieve operator.
//!
//! A stage reads an upstream stream of [`StreamItem`](sieve_core::StreamItem)s,
//! hands each item to an [`Operator`] and writes the results to a
//! [`Flow`](sieve_core::Flow). The harness takes care of:
//!
//! - error gating: upstream errors bypass the operator unless the stage
//!   intercepts them
//! - termination: once the operator answers `Break`, remaining upstream items
//!   are drained and dropped
//! - concurrency: items run inline or on one spawned task each
//! - completion: all work is joined, the flush item is emitted and the flow is
//!   closed exactly once
//!
//! A panic inside an operator or one of its background tasks is a contract
//! violation: it is logged with `error!` and the process aborts.

mod config;
mod context;
mod harness;
mod operator;
mod stage;

pub use self::config::{ConcurrencyMode, StageConfig};
pub use self::context::StageContext;
pub use self::operator::{Decision, Operator};
pub use self::stage::Stage;
pub use core::ops::ControlFlow;
