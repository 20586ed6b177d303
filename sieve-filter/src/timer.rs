// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::future::Future;
use core::ops::{Add, Sub};
use core::time::Duration;
use std::fmt::Debug;

/// Clock used by the time-driven operators.
pub trait Timer: Clone + Send + Sync + Debug + 'static {
    type Sleep: Future<Output = ()> + Send;

    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    /// Creates a future that completes after `duration`.
    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;
}

#[cfg(feature = "runtime-tokio")]
pub use self::tokio_timer::TokioTimer;

#[cfg(feature = "runtime-tokio")]
mod tokio_timer {
    use super::Timer;
    use std::time::Duration;
    use tokio::time::{sleep, Instant, Sleep};

    /// [`Timer`] backed by `tokio::time`, so paused test clocks drive it too.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct TokioTimer;

    impl Timer for TokioTimer {
        type Sleep = Sleep;

        type Instant = Instant;

        fn sleep_future(&self, duration: Duration) -> Self::Sleep {
            sleep(duration)
        }

        fn now(&self) -> Self::Instant {
            Instant::now()
        }
    }
}
