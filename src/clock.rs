//! Time source for frame pacing.
//!
//! Animations never sleep through `embassy_time` directly; they go
//! through [`FrameClock`] so tests can drive them deterministically with
//! [`ManualClock`] while firmware uses [`EmbassyClock`].

use core::cell::Cell;

use embassy_time::Duration;

/// Monotonic time plus an awaitable sleep.
pub trait FrameClock {
    /// Time since some fixed origin.
    fn now(&self) -> Duration;

    /// Wait for `duration` to elapse.
    async fn sleep(&mut self, duration: Duration);
}

/// [`FrameClock`] backed by the `embassy_time` driver.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

impl FrameClock for EmbassyClock {
    fn now(&self) -> Duration {
        Duration::from_ticks(embassy_time::Instant::now().as_ticks())
    }

    async fn sleep(&mut self, duration: Duration) {
        embassy_time::Timer::after(duration).await;
    }
}

/// Deterministic [`FrameClock`] for tests: `sleep` returns immediately
/// after advancing the reported time, and every requested duration is
/// recorded as a count and a running total.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
    sleeps: usize,
    slept_total: Duration,
}

impl ManualClock {
    /// A clock starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times [`sleep`](FrameClock::sleep) has been awaited.
    #[must_use]
    pub fn sleeps(&self) -> usize {
        self.sleeps
    }

    /// Sum of all requested sleep durations.
    #[must_use]
    pub fn slept_total(&self) -> Duration {
        self.slept_total
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    async fn sleep(&mut self, duration: Duration) {
        self.now.set(self.now.get() + duration);
        self.sleeps += 1;
        self.slept_total += duration;
    }
}
