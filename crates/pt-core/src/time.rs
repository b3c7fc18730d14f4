//! Simulated time model.
//!
//! Time is a monotonically increasing `Tick` counter measured in travel days.
//! There is no mapping to wall-clock time: a `SimClock` only moves when a
//! planner executes a trip, by exactly the number of days travelled.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulated day counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` days after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Days elapsed from `earlier` to `self`, clamped at zero.
    ///
    /// Islands may carry a `last_visited` stamped by a planner whose clock
    /// ran ahead of this one, so this never underflows.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// A planner's private simulated clock.
///
/// Starts at [`Tick::ZERO`] and is advanced only by trip execution.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self { current_tick: Tick::ZERO }
    }

    /// Advance the clock by `days`.
    #[inline]
    pub fn advance_by(&mut self, days: u64) {
        self.current_tick = self.current_tick.offset(days);
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.current_tick
    }

    /// Break elapsed time into (weeks, days) for human-readable logging.
    pub fn elapsed_weeks_days(&self) -> (u64, u64) {
        (self.current_tick.0 / 7, self.current_tick.0 % 7)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, d) = self.elapsed_weeks_days();
        write!(f, "{} (week {} day {})", self.current_tick, w, d)
    }
}
