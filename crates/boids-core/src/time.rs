//! Simulation time model.
//!
//! # Design
//!
//! Each call of the system's `update(timestep)` is one `Tick`.  The driving
//! loop chooses the timestep (usually the wall-clock time since the last
//! frame), so ticks are not evenly spaced in simulated time; `SimClock`
//! therefore keeps both the integer tick count and the accumulated
//! simulated seconds.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
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

/// Tick counter plus accumulated simulated time.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick, advanced once per `update`.
    pub current_tick: Tick,
    /// Simulated seconds since tick 0 (sum of all timesteps).
    pub elapsed_secs: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick spanning `timestep` seconds.
    #[inline]
    pub fn advance(&mut self, timestep: f64) {
        self.current_tick = self.current_tick + 1;
        self.elapsed_secs += timestep;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} s)", self.current_tick, self.elapsed_secs)
    }
}
