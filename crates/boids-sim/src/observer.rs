//! System observer trait for progress reporting and data collection.

use boids_core::Tick;
use boids_flock::FlockRecord;
use boids_model::Boid;

use crate::TickStats;

/// Callbacks invoked by [`BoidSystem::run_ticks`][crate::BoidSystem::run_ticks]
/// at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust
/// use boids_core::Tick;
/// use boids_sim::{SystemObserver, TickStats};
///
/// struct ProgressPrinter { interval: u64 }
///
/// impl SystemObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} of {} boids flocking", stats.flocked_count, stats.boid_count);
///         }
///     }
/// }
/// ```
pub trait SystemObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the post-update statistics.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &TickStats) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// `flocks[i]` is the flock record of `boids[i]` for this tick.
    fn on_snapshot(&mut self, _tick: Tick, _boids: &[Boid], _flocks: &[FlockRecord]) {}

    /// Called once after the final tick of a `run_ticks` call.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SystemObserver`] that does nothing.
pub struct NoopObserver;

impl SystemObserver for NoopObserver {}
