//! Per-tick summary statistics.

use boids_core::Tick;
use boids_flock::FlockRecord;
use boids_model::Boid;

/// Aggregates over the population after a tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickStats {
    /// The tick these stats describe.
    pub tick: Tick,
    /// Simulated seconds after the tick.
    pub elapsed_secs: f64,
    pub boid_count: usize,
    pub obstacle_count: usize,
    /// Boids with at least one neighbor in their last flock.
    pub flocked_count: usize,
    /// Mean boid speed; 0 for an empty population.
    pub mean_speed: f64,
}

impl TickStats {
    pub(crate) fn collect(
        tick:           Tick,
        elapsed_secs:   f64,
        boids:          &[Boid],
        obstacle_count: usize,
        flocks:         &[FlockRecord],
    ) -> Self {
        let mean_speed = if boids.is_empty() {
            0.0
        } else {
            boids.iter().map(|b| b.velocity().magnitude()).sum::<f64>() / boids.len() as f64
        };
        Self {
            tick,
            elapsed_secs,
            boid_count: boids.len(),
            obstacle_count,
            flocked_count: flocks.iter().filter(|f| f.has_neighbors()).count(),
            mean_speed,
        }
    }

    /// Fraction of boids that had a neighbor, or `None` with no boids.
    pub fn flocked_fraction(&self) -> Option<f64> {
        (self.boid_count > 0).then(|| self.flocked_count as f64 / self.boid_count as f64)
    }
}
