//! Plain data row types written by output backends.

use boids_core::{BoidId, Tick};
use boids_flock::FlockRecord;
use boids_model::{Boid, Model};
use boids_sim::TickStats;

/// One boid's kinematic state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoidSnapshotRow {
    pub tick:      u64,
    pub boid_id:   u32,
    pub x:         f64,
    pub y:         f64,
    pub vx:        f64,
    pub vy:        f64,
    pub ax:        f64,
    pub ay:        f64,
    /// Boids sensed in this tick's flock.
    pub neighbors: u32,
    /// Obstacles sensed in this tick's flock.
    pub obstacles: u32,
}

impl BoidSnapshotRow {
    /// `flock` is `None` for a boid inserted since the last tick.
    pub fn new(tick: Tick, id: BoidId, boid: &Boid, flock: Option<&FlockRecord>) -> Self {
        let position = boid.position();
        let velocity = boid.velocity();
        let acceleration = boid.acceleration();
        Self {
            tick:      tick.0,
            boid_id:   id.0,
            x:         position.x(),
            y:         position.y(),
            vx:        velocity.x(),
            vy:        velocity.y(),
            ax:        acceleration.x(),
            ay:        acceleration.y(),
            neighbors: flock.map_or(0, |f| f.neighbor_count() as u32),
            obstacles: flock.map_or(0, |f| f.obstacle_count() as u32),
        }
    }
}

/// Summary statistics for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub elapsed_secs:   f64,
    pub boid_count:     u64,
    pub obstacle_count: u64,
    pub flocked_count:  u64,
    pub mean_speed:     f64,
}

impl From<&TickStats> for TickSummaryRow {
    fn from(stats: &TickStats) -> Self {
        Self {
            tick:           stats.tick.0,
            elapsed_secs:   stats.elapsed_secs,
            boid_count:     stats.boid_count as u64,
            obstacle_count: stats.obstacle_count as u64,
            flocked_count:  stats.flocked_count as u64,
            mean_speed:     stats.mean_speed,
        }
    }
}
