//! Owned result of one flock computation.

use std::collections::BTreeMap;

use boids_core::{BoidId, ObstacleId, Vector2D};

/// What a [`Flock`][crate::Flock] leaves behind after its tick.
///
/// The system retains one record per boid until the next update so callers
/// can draw neighbor connections and inspect the last impulse.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlockRecord {
    /// The owning boid.
    pub boid: BoidId,
    /// Neighboring boids and their wrapped distances.
    pub neighbors: BTreeMap<BoidId, f64>,
    /// Obstacles in range and their wrapped distances.
    pub obstacles: BTreeMap<ObstacleId, f64>,
    /// The acceleration assigned to the owner, before clamping.
    pub impulse: Vector2D,
}

impl FlockRecord {
    #[inline]
    pub fn has_neighbors(&self) -> bool {
        !self.neighbors.is_empty()
    }

    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    #[inline]
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }
}
