//! Fluent builder for a random population of boids and obstacles.
//!
//! # Usage
//!
//! ```rust
//! use boids_core::{Frame, SimRng};
//! use boids_model::PopulationBuilder;
//!
//! let mut rng = SimRng::new(42);
//! let population = PopulationBuilder::new(Frame::new(800.0, 600.0), 45, 10)
//!     .build(&mut rng);
//!
//! assert_eq!(population.boids.len(), 45);
//! assert_eq!(population.obstacles.len(), 10);
//! ```

use boids_core::{BoidId, Frame, ObstacleId, SimRng};

use crate::{Boid, BoidParams, DEFAULT_OBSTACLE_SIZE, Obstacle};

/// A full set of boids and obstacles.  The index in each `Vec` is the id,
/// so a system only accepts populations whose lists fit `u32` ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Population {
    pub boids:     Vec<Boid>,
    pub obstacles: Vec<Obstacle>,
}

impl Population {
    /// `true` if there are neither boids nor obstacles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boids.is_empty() && self.obstacles.is_empty()
    }

    /// Iterator over all `BoidId`s in ascending index order.
    pub fn boid_ids(&self) -> impl Iterator<Item = BoidId> + '_ {
        (0..self.boids.len()).map(|i| BoidId(i as u32))
    }

    /// Iterator over all `ObstacleId`s in ascending index order.
    pub fn obstacle_ids(&self) -> impl Iterator<Item = ObstacleId> + '_ {
        (0..self.obstacles.len()).map(|i| ObstacleId(i as u32))
    }
}

/// Fluent builder for a random [`Population`].
///
/// Building is a pure factory apart from the RNG draws: nothing else is
/// touched, and the caller decides whether to replace an existing population.
pub struct PopulationBuilder {
    frame:          Frame,
    boid_count:     usize,
    obstacle_count: usize,
    boid_params:    BoidParams,
    obstacle_size:  f64,
}

impl PopulationBuilder {
    /// Create a builder for `boid_count` boids and `obstacle_count` obstacles.
    pub fn new(frame: Frame, boid_count: usize, obstacle_count: usize) -> Self {
        Self {
            frame,
            boid_count,
            obstacle_count,
            boid_params:   BoidParams::default(),
            obstacle_size: DEFAULT_OBSTACLE_SIZE,
        }
    }

    pub fn boid_params(mut self, params: BoidParams) -> Self {
        self.boid_params = params;
        self
    }

    pub fn obstacle_size(mut self, size: f64) -> Self {
        self.obstacle_size = size;
        self
    }

    /// Draw all boids, then all obstacles, from `rng`.
    pub fn build(self, rng: &mut SimRng) -> Population {
        let boids = (0..self.boid_count)
            .map(|_| Boid::random(rng, self.frame, self.boid_params))
            .collect();
        let obstacles = (0..self.obstacle_count)
            .map(|_| Obstacle::random(rng, self.frame, self.obstacle_size))
            .collect();
        Population { boids, obstacles }
    }
}
