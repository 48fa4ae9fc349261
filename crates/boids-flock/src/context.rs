//! Read-only tick snapshot shared by every flock built in one tick.

use boids_core::{BoidId, ObstacleId};
use boids_model::{Boid, Obstacle};

use crate::{Coefficients, Flock};

/// A read-only snapshot of the world as it stood at the start of a tick.
///
/// Built once per tick by the system and shared immutably by every
/// [`Flock`].  Nothing integrates motion while a context is alive, so every
/// flock of a tick sees the same pre-update positions and velocities.
#[derive(Copy, Clone, Debug)]
pub struct FlockContext<'a> {
    /// The full population, indexed by `BoidId`.  Ids are `u32`, so the
    /// slice holds at most `u32::MAX + 1` boids; the system enforces this on
    /// every insertion.
    pub boids: &'a [Boid],

    /// All obstacles, indexed by `ObstacleId`, within the same bound.
    pub obstacles: &'a [Obstacle],

    /// Sensing radius.  A model is a neighbor iff `0 < distance < radius`.
    pub radius: f64,

    pub coefficients: Coefficients,
}

impl<'a> FlockContext<'a> {
    #[inline]
    pub fn new(
        boids:        &'a [Boid],
        obstacles:    &'a [Obstacle],
        radius:       f64,
        coefficients: Coefficients,
    ) -> Self {
        Self { boids, obstacles, radius, coefficients }
    }

    /// `(id, boid)` pairs in ascending id order.
    pub fn boids_with_ids(&self) -> impl Iterator<Item = (BoidId, &'a Boid)> + 'a {
        self.boids.iter().enumerate().map(|(i, b)| (BoidId(i as u32), b))
    }

    /// `(id, obstacle)` pairs in ascending id order.
    pub fn obstacles_with_ids(&self) -> impl Iterator<Item = (ObstacleId, &'a Obstacle)> + 'a {
        self.obstacles.iter().enumerate().map(|(i, o)| (ObstacleId(i as u32), o))
    }

    /// Build the flock of boid `id`.  Returns `None` for an id outside the
    /// population.
    pub fn flock(&self, id: BoidId) -> Option<Flock<'a>> {
        self.boids.get(id.index()).map(|boid| Flock::new(id, boid, *self))
    }
}
