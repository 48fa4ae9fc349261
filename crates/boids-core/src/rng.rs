//! Simulation-level deterministic RNG.
//!
//! The system owns exactly one `SimRng`; every random population, boid and
//! obstacle is drawn from it in a fixed order, so the same seed always
//! reproduces the same run.  There is no process-wide RNG state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Vector2D;

/// Seedable RNG owned by the simulation system.
pub struct SimRng {
    seed: u64,
    inner: SmallRng,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng { seed, inner: SmallRng::seed_from_u64(seed) }
    }

    /// Seed from OS entropy.  The drawn seed is kept so it can be logged and
    /// replayed with [`SimRng::new`].
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.inner.gen_range(range)
    }

    /// A random vector in the unit disk; see [`Vector2D::random`].
    #[inline]
    pub fn unit_disk(&mut self) -> Vector2D {
        Vector2D::random(&mut self.inner)
    }
}
