//! Fluent builder for constructing a [`BoidSystem`].

use boids_core::SimRng;
use boids_model::{Model, Population};
use tracing::info;

use crate::config::check_capacity;
use crate::{BoidSystem, SimConfig, SimError, SimResult};

/// Fluent builder for [`BoidSystem`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                          |
/// |--------------------|--------------------------------------------------|
/// | `.seed(s)`         | `config.seed`, else a seed drawn from OS entropy |
/// | `.population(p)`   | Random, `config.boid_count`/`obstacle_count`     |
///
/// # Example
///
/// ```rust
/// use boids_sim::{NoopObserver, SimConfig, SystemBuilder};
///
/// let mut system = SystemBuilder::new(SimConfig::default())
///     .seed(42)
///     .build()?;
/// system.run_ticks(10, 1.0 / 60.0, &mut NoopObserver)?;
/// assert_eq!(system.boids().len(), 45);
/// # Ok::<(), boids_sim::SimError>(())
/// ```
pub struct SystemBuilder {
    config:     SimConfig,
    seed:       Option<u64>,
    population: Option<Population>,
}

impl SystemBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, seed: None, population: None }
    }

    /// Override `config.seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start from an explicit population instead of a random one.
    ///
    /// Every boid and obstacle must live in `config.frame`.
    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    /// Validate inputs, seed the RNG and return a ready [`BoidSystem`].
    pub fn build(self) -> SimResult<BoidSystem> {
        self.config.validate()?;

        let mut rng = match self.seed.or(self.config.seed) {
            Some(seed) => SimRng::new(seed),
            None => SimRng::from_entropy(),
        };

        let population = match self.population {
            Some(p) => {
                check_population(&self.config, &p)?;
                p
            }
            None => self
                .config
                .population_builder(self.config.boid_count, self.config.obstacle_count)
                .build(&mut rng),
        };

        info!(
            seed = rng.seed(),
            boids = population.boids.len(),
            obstacles = population.obstacles.len(),
            frame = %self.config.frame,
            "boid system built"
        );

        Ok(BoidSystem::from_parts(self.config, rng, population))
    }
}

/// Reject a population the system cannot hold: too many models for `u32`
/// ids, or models living on another frame.
pub(crate) fn check_population(config: &SimConfig, population: &Population) -> SimResult<()> {
    check_capacity("boid", population.boids.len())?;
    check_capacity("obstacle", population.obstacles.len())?;
    let expected = config.frame;
    let boid_frames = population.boids.iter().map(|b| ("boid", b.frame()));
    let obstacle_frames = population.obstacles.iter().map(|o| ("obstacle", o.frame()));
    for (what, got) in boid_frames.chain(obstacle_frames) {
        if got != expected {
            return Err(SimError::FrameMismatch { expected, got, what });
        }
    }
    Ok(())
}
