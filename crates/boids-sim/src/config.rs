//! Run configuration.

use boids_core::Frame;
use boids_flock::Coefficients;
use boids_model::{BoidParams, DEFAULT_OBSTACLE_SIZE, PopulationBuilder};

use crate::{SimError, SimResult};

/// Frame used when none is configured.
pub const DEFAULT_FRAME: Frame = Frame::new(1200.0, 800.0);

/// Everything needed to build a [`BoidSystem`][crate::BoidSystem].
///
/// With the `serde` feature every field is optional on input; missing fields
/// take their [`Default`] value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Toroidal extent.  Fixed for the lifetime of the system.
    pub frame: Frame,

    /// Boids drawn for the initial population and by `reset_default`.
    pub boid_count: usize,

    /// Obstacles drawn for the initial population and by `reset_default`.
    pub obstacle_count: usize,

    /// Sensing radius shared by every flock.
    pub radius: f64,

    /// RNG seed.  `None` draws one from OS entropy; the drawn seed is logged
    /// and available from [`BoidSystem::seed`][crate::BoidSystem::seed].
    pub seed: Option<u64>,

    /// Initial behavior weights.
    pub coefficients: Coefficients,

    /// Limits applied to every boid, random or inserted.
    pub boid: BoidParams,

    /// Side length of the drawn obstacle square.
    pub obstacle_size: f64,

    /// Call `on_snapshot` every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frame:                 DEFAULT_FRAME,
            boid_count:            45,
            obstacle_count:        10,
            radius:                150.0,
            seed:                  None,
            coefficients:          Coefficients::default(),
            boid:                  BoidParams::default(),
            obstacle_size:         DEFAULT_OBSTACLE_SIZE,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// Reject configurations the tick loop cannot run with.
    pub fn validate(&self) -> SimResult<()> {
        self.frame.validate().map_err(SimError::from_core_config)?;
        self.boid.validate().map_err(SimError::from_core_config)?;
        check_capacity("boid", self.boid_count)?;
        check_capacity("obstacle", self.obstacle_count)?;
        for (name, value) in [("radius", self.radius), ("obstacle_size", self.obstacle_size)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::Config(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        self.coefficients
            .validate()
            .map_err(|e| SimError::Config(e.to_string()))
    }

    /// A population builder drawing `boid_count` boids and `obstacle_count`
    /// obstacles with this config's frame, limits and sizes.
    pub fn population_builder(&self, boid_count: usize, obstacle_count: usize) -> PopulationBuilder {
        PopulationBuilder::new(self.frame, boid_count, obstacle_count)
            .boid_params(self.boid)
            .obstacle_size(self.obstacle_size)
    }
}

/// Ids are `u32` indices, so a list holds at most `u32::MAX + 1` models.
pub(crate) fn check_capacity(what: &'static str, count: usize) -> SimResult<()> {
    match count.checked_sub(1).map(u32::try_from) {
        Some(Err(_)) => Err(SimError::CapacityExceeded { what, count }),
        _ => Ok(()),
    }
}
