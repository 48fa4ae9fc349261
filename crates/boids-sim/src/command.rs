//! Commands an interactive front end feeds into the system.

use boids_core::{BoidId, ObstacleId};
use boids_flock::CoefficientKind;

use crate::TickStats;

/// One user action.  Dispatched by [`BoidSystem::apply`][crate::BoidSystem::apply].
///
/// With the `serde` feature commands (de)serialize as internally tagged
/// objects, e.g. `{"command": "add_boid", "x": 10.0, "y": 20.0}`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "command", rename_all = "snake_case"))]
pub enum Command {
    /// Replace the population with a fresh random one.
    Reset { boid_count: usize, obstacle_count: usize },

    /// Replace the population using the configured initial counts.
    ResetDefault,

    /// Insert a motionless boid.
    AddBoid { x: f64, y: f64 },

    /// Insert an obstacle.  The point is rounded to the integer grid.
    AddObstacle { x: f64, y: f64 },

    /// Add `delta` to one behavior weight.
    AdjustCoefficient { kind: CoefficientKind, delta: f64 },

    /// Replace one behavior weight.
    SetCoefficient { kind: CoefficientKind, value: f64 },

    /// Run one tick spanning `timestep` seconds.
    Advance { timestep: f64 },
}

/// What a successfully applied [`Command`] did.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    Reset { boid_count: usize, obstacle_count: usize },
    BoidAdded(BoidId),
    ObstacleAdded(ObstacleId),
    /// The new value of the changed weight.
    Coefficient { kind: CoefficientKind, value: f64 },
    Advanced(TickStats),
}
