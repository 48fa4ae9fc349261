//! `boids-core` — foundational types for the boids simulation.
//!
//! This crate is a dependency of every other `boids-*` crate.  It has no
//! `boids-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`vector`]   | `Vector2D`, `mean`, `floor_mod`                          |
//! | [`frame`]    | `Frame` — toroidal extent, wrap and shortest displacement |
//! | [`ids`]      | `BoidId`, `ObstacleId`                                   |
//! | [`time`]     | `Tick`, `SimClock`                                       |
//! | [`rng`]      | `SimRng`                                                 |
//! | [`error`]    | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod frame;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vector;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use frame::Frame;
pub use ids::{BoidId, ObstacleId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
pub use vector::{EQ_TOLERANCE, Vector2D, floor_mod, mean};
