//! `boids-sim` — the boid system and its tick loop.
//!
//! # Two-phase tick loop
//!
//! ```text
//! update(timestep):
//!   ① Impulses  — for every boid build a Flock against the shared
//!                 FlockContext snapshot and reduce it to a FlockRecord
//!                 (parallel with the `parallel` feature).
//!   ② Apply     — for each record in ascending BoidId order:
//!                   boid.acceleration = record.impulse   (clamped)
//!                   boid.update(timestep)                (velocity, then position)
//!   ③ Clock     — advance one tick of `timestep` seconds.
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`config`]   | `SimConfig`, `DEFAULT_FRAME`                              |
//! | [`builder`]  | `SystemBuilder`                                           |
//! | [`system`]   | `BoidSystem`                                              |
//! | [`command`]  | `Command`, `CommandOutcome`                               |
//! | [`view`]     | `ModelBatch`, `Connection`, `ConnectionKind`, `Segment`   |
//! | [`observer`] | `SystemObserver`, `NoopObserver`                          |
//! | [`stats`]    | `TickStats`                                               |
//! | [`error`]    | `SimError`, `SimResult<T>`                                |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the impulse phase on Rayon's thread pool.         |
//! | `serde`    | `SimConfig`, `Command` and `TickStats` (de)serialize.  |
//!
//! # Quick-start
//!
//! ```rust
//! use boids_flock::CoefficientKind;
//! use boids_sim::{BoidSystem, Command, SimConfig};
//!
//! let mut system = BoidSystem::new(SimConfig { seed: Some(7), ..SimConfig::default() })?;
//! system.apply(Command::AddBoid { x: 100.0, y: 100.0 })?;
//! system.apply(Command::AdjustCoefficient { kind: CoefficientKind::Fear, delta: 1.0 })?;
//! system.apply(Command::Advance { timestep: 1.0 / 60.0 })?;
//! assert_eq!(system.boids().len(), 46);
//! assert_eq!(system.coefficient(CoefficientKind::Fear), 11.0);
//! # Ok::<(), boids_sim::SimError>(())
//! ```

pub mod builder;
pub mod command;
pub mod config;
pub mod error;
pub mod observer;
pub mod stats;
pub mod system;
pub mod view;


pub use builder::SystemBuilder;
pub use command::{Command, CommandOutcome};
pub use config::{DEFAULT_FRAME, SimConfig};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SystemObserver};
pub use stats::TickStats;
pub use system::BoidSystem;
pub use view::{Connection, ConnectionKind, ModelBatch, Segment};
