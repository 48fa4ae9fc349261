//! `boids-model` — the entities that live on the toroidal frame.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`model`]     | `Model` trait — wrap-aware distance, displacement, image   |
//! | [`boid`]      | `Boid` (moving, accelerating agent), `BoidParams`          |
//! | [`obstacle`]  | `Obstacle` (static point hazard)                           |
//! | [`shape`]     | `PolygonKind` — triangle / quad classification for drawing |
//! | [`builder`]   | `PopulationBuilder`, `Population`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on parameter types.      |

pub mod boid;
pub mod builder;
pub mod model;
pub mod obstacle;
pub mod shape;


pub use boid::{Boid, BoidParams};
pub use builder::{Population, PopulationBuilder};
pub use model::Model;
pub use obstacle::{DEFAULT_OBSTACLE_SIZE, Obstacle};
pub use shape::PolygonKind;
