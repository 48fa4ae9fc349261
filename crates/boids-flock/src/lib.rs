//! `boids-flock` — neighbor discovery and the steering impulse.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                   |
//! |------------------|------------------------------------------------------------|
//! | [`coefficients`] | `Coefficients`, `CoefficientKind`                           |
//! | [`context`]      | `FlockContext<'a>` — read-only tick snapshot               |
//! | [`flock`]        | `Flock<'a>`, `get_neighbors`                               |
//! | [`record`]       | `FlockRecord` — owned per-boid result kept for rendering   |
//! | [`error`]        | `FlockError`, `FlockResult<T>`                             |
//!
//! # Design notes
//!
//! The two-phase tick loop in boids-sim works as follows:
//!
//! 1. **Impulse phase** (optionally parallel): for every boid, build a
//!    `Flock` from the shared `&FlockContext` and reduce it to a
//!    `FlockRecord`.  No mutation.
//!
//! 2. **Apply phase** (sequential, ascending `BoidId`): assign each record's
//!    impulse as the boid's acceleration and integrate by the timestep.
//!
//! A `Flock` caches its derived vectors in `OnceCell`s and is therefore not
//! `Sync`; it never leaves the closure that builds it.  `FlockRecord` is
//! plain owned data and crosses threads freely.

pub mod coefficients;
pub mod context;
pub mod error;
pub mod flock;
pub mod record;

#[cfg(test)]
mod tests;

pub use coefficients::{CoefficientKind, Coefficients};
pub use context::FlockContext;
pub use error::{FlockError, FlockResult};
pub use flock::{Flock, get_neighbors};
pub use record::FlockRecord;
