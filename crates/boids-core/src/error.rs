//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so geometry failures surface unchanged at the top.

use thiserror::Error;

use crate::Vector2D;

/// The error type for `boids-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A zero vector has no direction to rescale along.
    #[error("cannot resize {0}: zero magnitude has no direction")]
    UndefinedDirection(Vector2D),

    /// A polygon arity the batch builder cannot draw.
    #[error("unsupported polygon arity: {0} vertices")]
    UnsupportedArity(usize),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `boids-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
