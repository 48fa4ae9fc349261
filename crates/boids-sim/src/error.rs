use boids_core::{CoreError, Frame};
use boids_flock::FlockError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("timestep must be positive and finite, got {0}")]
    InvalidTimestep(f64),

    #[error("cannot place a model at non-finite point ({x}, {y})")]
    InvalidPoint { x: f64, y: f64 },

    #[error("{count} {what}s exceed the u32 id range")]
    CapacityExceeded { what: &'static str, count: usize },

    #[error("{what} frame {got} does not match system frame {expected}")]
    FrameMismatch {
        expected: Frame,
        got:      Frame,
        what:     &'static str,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Flock(#[from] FlockError),
}

impl SimError {
    /// Surface configuration failures from lower crates as [`SimError::Config`]
    /// and pass everything else through unchanged.
    pub(crate) fn from_core_config(err: CoreError) -> Self {
        match err {
            CoreError::Config(msg) => SimError::Config(msg),
            other => SimError::Core(other),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
