use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlockError {
    #[error("unknown coefficient {0:?} (expected alignment, cohesion, fear or separation)")]
    UnknownCoefficient(String),

    #[error("coefficient {name} must be finite, got {value}")]
    NonFiniteCoefficient { name: &'static str, value: f64 },
}

pub type FlockResult<T> = Result<T, FlockError>;
