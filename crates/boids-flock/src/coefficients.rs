//! Behavior weights for the steering impulse.

use std::fmt;
use std::str::FromStr;

use crate::{FlockError, FlockResult};

/// One of the four steering behaviors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CoefficientKind {
    Alignment,
    Cohesion,
    Fear,
    Separation,
}

impl CoefficientKind {
    pub const ALL: [CoefficientKind; 4] = [
        CoefficientKind::Alignment,
        CoefficientKind::Cohesion,
        CoefficientKind::Fear,
        CoefficientKind::Separation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CoefficientKind::Alignment  => "alignment",
            CoefficientKind::Cohesion   => "cohesion",
            CoefficientKind::Fear       => "fear",
            CoefficientKind::Separation => "separation",
        }
    }
}

impl fmt::Display for CoefficientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoefficientKind {
    type Err = FlockError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> FlockResult<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| FlockError::UnknownCoefficient(s.to_owned()))
    }
}

/// Weights applied to the four steering vectors when summing the impulse.
///
/// Values are unconstrained reals: a negative weight inverts the behavior
/// (e.g. negative cohesion disperses the flock).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Coefficients {
    pub alignment:  f64,
    pub cohesion:   f64,
    pub fear:       f64,
    pub separation: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            alignment:  10.0,
            cohesion:   10.0,
            fear:       10.0,
            separation: 12.0,
        }
    }
}

impl Coefficients {
    pub fn get(&self, kind: CoefficientKind) -> f64 {
        match kind {
            CoefficientKind::Alignment  => self.alignment,
            CoefficientKind::Cohesion   => self.cohesion,
            CoefficientKind::Fear       => self.fear,
            CoefficientKind::Separation => self.separation,
        }
    }

    fn slot(&mut self, kind: CoefficientKind) -> &mut f64 {
        match kind {
            CoefficientKind::Alignment  => &mut self.alignment,
            CoefficientKind::Cohesion   => &mut self.cohesion,
            CoefficientKind::Fear       => &mut self.fear,
            CoefficientKind::Separation => &mut self.separation,
        }
    }

    /// Replace one weight.  Rejects NaN and infinities.
    pub fn set(&mut self, kind: CoefficientKind, value: f64) -> FlockResult<()> {
        check_finite(kind, value)?;
        *self.slot(kind) = value;
        Ok(())
    }

    /// Add `delta` to one weight and return the new value.
    pub fn adjust(&mut self, kind: CoefficientKind, delta: f64) -> FlockResult<f64> {
        let value = self.get(kind) + delta;
        self.set(kind, value)?;
        Ok(value)
    }

    pub fn validate(&self) -> FlockResult<()> {
        CoefficientKind::ALL
            .into_iter()
            .try_for_each(|kind| check_finite(kind, self.get(kind)))
    }
}

fn check_finite(kind: CoefficientKind, value: f64) -> FlockResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FlockError::NonFiniteCoefficient { name: kind.as_str(), value })
    }
}
