//! The toroidal frame every model lives in.
//!
//! Both axes wrap: leaving through the right edge re-enters on the left, and
//! likewise vertically.  All wrap-aware geometry (normalisation, shortest
//! displacement) is computed here so that models only need to carry a copy
//! of their `Frame`.

use std::fmt;

use crate::{CoreError, CoreResult, Vector2D};

/// Rectangular extent `[0, width) × [0, height)` with periodic boundaries.
///
/// `Frame` is `Copy` and fixed for the lifetime of a simulation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub width: f64,
    pub height: f64,
}

impl Frame {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Reject extents that would make wrapping meaningless.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::Config(format!(
                    "frame {name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// The extent as a vector `(width, height)`.
    #[inline]
    pub fn extent(&self) -> Vector2D {
        Vector2D::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vector2D {
        self.extent() / 2.0
    }

    /// Upper bound on any wrap-aware distance inside this frame.
    #[inline]
    pub fn half_diagonal(&self) -> f64 {
        (self.width / 2.0).hypot(self.height / 2.0)
    }

    /// `true` if `point` lies in `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, point: Vector2D) -> bool {
        (0.0..self.width).contains(&point.x()) && (0.0..self.height).contains(&point.y())
    }

    /// Normalise `point` into the frame.
    ///
    /// Floored modulo can round up to exactly the extent for tiny negative
    /// inputs (`-1e-20 % 40 == 40`); such results fold back to `0`.
    pub fn wrap(&self, point: Vector2D) -> Vector2D {
        let wrapped = point % self.extent();
        let fold = |v: f64, extent: f64| if v >= extent { 0.0 } else { v };
        Vector2D::new(fold(wrapped.x(), self.width), fold(wrapped.y(), self.height))
    }

    /// Shortest displacement from `from` to `to` under periodic boundaries.
    ///
    /// Per axis the raw delta is kept unless it spans more than half the
    /// extent, in which case one extent is subtracted in the delta's
    /// direction.
    pub fn displacement(&self, from: Vector2D, to: Vector2D) -> Vector2D {
        let delta = to - from;
        let shortest = |d: f64, extent: f64| {
            if (2.0 * d).abs() > extent {
                d - extent.copysign(d)
            } else {
                d
            }
        };
        Vector2D::new(shortest(delta.x(), self.width), shortest(delta.y(), self.height))
    }

    #[inline]
    pub fn distance(&self, from: Vector2D, to: Vector2D) -> f64 {
        self.displacement(from, to).magnitude()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.width, self.height)
    }
}
