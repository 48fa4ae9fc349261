//! The static hazard.

use boids_core::{Frame, SimRng, Vector2D};

use crate::Model;

/// Default side length of the drawn obstacle square.
pub const DEFAULT_OBSTACLE_SIZE: f64 = 16.0;

/// A point obstacle on the integer grid.
///
/// The position is rounded once at construction and never changes, so the
/// square's corners are computed up front.
#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    position: Vector2D,
    frame:    Frame,
    corners:  [Vector2D; 4],
}

impl Obstacle {
    /// An obstacle at `position`, wrapped into `frame` and rounded to the
    /// nearest grid point (re-wrapped in case rounding lands on the far edge).
    pub fn new(position: Vector2D, frame: Frame, size: f64) -> Self {
        let position = frame.wrap(frame.wrap(position).round());
        let low = (-size / 2.0).floor();
        let high = (size / 2.0).floor();
        let corners = [
            position + Vector2D::new(low, low),
            position + Vector2D::new(high, low),
            position + Vector2D::new(high, high),
            position + Vector2D::new(low, high),
        ];
        Self { position, frame, corners }
    }

    /// An obstacle at a random unit-disk point scaled by the frame extent.
    pub fn random(rng: &mut SimRng, frame: Frame, size: f64) -> Self {
        Self::new(rng.unit_disk() * frame.extent(), frame, size)
    }
}

impl Model for Obstacle {
    #[inline]
    fn position(&self) -> Vector2D {
        self.position
    }

    #[inline]
    fn frame(&self) -> Frame {
        self.frame
    }

    /// Lower-left, lower-right, upper-right, upper-left.
    fn coordinates(&self) -> Vec<Vector2D> {
        self.corners.to_vec()
    }
}
