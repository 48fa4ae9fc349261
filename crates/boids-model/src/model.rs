//! The `Model` trait — anything positioned on the toroidal frame.

use boids_core::{Frame, Vector2D};

/// An entity with a position inside a [`Frame`].
///
/// Implementors keep `position()` normalised into
/// `[0, width) × [0, height)`.  Every distance query goes through the frame,
/// so two models always see each other along the shortest wrapped path.
pub trait Model {
    /// Current position, already wrapped into the frame.
    fn position(&self) -> Vector2D;

    /// The frame this model lives in.
    fn frame(&self) -> Frame;

    /// Polygon vertices used to draw the model, in winding order.
    fn coordinates(&self) -> Vec<Vector2D>;

    /// Shortest displacement from `self` to `other`.
    fn displacement<M: Model + ?Sized>(&self, other: &M) -> Vector2D {
        self.frame().displacement(self.position(), other.position())
    }

    /// Wrap-aware Euclidean distance to `other`.
    fn distance<M: Model + ?Sized>(&self, other: &M) -> f64 {
        self.displacement(other).magnitude()
    }

    /// The copy of `self` nearest to `other`, in `other`'s coordinates.
    ///
    /// Equal to `self.position()` unless the shortest path between the two
    /// crosses a frame edge.  Drawing a line from `other` to this point
    /// stays continuous across the wrap.
    fn get_image<M: Model + ?Sized>(&self, other: &M) -> Vector2D {
        other.position() + other.displacement(self)
    }
}
