//! Polygon classification for batched drawing.
//!
//! A renderer submits every model of one kind in a single batch, so it needs
//! to know up front whether the vertex list describes triangles or quads.

use boids_core::{CoreError, CoreResult};

/// The primitive a model's `coordinates()` describe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PolygonKind {
    Triangle,
    Quad,
}

impl PolygonKind {
    /// Classify a polygon by vertex count.
    ///
    /// # Errors
    /// [`CoreError::UnsupportedArity`] for anything but 3 or 4 vertices.
    pub fn from_vertex_count(count: usize) -> CoreResult<Self> {
        match count {
            3 => Ok(PolygonKind::Triangle),
            4 => Ok(PolygonKind::Quad),
            n => Err(CoreError::UnsupportedArity(n)),
        }
    }

    #[inline]
    pub fn vertex_count(self) -> usize {
        match self {
            PolygonKind::Triangle => 3,
            PolygonKind::Quad     => 4,
        }
    }
}
