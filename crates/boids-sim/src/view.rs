//! Render-facing views: polygon batches and neighbor connection lines.
//!
//! Nothing here draws; these are the vertex lists a renderer consumes.

use boids_core::{CoreError, Vector2D};
use boids_model::{Model, PolygonKind};

use crate::SimResult;

// ── Polygon batches ───────────────────────────────────────────────────────────

/// The polygons of many models flattened into one vertex list.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelBatch {
    pub kind:     PolygonKind,
    /// `kind.vertex_count()` consecutive vertices per model, in model order.
    pub vertices: Vec<Vector2D>,
}

impl ModelBatch {
    /// Flatten `models` into a batch.
    ///
    /// The first model decides the polygon kind.  Returns `Ok(None)` for an
    /// empty list and [`CoreError::UnsupportedArity`] when any model has a
    /// vertex count other than 3 or 4, or one that differs from the first.
    pub fn from_models<'m, M, I>(models: I) -> SimResult<Option<Self>>
    where
        M: Model + 'm,
        I: IntoIterator<Item = &'m M>,
    {
        let mut models = models.into_iter();
        let Some(first) = models.next() else {
            return Ok(None);
        };
        let mut vertices = first.coordinates();
        let kind = PolygonKind::from_vertex_count(vertices.len())?;
        for model in models {
            let coords = model.coordinates();
            if coords.len() != kind.vertex_count() {
                return Err(CoreError::UnsupportedArity(coords.len()).into());
            }
            vertices.extend(coords);
        }
        Ok(Some(Self { kind, vertices }))
    }

    /// Number of polygons in the batch.
    pub fn len(&self) -> usize {
        self.vertices.len() / self.kind.vertex_count()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The vertices of each polygon.
    pub fn polygons(&self) -> impl Iterator<Item = &[Vector2D]> {
        self.vertices.chunks_exact(self.kind.vertex_count())
    }
}

// ── Connections ───────────────────────────────────────────────────────────────

/// Which mapping of a flock to draw lines for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConnectionKind {
    Neighbors,
    Obstacles,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub start: Vector2D,
    pub end:   Vector2D,
}

/// A line from a boid to a model it senses.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Connection {
    /// Both ends lie on the same side of every frame edge.
    Direct(Segment),
    /// The shortest path crosses a frame edge.  The first segment runs from
    /// the boid to the other model's image, the second from the boid's image
    /// to the other model.
    Wrapped([Segment; 2]),
}

impl Connection {
    /// The connection from `owner` to `other` along the shortest wrapped path.
    pub fn between<A: Model, B: Model>(owner: &A, other: &B) -> Self {
        let owner_image = owner.get_image(other);
        if owner_image == owner.position() {
            Connection::Direct(Segment { start: owner.position(), end: other.position() })
        } else {
            Connection::Wrapped([
                Segment { start: owner.position(), end: other.get_image(owner) },
                Segment { start: owner_image, end: other.position() },
            ])
        }
    }

    pub fn is_wrapped(&self) -> bool {
        matches!(self, Connection::Wrapped(_))
    }

    pub fn segments(&self) -> &[Segment] {
        match self {
            Connection::Direct(segment) => std::slice::from_ref(segment),
            Connection::Wrapped(segments) => segments,
        }
    }
}
