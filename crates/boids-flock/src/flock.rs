//! The per-boid steering computation.

use std::cell::OnceCell;
use std::collections::BTreeMap;

use boids_core::{BoidId, ObstacleId, Vector2D, mean};
use boids_model::{Boid, Model, Obstacle};

use crate::{FlockContext, FlockRecord};

/// Every candidate strictly inside `radius` of `owner`, keyed by id.
///
/// The lower bound is strict as well, so a candidate sharing the owner's
/// exact position (the owner itself included) is never a neighbor.
pub fn get_neighbors<'m, K, M, I>(owner: &Boid, candidates: I, radius: f64) -> BTreeMap<K, f64>
where
    K: Ord,
    M: Model + 'm,
    I: IntoIterator<Item = (K, &'m M)>,
{
    candidates
        .into_iter()
        .filter_map(|(key, model)| {
            let distance = owner.distance(model);
            (0.0 < distance && distance < radius).then_some((key, distance))
        })
        .collect()
}

/// One boid's view of its surroundings for a single tick.
///
/// Neighbor discovery runs eagerly in [`Flock::new`]; the derived vectors are
/// computed lazily and at most once.  Each accessor returns `None` when the
/// set it averages over is empty.
#[derive(Debug)]
pub struct Flock<'a> {
    id:        BoidId,
    boid:      &'a Boid,
    ctx:       FlockContext<'a>,
    neighbors: BTreeMap<BoidId, f64>,
    obstacles: BTreeMap<ObstacleId, f64>,

    average_velocity: OnceCell<Option<Vector2D>>,
    center_of_mass:   OnceCell<Option<Vector2D>>,
    alignment:        OnceCell<Option<Vector2D>>,
    cohesion:         OnceCell<Option<Vector2D>>,
    separation:       OnceCell<Option<Vector2D>>,
    fear:             OnceCell<Option<Vector2D>>,
}

impl<'a> Flock<'a> {
    pub fn new(id: BoidId, boid: &'a Boid, ctx: FlockContext<'a>) -> Self {
        let neighbors = get_neighbors(boid, ctx.boids_with_ids(), ctx.radius);
        let obstacles = get_neighbors(boid, ctx.obstacles_with_ids(), ctx.radius);
        Self {
            id,
            boid,
            ctx,
            neighbors,
            obstacles,
            average_velocity: OnceCell::new(),
            center_of_mass:   OnceCell::new(),
            alignment:        OnceCell::new(),
            cohesion:         OnceCell::new(),
            separation:       OnceCell::new(),
            fear:             OnceCell::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> BoidId {
        self.id
    }

    #[inline]
    pub fn boid(&self) -> &'a Boid {
        self.boid
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.ctx.radius
    }

    #[inline]
    pub fn neighbors(&self) -> &BTreeMap<BoidId, f64> {
        &self.neighbors
    }

    #[inline]
    pub fn obstacles(&self) -> &BTreeMap<ObstacleId, f64> {
        &self.obstacles
    }

    fn neighbor_boids(&self) -> impl Iterator<Item = (&'a Boid, f64)> {
        let boids = self.ctx.boids;
        self.neighbors.iter().map(move |(id, &d)| (&boids[id.index()], d))
    }

    fn nearby_obstacles(&self) -> impl Iterator<Item = (&'a Obstacle, f64)> {
        let obstacles = self.ctx.obstacles;
        self.obstacles.iter().map(move |(id, &d)| (&obstacles[id.index()], d))
    }

    // ── Derived vectors ──────────────────────────────────────────────────

    pub fn average_velocity(&self) -> Option<Vector2D> {
        *self
            .average_velocity
            .get_or_init(|| mean(self.neighbor_boids().map(|(n, _)| n.velocity())))
    }

    /// Mean of the neighbors' images nearest to the owner.
    pub fn center_of_mass(&self) -> Option<Vector2D> {
        *self
            .center_of_mass
            .get_or_init(|| mean(self.neighbor_boids().map(|(n, _)| n.get_image(self.boid))))
    }

    pub fn alignment_vector(&self) -> Option<Vector2D> {
        *self
            .alignment
            .get_or_init(|| self.average_velocity().map(|v| self.steering_vector(v)))
    }

    pub fn cohesion_vector(&self) -> Option<Vector2D> {
        *self.cohesion.get_or_init(|| {
            self.center_of_mass()
                .map(|c| self.steering_vector(c - self.boid.position()))
        })
    }

    /// Steer along the mean of unit vectors pointing away from each neighbor.
    pub fn separation_vector(&self) -> Option<Vector2D> {
        *self.separation.get_or_init(|| {
            mean(self.neighbor_boids().map(|(n, d)| n.displacement(self.boid) / d))
                .map(|v| self.steering_vector(v))
        })
    }

    /// Separation computed over obstacles.
    pub fn fear_vector(&self) -> Option<Vector2D> {
        *self.fear.get_or_init(|| {
            mean(self.nearby_obstacles().map(|(o, d)| o.displacement(self.boid) / d))
                .map(|v| self.steering_vector(v))
        })
    }

    /// `desired` rescaled to the owner's top speed, minus its velocity.
    /// A zero `desired` has no direction and steers nowhere.
    pub fn steering_vector(&self, desired: Vector2D) -> Vector2D {
        match desired.resize(self.boid.max_velocity()) {
            Ok(desired) => desired - self.boid.velocity(),
            Err(_) => Vector2D::ZERO,
        }
    }

    /// The weighted sum of the steering vectors.
    ///
    /// The boid terms are added only when there are neighbors, and the fear
    /// term only when there are obstacles in range; with neither the impulse
    /// is zero.
    pub fn impulse(&self) -> Vector2D {
        let c = &self.ctx.coefficients;
        let mut impulse = Vector2D::ZERO;
        if let (Some(a), Some(h), Some(s)) =
            (self.alignment_vector(), self.cohesion_vector(), self.separation_vector())
        {
            impulse += c.alignment * a;
            impulse += c.cohesion * h;
            impulse += c.separation * s;
        }
        if let Some(f) = self.fear_vector() {
            impulse += c.fear * f;
        }
        impulse
    }

    /// Compute the impulse and keep only what outlives the tick.
    pub fn into_record(self) -> FlockRecord {
        let impulse = self.impulse();
        FlockRecord {
            boid: self.id,
            neighbors: self.neighbors,
            obstacles: self.obstacles,
            impulse,
        }
    }
}
