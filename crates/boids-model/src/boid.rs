//! The moving agent.

use boids_core::{CoreError, CoreResult, Frame, SimRng, Vector2D};

use crate::Model;

/// Per-boid kinematic limits and render size.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoidParams {
    /// Speed cap, in frame units per second.
    pub max_velocity: f64,
    /// Acceleration cap, in frame units per second².
    pub max_acceleration: f64,
    /// Side length of the drawn triangle.  Render-only.
    pub size: f64,
}

impl Default for BoidParams {
    fn default() -> Self {
        Self {
            max_velocity:     200.0,
            max_acceleration: 50.0,
            size:             12.0,
        }
    }
}

impl BoidParams {
    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in [
            ("max_velocity", self.max_velocity),
            ("max_acceleration", self.max_acceleration),
            ("size", self.size),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::Config(format!(
                    "boid {name} must be positive and finite, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Rescale `v` to `max` when its magnitude reaches `max`.
///
/// A vector whose magnitude overflows keeps its direction; one with a NaN
/// component clamps to zero.
#[inline]
fn clamp_magnitude(v: Vector2D, max: f64) -> Vector2D {
    let magnitude = v.magnitude();
    if magnitude.is_finite() {
        return if magnitude >= max { v.unit() * max } else { v };
    }
    if v.x().is_nan() || v.y().is_nan() {
        return Vector2D::ZERO;
    }
    let direction = if v.x().is_infinite() || v.y().is_infinite() {
        Vector2D::new(infinite_sign(v.x()), infinite_sign(v.y()))
    } else {
        v / v.x().abs().max(v.y().abs())
    };
    direction.unit() * max
}

/// `±1` for an infinite component, `0` otherwise.
#[inline]
fn infinite_sign(c: f64) -> f64 {
    if c.is_infinite() { c.signum() } else { 0.0 }
}

/// An autonomous agent with position, velocity and acceleration.
///
/// Velocity and acceleration are clamped on every assignment, so their
/// magnitudes never exceed `params.max_velocity` / `params.max_acceleration`.
#[derive(Clone, Debug, PartialEq)]
pub struct Boid {
    position:     Vector2D,
    velocity:     Vector2D,
    acceleration: Vector2D,
    frame:        Frame,
    params:       BoidParams,
}

impl Boid {
    /// A boid with explicit state.  `position` is wrapped into `frame`;
    /// `velocity` and `acceleration` go through the clamping setters.
    pub fn new(
        position:     Vector2D,
        velocity:     Vector2D,
        acceleration: Vector2D,
        frame:        Frame,
        params:       BoidParams,
    ) -> Self {
        let mut boid = Self {
            position: frame.wrap(position),
            velocity: Vector2D::ZERO,
            acceleration: Vector2D::ZERO,
            frame,
            params,
        };
        boid.set_velocity(velocity);
        boid.set_acceleration(acceleration);
        boid
    }

    /// A motionless boid at `position`, as inserted by the user.
    pub fn at(position: Vector2D, frame: Frame, params: BoidParams) -> Self {
        Self::new(position, Vector2D::ZERO, Vector2D::ZERO, frame, params)
    }

    /// A boid at the frame centre with a random unit-disk velocity scaled to
    /// `max_velocity` and a random unit-disk acceleration.
    pub fn random(rng: &mut SimRng, frame: Frame, params: BoidParams) -> Self {
        let velocity = rng.unit_disk() * params.max_velocity;
        let acceleration = rng.unit_disk();
        Self::new(frame.center(), velocity, acceleration, frame, params)
    }

    #[inline]
    pub fn velocity(&self) -> Vector2D {
        self.velocity
    }

    #[inline]
    pub fn acceleration(&self) -> Vector2D {
        self.acceleration
    }

    #[inline]
    pub fn params(&self) -> &BoidParams {
        &self.params
    }

    #[inline]
    pub fn max_velocity(&self) -> f64 {
        self.params.max_velocity
    }

    /// Heading, i.e. the angle of the velocity.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.velocity.angle()
    }

    pub fn set_velocity(&mut self, velocity: Vector2D) {
        self.velocity = clamp_magnitude(velocity, self.params.max_velocity);
    }

    pub fn set_acceleration(&mut self, acceleration: Vector2D) {
        self.acceleration = clamp_magnitude(acceleration, self.params.max_acceleration);
    }

    /// Integrate one step: velocity first (clamped), then position (wrapped).
    pub fn update(&mut self, timestep: f64) {
        self.set_velocity(self.velocity + self.acceleration * timestep);
        self.position = self.frame.wrap(self.position + self.velocity * timestep);
    }
}

impl Model for Boid {
    #[inline]
    fn position(&self) -> Vector2D {
        self.position
    }

    #[inline]
    fn frame(&self) -> Frame {
        self.frame
    }

    /// A triangle pointing along the heading.
    fn coordinates(&self) -> Vec<Vector2D> {
        let s = (self.params.size / 3.0).floor();
        let angle = self.angle();
        [Vector2D::new(-s, -s), Vector2D::new(2.0 * s, 0.0), Vector2D::new(-s, s)]
            .into_iter()
            .map(|offset| offset.rotate(angle) + self.position)
            .collect()
    }
}
