//! Immutable planar vector.
//!
//! `Vector2D` is the geometric currency of the whole workspace: positions,
//! velocities, accelerations, steering vectors and polygon vertices are all
//! `Vector2D`s.  Every operation returns a new value; there are no setters.
//!
//! # Operands
//!
//! Arithmetic is available through `std::ops` for vector/vector operands
//! (componentwise) and vector/scalar operands (the scalar broadcasts to both
//! components).  The commutative operators (`+`, `*`) also accept the scalar
//! on the left.  `%` uses *floored* semantics (the remainder takes the sign
//! of the divisor), which the toroidal wrap relies on:
//!
//! ```
//! use boids_core::Vector2D;
//!
//! let wrapped = Vector2D::new(-3.0, -4.0) % Vector2D::new(40.0, 30.0);
//! assert_eq!(wrapped, Vector2D::new(37.0, 26.0));
//! ```
//!
//! # Equality
//!
//! `==` compares each component within [`EQ_TOLERANCE`] (absolute), never
//! exactly.  NaN components compare unequal to everything.

use std::f64::consts::TAU;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign};

use rand::Rng;

use crate::{CoreError, CoreResult};

/// Absolute per-component tolerance used by `Vector2D`'s `PartialEq`.
pub const EQ_TOLERANCE: f64 = 1e-12;

/// An immutable 2-component vector of `f64`.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2D {
    x: f64,
    y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A vector with both components equal to `value`.
    #[inline]
    pub const fn splat(value: f64) -> Self {
        Self { x: value, y: value }
    }

    /// Construct from a polar angle (radians) and magnitude.
    #[inline]
    pub fn from_radial(angle: f64, magnitude: f64) -> Self {
        Self::new(magnitude * angle.cos(), magnitude * angle.sin())
    }

    /// Construct from any indexable pair.
    #[inline]
    pub fn from_array(array: [f64; 2]) -> Self {
        Self::new(array[0], array[1])
    }

    /// A random vector inside the unit disk.
    ///
    /// Angle and magnitude are drawn independently and uniformly (angle in
    /// `[0, 2π)`, magnitude in `[0, 1)`), so samples cluster toward the
    /// centre rather than covering the disk uniformly by area.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let angle = rng.gen_range(0.0..TAU);
        let magnitude = rng.gen_range(0.0..1.0);
        Self::from_radial(angle, magnitude)
    }

    #[inline]
    pub fn x(self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(self) -> f64 {
        self.y
    }

    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Polar angle in `(-π, π]`.
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Euclidean norm.
    #[inline]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// `true` only when the magnitude is exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.magnitude() == 0.0
    }

    /// The unit vector in the same direction.
    ///
    /// Not guarded: the zero vector yields NaN components.  Use
    /// [`resize`](Self::resize) when the input may be zero.
    #[inline]
    pub fn unit(self) -> Self {
        let magnitude = self.magnitude();
        Self::new(self.x / magnitude, self.y / magnitude)
    }

    /// Rotate counter-clockwise by `angle` radians.
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.y * cos + self.x * sin)
    }

    /// Rescale to `magnitude`, keeping the direction.
    ///
    /// # Errors
    /// [`CoreError::UndefinedDirection`] if `self` has zero magnitude.
    pub fn resize(self, magnitude: f64) -> CoreResult<Self> {
        let current = self.magnitude();
        if current == 0.0 {
            return Err(CoreError::UndefinedDirection(self));
        }
        Ok(self * (magnitude / current))
    }

    /// Multiply both components by `factor`.
    #[inline]
    pub fn scale(self, factor: f64) -> Self {
        self * factor
    }

    /// Componentwise product.
    #[inline]
    pub fn hadamard(self, other: Vector2D) -> Self {
        self * other
    }

    /// Componentwise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Round both components to the nearest integer, ties to even.
    #[inline]
    pub fn round(self) -> Self {
        Self::new(self.x.round_ties_even(), self.y.round_ties_even())
    }

    /// Componentwise floored division.
    #[inline]
    pub fn floor_div(self, divisor: Vector2D) -> Self {
        Self::new((self.x / divisor.x).floor(), (self.y / divisor.y).floor())
    }

    #[inline]
    fn zip_with(self, other: Vector2D, op: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(op(self.x, other.x), op(self.y, other.y))
    }
}

/// Floored remainder: the result has the sign of `divisor`.
#[inline]
pub fn floor_mod(value: f64, divisor: f64) -> f64 {
    let r = value % divisor;
    if r != 0.0 && (r < 0.0) != (divisor < 0.0) {
        r + divisor
    } else {
        r
    }
}

impl PartialEq for Vector2D {
    fn eq(&self, other: &Self) -> bool {
        (other.x - self.x).abs() < EQ_TOLERANCE && (other.y - self.y).abs() < EQ_TOLERANCE
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2D({}, {})", self.x, self.y)
    }
}

impl From<[f64; 2]> for Vector2D {
    #[inline]
    fn from(array: [f64; 2]) -> Self {
        Self::from_array(array)
    }
}

impl From<(f64, f64)> for Vector2D {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2D> for [f64; 2] {
    #[inline]
    fn from(v: Vector2D) -> [f64; 2] {
        v.to_array()
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

/// Implement a binary operator for `Vector2D ⊕ Vector2D` and `Vector2D ⊕ f64`.
macro_rules! vector_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl $trait<Vector2D> for Vector2D {
            type Output = Vector2D;
            #[inline]
            fn $method(self, rhs: Vector2D) -> Vector2D {
                self.zip_with(rhs, $op)
            }
        }

        impl $trait<f64> for Vector2D {
            type Output = Vector2D;
            #[inline]
            fn $method(self, rhs: f64) -> Vector2D {
                self.zip_with(Vector2D::splat(rhs), $op)
            }
        }
    };
}

vector_op!(Add, add, |a, b| a + b);
vector_op!(Sub, sub, |a, b| a - b);
vector_op!(Mul, mul, |a, b| a * b);
vector_op!(Div, div, |a, b| a / b);
vector_op!(Rem, rem, floor_mod);

impl Add<Vector2D> for f64 {
    type Output = Vector2D;
    #[inline]
    fn add(self, rhs: Vector2D) -> Vector2D {
        rhs + self
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;
    #[inline]
    fn mul(self, rhs: Vector2D) -> Vector2D {
        rhs * self
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}

impl AddAssign for Vector2D {
    #[inline]
    fn add_assign(&mut self, rhs: Vector2D) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vector2D {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2D) {
        *self = *self - rhs;
    }
}

impl Sum for Vector2D {
    fn sum<I: Iterator<Item = Vector2D>>(iter: I) -> Vector2D {
        iter.fold(Vector2D::ZERO, Add::add)
    }
}

/// Arithmetic mean of a sequence of vectors, or `None` if it is empty.
pub fn mean<I: IntoIterator<Item = Vector2D>>(vectors: I) -> Option<Vector2D> {
    let (sum, count) = vectors
        .into_iter()
        .fold((Vector2D::ZERO, 0usize), |(sum, n), v| (sum + v, n + 1));
    (count > 0).then(|| sum * (1.0 / count as f64))
}
