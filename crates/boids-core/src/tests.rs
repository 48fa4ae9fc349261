//! Unit tests for boids-core primitives.

#[cfg(test)]
mod vector {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::{CoreError, SimRng, Vector2D, mean};

    fn rng() -> SimRng {
        SimRng::new(7)
    }

    /// Reference floored remainder, written independently of `floor_mod`.
    fn floored(a: f64, b: f64) -> f64 {
        a - b * (a / b).floor()
    }

    #[test]
    fn from_radial_roundtrip() {
        let mut rng = rng();
        for _ in 0..200 {
            let v = rng.unit_disk() * 25.0;
            assert_eq!(Vector2D::from_radial(v.angle(), v.magnitude()), v);
        }
    }

    #[test]
    fn array_roundtrip() {
        let v = Vector2D::new(1.5, -2.25);
        assert_eq!(Vector2D::from_array(v.to_array()), v);
        let arr: [f64; 2] = v.into();
        assert_eq!(arr, [1.5, -2.25]);
    }

    #[test]
    fn commutative_scalar_operators() {
        let mut rng = rng();
        for _ in 0..100 {
            let v = rng.unit_disk();
            let s: f64 = rng.gen_range(-10.0..10.0);
            assert_eq!(v + s, s + v);
            assert_eq!(v + s, Vector2D::new(v.x() + s, v.y() + s));
            assert_eq!(v * s, s * v);
            assert_eq!(v * s, Vector2D::new(v.x() * s, v.y() * s));
        }
    }

    #[test]
    fn commutative_vector_operators() {
        let mut rng = rng();
        for _ in 0..100 {
            let v = rng.unit_disk();
            let w = rng.unit_disk();
            assert_eq!(v + w, w + v);
            assert_eq!(v + w, Vector2D::new(v.x() + w.x(), v.y() + w.y()));
            assert_eq!(v * w, w * v);
            assert_eq!(v.hadamard(w), Vector2D::new(v.x() * w.x(), v.y() * w.y()));
        }
    }

    #[test]
    fn non_commutative_scalar_operators() {
        let mut rng = rng();
        for _ in 0..100 {
            let v = rng.unit_disk();
            let s: f64 = rng.gen_range(-10.0..10.0);
            assert_eq!(v - s, Vector2D::new(v.x() - s, v.y() - s));
            assert_eq!(v / s, Vector2D::new(v.x() / s, v.y() / s));
            assert_eq!(v % s, Vector2D::new(floored(v.x(), s), floored(v.y(), s)));
            assert_eq!(
                v.floor_div(Vector2D::splat(s)),
                Vector2D::new((v.x() / s).floor(), (v.y() / s).floor())
            );
        }
    }

    #[test]
    fn non_commutative_vector_operators() {
        let mut rng = rng();
        for _ in 0..100 {
            let v = rng.unit_disk();
            let w = rng.unit_disk();
            assert_eq!(v - w, Vector2D::new(v.x() - w.x(), v.y() - w.y()));
            assert_eq!(v / w, Vector2D::new(v.x() / w.x(), v.y() / w.y()));
            assert_eq!(v % w, Vector2D::new(floored(v.x(), w.x()), floored(v.y(), w.y())));
        }
    }

    #[test]
    fn remainder_takes_divisor_sign() {
        let frame = Vector2D::new(40.0, 30.0);
        assert_eq!(Vector2D::new(-3.0, -4.0) % frame, Vector2D::new(37.0, 26.0));
        assert_eq!(Vector2D::new(45.0, 31.0) % frame, Vector2D::new(5.0, 1.0));
        assert_eq!(Vector2D::new(3.0, 4.0) % -5.0, Vector2D::new(-2.0, -1.0));
    }

    #[test]
    fn unary_operators() {
        let v = Vector2D::new(-1.5, 2.0);
        assert_eq!(-v, Vector2D::new(1.5, -2.0));
        assert_eq!(v.abs(), Vector2D::new(1.5, 2.0));
    }

    #[test]
    fn round_ties_to_even() {
        assert_eq!(Vector2D::new(2.5, 3.5).round(), Vector2D::new(2.0, 4.0));
        assert_eq!(Vector2D::new(-0.4, 7.6).round(), Vector2D::new(0.0, 8.0));
    }

    #[test]
    fn angle() {
        let cases = [
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (1.0, 1.0, 45.0),
            (0.0, 1.0, 90.0),
            (-1.0, 1.0, 135.0),
            (-1.0, 0.0, 180.0),
            (-1.0, -1.0, -135.0),
            (0.0, -1.0, -90.0),
            (1.0, -1.0, -45.0),
        ];
        for (x, y, expected) in cases {
            let got = Vector2D::new(x, y).angle().to_degrees();
            assert!((got - expected).abs() < 1e-12, "({x}, {y}): got {got}");
        }
    }

    #[test]
    fn magnitude() {
        let cases = [
            (0.0, 0.0, 0.0),
            (3.0, 4.0, 5.0),
            (-3.0, 4.0, 5.0),
            (3.0, -4.0, 5.0),
            (-3.0, -4.0, 5.0),
            (5.0, 12.0, 13.0),
            (8.0, 15.0, 17.0),
            (7.0, 24.0, 25.0),
            (12.0, 35.0, 37.0),
        ];
        for (x, y, expected) in cases {
            assert_eq!(Vector2D::new(x, y).magnitude(), expected);
        }
    }

    #[test]
    fn unit() {
        let mut rng = rng();
        for _ in 0..50 {
            let angle: f64 = rng.gen_range(-10.0..10.0);
            let expected = Vector2D::from_radial(angle, 1.0);
            let scaled = expected * angle.abs();
            assert_eq!(scaled.unit(), expected);
        }
    }

    #[test]
    fn unit_of_zero_is_nan() {
        let u = Vector2D::ZERO.unit();
        assert!(u.x().is_nan() && u.y().is_nan());
        assert_ne!(u, u);
    }

    #[test]
    fn rotate() {
        let cases = [
            (1.0, 0.0, 0.0, 1.0, 0.0),
            (0.0, 1.0, FRAC_PI_2, -1.0, 0.0),
            (-1.0, 0.0, PI, 1.0, 0.0),
            (1.0, 0.0, -FRAC_PI_2, 0.0, -1.0),
        ];
        for scalar in [1.0, -3.5, 7.25] {
            for (x, y, angle, ex, ey) in cases {
                let v = Vector2D::new(x, y) * scalar;
                assert_eq!(v.rotate(angle), Vector2D::new(ex, ey) * scalar);
            }
        }
    }

    #[test]
    fn resize_keeps_direction() {
        let v = Vector2D::new(3.0, 4.0);
        let r = v.resize(10.0).unwrap();
        assert_eq!(r, Vector2D::new(6.0, 8.0));
        assert!((r.angle() - v.angle()).abs() < 1e-12);
    }

    #[test]
    fn resize_zero_is_undefined_direction() {
        let err = Vector2D::ZERO.resize(1.0).unwrap_err();
        assert!(matches!(err, CoreError::UndefinedDirection(_)));
    }

    #[test]
    fn is_zero_is_exact() {
        assert!(Vector2D::ZERO.is_zero());
        assert!(!Vector2D::new(1e-300, 0.0).is_zero());
    }

    #[test]
    fn equality_tolerance() {
        let v = Vector2D::new(1.0, 1.0);
        assert_eq!(v, Vector2D::new(1.0 + 1e-13, 1.0 - 1e-13));
        assert_ne!(v, Vector2D::new(1.0 + 1e-11, 1.0));
    }

    #[test]
    fn random_inside_unit_disk() {
        let mut rng = rng();
        for _ in 0..1000 {
            assert!(rng.unit_disk().magnitude() < 1.0);
        }
    }

    #[test]
    fn mean_of_vectors() {
        let vs = [Vector2D::new(1.0, 2.0), Vector2D::new(3.0, 4.0), Vector2D::new(5.0, 0.0)];
        assert_eq!(mean(vs), Some(Vector2D::new(3.0, 2.0)));
        assert_eq!(mean(std::iter::empty()), None);
    }

    #[test]
    fn display() {
        assert_eq!(Vector2D::new(1.5, -2.0).to_string(), "Vector2D(1.5, -2)");
    }
}

#[cfg(test)]
mod frame {
    use crate::{CoreError, Frame, SimRng, Vector2D};

    const FRAME: Frame = Frame::new(40.0, 30.0);

    #[test]
    fn displacement_picks_shortest_image() {
        let origin = Vector2D::new(5.0, 5.0);
        let cases = [
            (Vector2D::new(10.0, 15.0), Vector2D::new(5.0, 10.0)),
            (Vector2D::new(30.0, 15.0), Vector2D::new(-15.0, 10.0)),
            (Vector2D::new(10.0, 25.0), Vector2D::new(5.0, -10.0)),
            (Vector2D::new(30.0, 25.0), Vector2D::new(-15.0, -10.0)),
        ];
        for (to, expected) in cases {
            assert_eq!(FRAME.displacement(origin, to), expected);
        }
    }

    #[test]
    fn distance_across_edges() {
        let cases = [
            (Vector2D::new(0.0, 0.0), Vector2D::new(3.0, 4.0), 5.0),
            (Vector2D::new(-3.0, -4.0) % FRAME.extent(), Vector2D::new(3.0, 4.0), 10.0),
            (Vector2D::new(-8.0, 0.0) % FRAME.extent(), Vector2D::new(8.0, 0.0), 16.0),
            (Vector2D::new(0.0, 7.0), Vector2D::new(0.0, -7.0) % FRAME.extent(), 14.0),
        ];
        for (from, to, expected) in cases {
            assert_eq!(FRAME.distance(from, to), expected);
        }
    }

    #[test]
    fn displacement_is_antisymmetric_and_bounded() {
        let mut rng = SimRng::new(11);
        for _ in 0..500 {
            let a = Vector2D::new(rng.gen_range(0.0..40.0), rng.gen_range(0.0..30.0));
            let b = Vector2D::new(rng.gen_range(0.0..40.0), rng.gen_range(0.0..30.0));
            assert_eq!(FRAME.displacement(a, b), -FRAME.displacement(b, a));
            assert!(FRAME.distance(a, b) <= FRAME.half_diagonal());
        }
    }

    #[test]
    fn wrap_normalises_into_frame() {
        assert_eq!(FRAME.wrap(Vector2D::new(45.0, -5.0)), Vector2D::new(5.0, 25.0));
        assert_eq!(FRAME.wrap(Vector2D::new(40.0, 30.0)), Vector2D::ZERO);
        let tiny = FRAME.wrap(Vector2D::new(-1e-20, -1e-20));
        assert!(FRAME.contains(tiny), "got {tiny}");
    }

    #[test]
    fn center_and_half_diagonal() {
        assert_eq!(FRAME.center(), Vector2D::new(20.0, 15.0));
        assert_eq!(FRAME.half_diagonal(), 25.0);
    }

    #[test]
    fn validate_rejects_degenerate_extents() {
        assert!(FRAME.validate().is_ok());
        for bad in [Frame::new(0.0, 10.0), Frame::new(10.0, -1.0), Frame::new(f64::NAN, 1.0)] {
            assert!(matches!(bad.validate(), Err(CoreError::Config(_))));
        }
    }
}

#[cfg(test)]
mod ids {
    use crate::{BoidId, ObstacleId};

    #[test]
    fn index_roundtrip() {
        let id = BoidId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(BoidId::try_from(42usize).unwrap(), id);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn try_from_rejects_values_past_u32() {
        assert_eq!(BoidId::try_from(u32::MAX as usize).unwrap(), BoidId(u32::MAX));
        assert!(ObstacleId::try_from(u32::MAX as usize + 1).is_err());
    }

    #[test]
    fn ordering() {
        assert!(BoidId(0) < BoidId(1));
        assert!(ObstacleId(100) > ObstacleId(99));
    }

    #[test]
    fn display() {
        assert_eq!(BoidId(7).to_string(), "BoidId(7)");
        assert_eq!(ObstacleId(3).to_string(), "ObstacleId(3)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick::ZERO + 1, Tick(1));
    }

    #[test]
    fn clock_accumulates_uneven_timesteps() {
        let mut clock = SimClock::new();
        clock.advance(0.5);
        clock.advance(0.25);
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.elapsed_secs, 0.75);
    }

    #[test]
    fn display() {
        let mut clock = SimClock::new();
        clock.advance(1.0);
        assert_eq!(clock.to_string(), "T1 (1.000 s)");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.gen_range(0.0..1.0);
            let b: f64 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
            assert_eq!(r1.unit_disk(), r2.unit_disk());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a: u64 = SimRng::new(1).gen_range(0..u64::MAX);
        let b: u64 = SimRng::new(2).gen_range(0..u64::MAX);
        assert_ne!(a, b);
    }

    #[test]
    fn entropy_seed_is_replayable() {
        let mut original = SimRng::from_entropy();
        let mut replay = SimRng::new(original.seed());
        assert_eq!(original.unit_disk(), replay.unit_disk());
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }
}
