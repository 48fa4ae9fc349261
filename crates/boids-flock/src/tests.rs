//! Unit tests for boids-flock.

use boids_core::{BoidId, Frame, Vector2D};
use boids_model::{Boid, BoidParams, DEFAULT_OBSTACLE_SIZE, Obstacle};

use crate::{Coefficients, FlockContext};

// ── Helpers ───────────────────────────────────────────────────────────────────

const FRAME: Frame = Frame::new(1000.0, 1000.0);
const RADIUS: f64 = 150.0;

fn boid(x: f64, y: f64, vx: f64, vy: f64) -> Boid {
    Boid::new(
        Vector2D::new(x, y),
        Vector2D::new(vx, vy),
        Vector2D::ZERO,
        FRAME,
        BoidParams::default(),
    )
}

fn obstacle(x: f64, y: f64) -> Obstacle {
    Obstacle::new(Vector2D::new(x, y), FRAME, DEFAULT_OBSTACLE_SIZE)
}

fn context<'a>(boids: &'a [Boid], obstacles: &'a [Obstacle]) -> FlockContext<'a> {
    FlockContext::new(boids, obstacles, RADIUS, Coefficients::default())
}

// ── Coefficients ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod coefficient_tests {
    use crate::{CoefficientKind, Coefficients, FlockError};

    #[test]
    fn defaults() {
        let c = Coefficients::default();
        assert_eq!(c.alignment, 10.0);
        assert_eq!(c.cohesion, 10.0);
        assert_eq!(c.fear, 10.0);
        assert_eq!(c.separation, 12.0);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("alignment".parse::<CoefficientKind>().unwrap(), CoefficientKind::Alignment);
        assert_eq!("Cohesion".parse::<CoefficientKind>().unwrap(), CoefficientKind::Cohesion);
        assert_eq!(" FEAR ".parse::<CoefficientKind>().unwrap(), CoefficientKind::Fear);
        assert_eq!("sEpArAtIoN".parse::<CoefficientKind>().unwrap(), CoefficientKind::Separation);
    }

    #[test]
    fn unknown_name_rejected() {
        let err = "gravity".parse::<CoefficientKind>().unwrap_err();
        assert!(matches!(err, FlockError::UnknownCoefficient(ref name) if name == "gravity"));
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for kind in CoefficientKind::ALL {
            assert_eq!(kind.to_string().parse::<CoefficientKind>().unwrap(), kind);
        }
    }

    #[test]
    fn adjust_returns_new_value() {
        let mut c = Coefficients::default();
        assert_eq!(c.adjust(CoefficientKind::Separation, 1.0).unwrap(), 13.0);
        assert_eq!(c.adjust(CoefficientKind::Fear, -11.0).unwrap(), -1.0);
        assert_eq!(c.separation, 13.0);
        assert_eq!(c.fear, -1.0);
        assert_eq!(c.alignment, 10.0);
    }

    #[test]
    fn set_rejects_non_finite() {
        let mut c = Coefficients::default();
        assert!(c.set(CoefficientKind::Cohesion, f64::NAN).is_err());
        assert!(c.set(CoefficientKind::Cohesion, f64::INFINITY).is_err());
        assert_eq!(c.cohesion, 10.0);
        c.set(CoefficientKind::Cohesion, 2.5).unwrap();
        assert_eq!(c.get(CoefficientKind::Cohesion), 2.5);
    }

    #[test]
    fn validate_reports_bad_field() {
        let c = Coefficients { alignment: f64::NEG_INFINITY, ..Coefficients::default() };
        assert!(matches!(
            c.validate(),
            Err(FlockError::NonFiniteCoefficient { name: "alignment", .. })
        ));
    }
}

// ── Neighbor discovery ────────────────────────────────────────────────────────

#[cfg(test)]
mod neighbor_tests {
    use boids_core::ObstacleId;

    use super::*;
    use crate::get_neighbors;

    #[test]
    fn owner_is_excluded() {
        let boids = vec![boid(500.0, 500.0, 0.0, 0.0), boid(510.0, 500.0, 0.0, 0.0)];
        let ctx = context(&boids, &[]);
        let flock = ctx.flock(BoidId(0)).unwrap();
        assert!(!flock.neighbors().contains_key(&BoidId(0)));
        assert_eq!(flock.neighbors().get(&BoidId(1)), Some(&10.0));
    }

    #[test]
    fn colocated_boid_is_excluded() {
        let boids = vec![boid(500.0, 500.0, 0.0, 0.0), boid(500.0, 500.0, 5.0, 0.0)];
        let ctx = context(&boids, &[]);
        assert!(ctx.flock(BoidId(0)).unwrap().neighbors().is_empty());
    }

    #[test]
    fn radius_is_exclusive() {
        let boids = vec![
            boid(500.0, 500.0, 0.0, 0.0),
            boid(650.0, 500.0, 0.0, 0.0),
            boid(500.0, 649.999, 0.0, 0.0),
        ];
        let ctx = context(&boids, &[]);
        let flock = ctx.flock(BoidId(0)).unwrap();
        assert!(!flock.neighbors().contains_key(&BoidId(1)));
        assert!(flock.neighbors().contains_key(&BoidId(2)));
    }

    #[test]
    fn neighbors_found_across_wrap() {
        let boids = vec![boid(5.0, 500.0, 0.0, 0.0), boid(995.0, 500.0, 0.0, 0.0)];
        let ctx = context(&boids, &[]);
        let flock = ctx.flock(BoidId(0)).unwrap();
        assert_eq!(flock.neighbors().get(&BoidId(1)), Some(&10.0));
    }

    #[test]
    fn generic_over_obstacles() {
        let owner = boid(500.0, 500.0, 0.0, 0.0);
        let obstacles = [obstacle(530.0, 540.0), obstacle(900.0, 900.0)];
        let found = get_neighbors(
            &owner,
            obstacles.iter().enumerate().map(|(i, o)| (ObstacleId(i as u32), o)),
            RADIUS,
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found.get(&ObstacleId(0)), Some(&50.0));
    }

    #[test]
    fn unknown_owner_id() {
        let boids = vec![boid(500.0, 500.0, 0.0, 0.0)];
        assert!(context(&boids, &[]).flock(BoidId(1)).is_none());
    }
}

// ── Steering vectors ──────────────────────────────────────────────────────────

#[cfg(test)]
mod steering_tests {
    use boids_core::mean;
    use boids_model::Model;

    use super::*;

    #[test]
    fn average_velocity_of_ten_neighbors() {
        let mut boids = vec![boid(500.0, 500.0, 0.0, 0.0)];
        for i in 1..=10 {
            let i = i as f64;
            boids.push(boid(500.0 + 5.0 * i, 520.0, 3.0 * i, -2.0 * i + 7.0));
        }
        let ctx = context(&boids, &[]);
        let flock = ctx.flock(BoidId(0)).unwrap();
        assert_eq!(flock.neighbors().len(), 10);
        let expected = mean(boids[1..].iter().map(|b| b.velocity())).unwrap();
        assert_eq!(flock.average_velocity(), Some(expected));
        assert_eq!(expected, Vector2D::new(16.5, -4.0));
    }

    #[test]
    fn empty_sets_yield_none() {
        let boids = vec![boid(500.0, 500.0, 10.0, 0.0)];
        let ctx = context(&boids, &[]);
        let flock = ctx.flock(BoidId(0)).unwrap();
        assert_eq!(flock.average_velocity(), None);
        assert_eq!(flock.center_of_mass(), None);
        assert_eq!(flock.alignment_vector(), None);
        assert_eq!(flock.cohesion_vector(), None);
        assert_eq!(flock.separation_vector(), None);
        assert_eq!(flock.fear_vector(), None);
    }

    #[test]
    fn steering_toward_desired() {
        let boids = vec![boid(500.0, 500.0, 10.0, 0.0)];
        let ctx = context(&boids, &[]);
        let flock = ctx.flock(BoidId(0)).unwrap();
        assert_eq!(
            flock.steering_vector(Vector2D::new(0.0, 3.0)),
            Vector2D::new(-10.0, 200.0)
        );
        assert_eq!(flock.steering_vector(Vector2D::ZERO), Vector2D::ZERO);
    }

    #[test]
    fn opposing_velocities_give_zero_alignment() {
        let boids = vec![
            boid(500.0, 500.0, 10.0, 0.0),
            boid(520.0, 500.0, 0.0, 30.0),
            boid(480.0, 500.0, 0.0, -30.0),
        ];
        let ctx = context(&boids, &[]);
        let flock = ctx.flock(BoidId(0)).unwrap();
        assert_eq!(flock.average_velocity(), Some(Vector2D::ZERO));
        assert_eq!(flock.alignment_vector(), Some(Vector2D::ZERO));
    }

    #[test]
    fn cohesion_uses_wrapped_image() {
        let boids = vec![boid(5.0, 500.0, 0.0, 0.0), boid(985.0, 500.0, 0.0, 0.0)];
        let ctx = context(&boids, &[]);
        let flock = ctx.flock(BoidId(0)).unwrap();
        assert_eq!(flock.center_of_mass(), Some(Vector2D::new(-15.0, 500.0)));
        assert_eq!(flock.cohesion_vector(), Some(Vector2D::new(-200.0, 0.0)));
    }

    #[test]
    fn separation_points_away() {
        let boids = vec![boid(500.0, 500.0, 0.0, 20.0), boid(510.0, 500.0, 0.0, 0.0)];
        let ctx = context(&boids, &[]);
        let flock = ctx.flock(BoidId(0)).unwrap();
        assert_eq!(flock.separation_vector(), Some(Vector2D::new(-200.0, -20.0)));
    }

    #[test]
    fn fear_points_away_from_obstacle() {
        let boids = vec![boid(500.0, 500.0, 0.0, 0.0)];
        let obstacles = vec![obstacle(500.0, 460.0)];
        let ctx = context(&boids, &obstacles);
        let flock = ctx.flock(BoidId(0)).unwrap();
        assert_eq!(flock.fear_vector(), Some(Vector2D::new(0.0, 200.0)));
        assert!(obstacles[0].distance(flock.boid()) < RADIUS);
    }

    #[test]
    fn derived_vectors_are_stable() {
        let boids = vec![boid(500.0, 500.0, 1.0, 2.0), boid(530.0, 480.0, -4.0, 9.0)];
        let ctx = context(&boids, &[]);
        let flock = ctx.flock(BoidId(0)).unwrap();
        let first = flock.cohesion_vector();
        assert_eq!(flock.cohesion_vector(), first);
        assert_eq!(flock.impulse(), flock.impulse());
    }
}

// ── Impulse ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod impulse_tests {
    use super::*;
    use crate::CoefficientKind;

    #[test]
    fn alone_gives_zero_impulse() {
        let boids = vec![boid(500.0, 500.0, 50.0, 0.0)];
        let obstacles = vec![obstacle(100.0, 100.0)];
        let ctx = context(&boids, &obstacles);
        assert_eq!(ctx.flock(BoidId(0)).unwrap().impulse(), Vector2D::ZERO);
    }

    #[test]
    fn single_obstacle_impulse_is_pure_fear() {
        let boids = vec![boid(500.0, 500.0, 10.0, 0.0)];
        let obstacles = vec![obstacle(520.0, 500.0)];
        let ctx = context(&boids, &obstacles);
        let flock = ctx.flock(BoidId(0)).unwrap();
        let fear = flock.fear_vector().unwrap();
        assert_eq!(fear, Vector2D::new(-210.0, 0.0));
        assert_eq!(flock.impulse(), ctx.coefficients.fear * fear);
        assert_eq!(flock.impulse(), Vector2D::new(-2100.0, 0.0));
    }

    #[test]
    fn neighbors_without_obstacles_have_no_fear_term() {
        let boids = vec![boid(500.0, 500.0, 0.0, 0.0), boid(540.0, 500.0, 0.0, 10.0)];
        let obstacles = vec![obstacle(100.0, 100.0)];
        let ctx = context(&boids, &obstacles);
        let flock = ctx.flock(BoidId(0)).unwrap();
        assert_eq!(flock.fear_vector(), None);

        let c = ctx.coefficients;
        let expected = c.alignment * flock.alignment_vector().unwrap()
            + c.cohesion * flock.cohesion_vector().unwrap()
            + c.separation * flock.separation_vector().unwrap();
        assert_eq!(flock.impulse(), expected);
    }

    #[test]
    fn both_terms_add_independently() {
        let boids = vec![boid(500.0, 500.0, 0.0, 0.0), boid(540.0, 500.0, 0.0, 10.0)];
        let obstacles = vec![obstacle(500.0, 530.0)];
        let ctx = context(&boids, &obstacles);
        let with_both = ctx.flock(BoidId(0)).unwrap().impulse();

        let without_obstacles = context(&boids, &[]).flock(BoidId(0)).unwrap().impulse();
        let only_obstacle = context(&boids[..1], &obstacles).flock(BoidId(0)).unwrap().impulse();
        assert_eq!(with_both, without_obstacles + only_obstacle);
    }

    #[test]
    fn coefficients_weight_the_terms() {
        let boids = vec![boid(500.0, 500.0, 0.0, 0.0), boid(540.0, 500.0, 0.0, 10.0)];
        let mut coefficients = Coefficients::default();
        for kind in [CoefficientKind::Cohesion, CoefficientKind::Separation] {
            coefficients.set(kind, 0.0).unwrap();
        }
        let ctx = FlockContext::new(&boids, &[], RADIUS, coefficients);
        let flock = ctx.flock(BoidId(0)).unwrap();
        // alignment desired (0, 10) → (0, 200) minus zero velocity.
        assert_eq!(flock.impulse(), Vector2D::new(0.0, 2000.0));
    }

    #[test]
    fn record_keeps_maps_and_impulse() {
        let boids = vec![
            boid(500.0, 500.0, 0.0, 0.0),
            boid(540.0, 500.0, 0.0, 10.0),
            boid(900.0, 100.0, 0.0, 0.0),
        ];
        let obstacles = vec![obstacle(500.0, 530.0)];
        let ctx = context(&boids, &obstacles);
        let impulse = ctx.flock(BoidId(0)).unwrap().impulse();
        let record = ctx.flock(BoidId(0)).unwrap().into_record();
        assert_eq!(record.boid, BoidId(0));
        assert_eq!(record.impulse, impulse);
        assert_eq!(record.neighbor_count(), 1);
        assert_eq!(record.obstacle_count(), 1);
        assert!(record.has_neighbors());
    }
}
