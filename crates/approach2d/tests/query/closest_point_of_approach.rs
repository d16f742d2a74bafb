use crate::random_shapes;
use approach2d::math::{Point, Real, Vector};
use approach2d::na::Unit;
use approach2d::query::{self, details, ApproachResult};
use approach2d::shape::{Shape, SupportChain};
use oorandom::Rand32;

#[test]
fn head_on_discs() {
    let a = Shape::disc(Point::origin(), 1.0);
    let b = Shape::disc(Point::new(5.0, 0.0), 1.0);

    let vel = Vector::new(1.0, 0.0);
    let res = query::closest_point_of_approach(&a, &vel, &b, &Vector::zeros(), 10.0);

    assert!(res.hit);
    assert_relative_eq!(res.time, 3.0, epsilon = 1.0e-5);
}

#[test]
fn both_discs_moving() {
    let a = Shape::disc(Point::origin(), 1.0);
    let b = Shape::disc(Point::new(5.0, 0.0), 1.0);

    let res = query::closest_point_of_approach(
        &a,
        &Vector::new(1.0, 0.0),
        &b,
        &Vector::new(-1.0, 0.0),
        10.0,
    );

    assert!(res.hit);
    assert_relative_eq!(res.time, 1.5, epsilon = 1.0e-5);
}

#[test]
fn hit_after_max_time_is_clamped() {
    let a = Shape::disc(Point::origin(), 1.0);
    let b = Shape::disc(Point::new(5.0, 0.0), 1.0);

    let vel = Vector::new(1.0, 0.0);
    let res = query::closest_point_of_approach(&a, &vel, &b, &Vector::zeros(), 2.0);
    assert_eq!(res.time, 2.0);
}

#[test]
fn moving_away_is_clamped_to_zero() {
    let a = Shape::disc(Point::origin(), 1.0);
    let b = Shape::disc(Point::new(5.0, 0.0), 1.0);

    let vel = Vector::new(-1.0, 0.0);
    let res = query::closest_point_of_approach(&a, &vel, &b, &Vector::zeros(), 10.0);
    // The root behind the start is still a contact of the infinite trajectory.
    assert!(res.hit);
    assert_eq!(res.time, 0.0);
}

#[test]
fn zero_relative_motion() {
    let max_time = 7.0;
    let vel = Vector::new(1.0, 1.0);
    let pairs = [
        (
            Shape::disc(Point::origin(), 1.0),
            Shape::disc(Point::new(5.0, 0.0), 1.0),
        ),
        (
            Shape::capsule(Point::origin(), Vector::y_axis(), 1.0, 0.5),
            Shape::disc(Point::new(5.0, 0.0), 1.0),
        ),
        (
            Shape::rect(Point::origin(), Vector::y_axis(), 1.0, 1.0, 0.0),
            Shape::rect(Point::new(5.0, 0.0), Vector::y_axis(), 1.0, 1.0, 0.0),
        ),
        (
            Shape::rect(Point::origin(), Vector::y_axis(), 1.0, 2.0, 0.5),
            Shape::capsule(Point::new(0.0, 6.0), Vector::x_axis(), 1.0, 0.5),
        ),
    ];

    for (a, b) in &pairs {
        for (vel_a, vel_b) in [(Vector::zeros(), Vector::zeros()), (vel, vel)] {
            let res = query::closest_point_of_approach(a, &vel_a, b, &vel_b, max_time);
            assert_eq!(res, ApproachResult::new(max_time, false));
        }
    }
}

#[test]
fn rect_against_disc() {
    let rect = Shape::rect(Point::origin(), Vector::y_axis(), 1.0, 1.0, 0.0);
    let disc = Shape::disc(Point::new(5.0, 0.0), 1.0);

    let vel = Vector::new(1.0, 0.0);
    let res = query::closest_point_of_approach(&rect, &vel, &disc, &Vector::zeros(), 10.0);

    assert!(res.hit);
    assert_relative_eq!(res.time, 3.0, epsilon = 1.0e-5);
}

#[test]
fn parallel_capsules_hit_on_caps() {
    let a = Shape::capsule(Point::origin(), Vector::y_axis(), 1.0, 0.5);
    let b = Shape::capsule(Point::new(5.0, 0.0), Vector::y_axis(), 1.0, 0.5);

    let vel = Vector::new(1.0, 0.0);
    let res = query::closest_point_of_approach(&a, &vel, &b, &Vector::zeros(), 10.0);

    assert!(res.hit);
    assert_relative_eq!(res.time, 4.0, epsilon = 1.0e-5);
}

#[test]
fn passing_discs_report_closest_approach() {
    let a = Shape::disc(Point::new(0.0, 3.0), 1.0);
    let b = Shape::disc(Point::new(5.0, 0.0), 1.0);

    let vel = Vector::new(1.0, 0.0);
    let res = query::closest_point_of_approach(&a, &vel, &b, &Vector::zeros(), 10.0);

    assert!(!res.hit);
    assert_relative_eq!(res.time, 5.0, epsilon = 1.0e-5);
}

#[test]
fn rects_passing_beside_closest_to_the_first_vertex() {
    let a = Shape::rect(Point::origin(), Vector::y_axis(), 1.0, 1.0, 0.0);
    let b = Shape::rect(Point::new(5.0, 3.0), Vector::y_axis(), 1.0, 1.0, 0.5);
    let vel = Vector::new(1.0, 0.0);

    let res = query::closest_point_of_approach(&a, &vel, &b, &Vector::zeros(), 10.0);

    // Closest to the sum vertex (-2, -2), reached when the relative position is at x = -2.
    assert!(!res.hit);
    assert_relative_eq!(res.time, 3.0, epsilon = 1.0e-5);

    let rel_pos = Point::new(-5.0, -3.0);
    let vertex = Point::new(-2.0, -2.0);
    let expected = details::time_of_impact_point_disc(&rel_pos, &vel, 0.5, &vertex);
    assert_relative_eq!(res.time, expected.time, epsilon = 1.0e-5);
}

#[test]
fn rects_passing_beside_closest_to_the_last_vertex() {
    let a = Shape::rect(Point::origin(), Vector::y_axis(), 1.0, 1.0, 0.0);
    let b = Shape::rect(Point::new(5.0, -3.0), Vector::y_axis(), 1.0, 1.0, 0.5);
    let vel = Vector::new(1.0, 0.0);

    let res = query::closest_point_of_approach(&a, &vel, &b, &Vector::zeros(), 10.0);

    // Closest to the sum vertex (2, 2), reached when the relative position is at x = 2.
    assert!(!res.hit);
    assert_relative_eq!(res.time, 7.0, epsilon = 1.0e-5);

    let rel_pos = Point::new(-5.0, 3.0);
    let vertex = Point::new(2.0, 2.0);
    let expected = details::time_of_impact_point_disc(&rel_pos, &vel, 0.5, &vertex);
    assert_relative_eq!(res.time, expected.time, epsilon = 1.0e-5);

    let unclamped = details::time_of_impact_support_chains(&a, &b, &rel_pos, &vel, 0.5);
    assert_eq!(unclamped, ApproachResult::new(expected.time, false));
}

#[test]
fn degenerate_rect_against_rect() {
    let point_like = Shape::rect(Point::origin(), Vector::y_axis(), 0.0, 0.0, 0.5);
    let rect = Shape::rect(Point::new(5.0, 0.0), Vector::y_axis(), 1.0, 1.0, 0.0);

    let res = query::closest_point_of_approach(
        &point_like,
        &Vector::new(1.0, 0.0),
        &rect,
        &Vector::zeros(),
        10.0,
    );

    assert!(res.hit);
    assert_relative_eq!(res.time, 3.5, epsilon = 1.0e-5);
}

fn earliest_cap_hit(a: &Shape, b: &Shape, vel: &Vector<Real>) -> Real {
    let rel_pos = Point::from(a.position() - b.position());
    let total_radius = a.radius() + b.radius();
    let chain_a = a.local_support_chain(vel);
    let chain_b = b.local_support_chain(vel);

    details::minkowski_chain(&chain_a, &chain_b)
        .points()
        .iter()
        .map(|pt| details::time_of_impact_point_disc(&rel_pos, vel, total_radius, pt))
        .filter(|cap| cap.hit)
        .map(|cap| cap.time)
        .fold(Real::MAX, Real::min)
}

#[test]
fn zero_width_rects_hit_before_the_caps() {
    // Both rects collapse to segments, so their chains contain zero-length edges.
    let axis_a = Unit::new_normalize(Vector::new(1.0, 1.0));
    let axis_b = Unit::new_normalize(Vector::new(1.0e-3, 1.0));
    let a = Shape::rect(Point::origin(), axis_a, 0.0, 0.5, 1.0);
    let b = Shape::rect(Point::new(6.0, 0.0), axis_b, 0.0, 0.5, 1.0);
    let vel = Vector::new(1.0, 0.0);

    let res = query::closest_point_of_approach(&a, &vel, &b, &Vector::zeros(), 10.0);

    assert!(res.hit);
    assert_relative_eq!(res.time, 3.6468, epsilon = 1.0e-3);
    assert!(res.time <= earliest_cap_hit(&a, &b, &vel) + 1.0e-4);
}

#[test]
fn degenerate_shapes_never_hit_after_the_caps() {
    let vel = Vector::new(1.0, 0.0);
    let diagonal = Unit::new_normalize(Vector::new(1.0, 1.0));
    let others = [
        Shape::rect(Point::new(5.0, 0.3), Vector::y_axis(), 1.0, 1.0, 0.5),
        Shape::rect(Point::new(5.0, 1.2), Vector::y_axis(), 1.0, 1.0, 0.5),
        Shape::rect(Point::new(5.0, -0.8), Vector::x_axis(), 0.0, 1.5, 0.2),
        Shape::capsule(Point::new(6.0, 0.5), Vector::y_axis(), 0.0, 0.5),
        Shape::capsule(Point::new(6.0, 1.5), Vector::x_axis(), 2.0, 0.0),
    ];
    let movers = [
        Shape::rect(Point::origin(), Vector::y_axis(), 0.0, 0.0, 0.5),
        Shape::rect(Point::origin(), Vector::y_axis(), 0.0, 1.0, 0.25),
        Shape::rect(Point::origin(), diagonal, 2.0, 0.0, 0.5),
        Shape::capsule(Point::origin(), Vector::y_axis(), 1.0, 0.0),
        Shape::capsule(Point::origin(), Vector::y_axis(), 0.0, 0.5),
    ];

    for a in &movers {
        for b in &others {
            let res = query::closest_point_of_approach(a, &vel, b, &Vector::zeros(), 100.0);
            let earliest_cap = earliest_cap_hit(a, b, &vel);

            if res.hit && earliest_cap < Real::MAX {
                assert!(res.time <= earliest_cap + 1.0e-4);
            }
        }
    }
}

#[test]
fn approach_time_stays_in_window() {
    let mut rng = Rand32::new(3);

    for _ in 0..1000 {
        let a = random_shapes::shape(&mut rng);
        let b = random_shapes::shape(&mut rng);
        let vel_a = random_shapes::velocity(&mut rng);
        let vel_b = random_shapes::velocity(&mut rng);

        let res = query::closest_point_of_approach(&a, &vel_a, &b, &vel_b, 4.0);
        assert!(res.time >= 0.0 && res.time <= 4.0);
    }
}

#[test]
fn approach_is_idempotent() {
    let mut rng = Rand32::new(11);

    for _ in 0..200 {
        let a = random_shapes::shape(&mut rng);
        let b = random_shapes::shape(&mut rng);
        let vel_a = random_shapes::velocity(&mut rng);
        let vel_b = random_shapes::velocity(&mut rng);

        let first = query::closest_point_of_approach(&a, &vel_a, &b, &vel_b, 4.0);
        let second = query::closest_point_of_approach(&a, &vel_a, &b, &vel_b, 4.0);

        assert_eq!(first.time.to_bits(), second.time.to_bits());
        assert_eq!(first.hit, second.hit);
    }
}
