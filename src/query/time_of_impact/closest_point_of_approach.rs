use crate::math::{Point, Real, Vector};
use crate::query::details::{
    minkowski_chain, time_of_impact_point_capsule, time_of_impact_point_disc,
    time_of_impact_point_segment_body,
};
use crate::shape::{Shape, SupportChain};
use crate::utils;
use na::ComplexField;

/// The result of a closest-point-of-approach query.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ApproachResult {
    /// The time of first contact if `hit` is `true`, the time of closest approach otherwise.
    pub time: Real,
    /// Do the rounded boundaries of both shapes touch at `time`?
    pub hit: bool,
}

impl ApproachResult {
    /// Creates a new approach result.
    #[inline]
    pub fn new(time: Real, hit: bool) -> Self {
        Self { time, hit }
    }

    /// Clamps the time of this result to `[0, max_time]`.
    ///
    /// Non-finite times are absorbed: NaN and `+∞` become `max_time`, `-∞` becomes `0`.
    #[inline]
    #[must_use]
    pub fn clamped(self, max_time: Real) -> Self {
        Self {
            time: utils::clamp(self.time, 0.0, max_time),
            hit: self.hit,
        }
    }
}

/// Computes when two shapes moving with constant velocities first touch, or
/// are the closest, during `[0, max_time]`.
///
/// The computation happens in the frame of `shape_b`. If the shapes never touch
/// during the window, `hit` is `false` and `time` is the instant of closest
/// approach, clamped to the window. Without relative motion, the reported time
/// is `max_time` and no hit is reported unless the shapes already touch a
/// capsule body.
pub fn closest_point_of_approach(
    shape_a: &Shape,
    vel_a: &Vector<Real>,
    shape_b: &Shape,
    vel_b: &Vector<Real>,
    max_time: Real,
) -> ApproachResult {
    let rel_vel = vel_a - vel_b;
    let rel_pos = Point::from(shape_a.position() - shape_b.position());
    let total_radius = shape_a.radius() + shape_b.radius();

    let result = match (shape_a, shape_b) {
        (Shape::Disc(_), Shape::Disc(_)) => {
            time_of_impact_point_disc(&rel_pos, &rel_vel, total_radius, &Point::origin())
        }
        (Shape::Disc(_), Shape::Capsule(capsule)) | (Shape::Capsule(capsule), Shape::Disc(_)) => {
            time_of_impact_point_capsule(
                &rel_pos,
                &rel_vel,
                total_radius,
                &capsule.local_spine_start(),
                &capsule.local_spine_end(),
            )
        }
        _ => time_of_impact_support_chains(shape_a, shape_b, &rel_pos, &rel_vel, total_radius),
    };

    result.clamped(max_time)
}

/// Sweeps `rel_pos` along `rel_vel` against the Minkowski sum of the support
/// chains of both shapes, inflated by `total_radius`.
///
/// The returned time is not clamped.
pub fn time_of_impact_support_chains(
    shape_a: &Shape,
    shape_b: &Shape,
    rel_pos: &Point<Real>,
    rel_vel: &Vector<Real>,
    total_radius: Real,
) -> ApproachResult {
    // The silhouettes must face the direction of travel.
    let chain_a = shape_a.local_support_chain(rel_vel);
    let chain_b = shape_b.local_support_chain(rel_vel);
    let sum = minkowski_chain(&chain_a, &chain_b);
    let points = sum.points();
    let first = points[0];
    let last = points[points.len() - 1];

    // Check if the swept point can hit the sum at all.
    let test_dir = utils::normalize_or_zero(rel_vel);
    if test_dir == Vector::zeros() {
        log::debug!("No relative motion between the shapes, no contact can be found.");
    }

    let first_dist = utils::perp(&test_dir, &(first - rel_pos)) + total_radius;
    let last_dist = utils::perp(&test_dir, &(last - rel_pos)) - total_radius;

    if first_dist * last_dist > 0.0 {
        log::trace!("The relative motion passes beside the Minkowski sum.");
        let extreme = if ComplexField::abs(first_dist) < ComplexField::abs(last_dist) {
            first
        } else {
            last
        };

        let closest = time_of_impact_point_disc(rel_pos, rel_vel, total_radius, &extreme);
        return ApproachResult::new(closest.time, false);
    }

    // Segments of a convex chain cannot overlap: the first body hit is the earliest.
    for (p, q) in sum.segments() {
        if let Some(time) =
            time_of_impact_point_segment_body(rel_pos, rel_vel, total_radius, &p, &q)
        {
            return ApproachResult::new(time, true);
        }
    }

    // Several caps can be hit, keep the earliest.
    let mut result = ApproachResult::new(Real::MAX, false);

    for pt in points {
        let cap = time_of_impact_point_disc(rel_pos, rel_vel, total_radius, pt);
        if cap.hit && cap.time < result.time {
            result = cap;
        }
    }

    result
}
