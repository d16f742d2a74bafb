use super::time_of_impact_point_segment::SweptSegmentQuadratic;
use crate::math::{Point, Real, Vector};
use crate::query::ApproachResult;
use crate::utils;
use na::ComplexField;
use num::Zero;

/// Time of impact of a moving point against a static capsule (body and caps).
///
/// The capsule is the segment `[start, end]` inflated by `radius`. The body is
/// tested first; if the sweep does not touch it, the cap selected by the
/// projection of the body solution (`start` if it falls before the segment,
/// `end` otherwise) is tested instead.
///
/// Unlike [`time_of_impact_point_segment_body`](super::time_of_impact_point_segment_body),
/// a degenerate leading coefficient does not abort the body test: it is
/// replaced by a zero inverse, which evaluates the body at `t = 0`. Such a
/// body solution only counts as a hit if the point already lies within
/// `radius` of the spine line.
pub fn time_of_impact_point_capsule(
    pos: &Point<Real>,
    vel: &Vector<Real>,
    radius: Real,
    start: &Point<Real>,
    end: &Point<Real>,
) -> ApproachResult {
    let quadratic = SweptSegmentQuadratic::new(pos, vel, radius, start, end);
    let inv_a = utils::safe_inv(quadratic.a);
    let t0 = (-quadratic.b - ComplexField::sqrt(quadratic.h)) * inv_a;
    let y = quadratic.projection_at(t0);

    // Body.
    if y > 0.0 && y < quadratic.seg_sq && (!inv_a.is_zero() || quadratic.c <= 0.0) {
        return ApproachResult::new(t0, true);
    }

    // Caps.
    let cap_rel_pos = if y <= 0.0 { pos - start } else { pos - end };
    let vel_sq = vel.norm_squared();
    let cb = vel.dot(&cap_rel_pos);
    let cc = cap_rel_pos.norm_squared() - radius * radius;
    let ch = cb * cb - vel_sq * cc;
    let t1 = (-cb - ComplexField::sqrt(ch.max(0.0))) / vel_sq;

    ApproachResult::new(t1, ch > 0.0)
}
