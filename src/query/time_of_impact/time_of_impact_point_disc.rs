use crate::math::{Point, Real, Vector};
use crate::query::ApproachResult;
use na::ComplexField;

/// Time of impact of a point moving at `vel` against a static disc of radius
/// `radius` centered at `center`.
///
/// This solves `|pos + vel * t - center| = radius` for its smallest root. If the
/// point never reaches the disc, the returned time is the instant of closest
/// approach and `hit` is `false`.
///
/// The time is neither clamped nor guarded: a zero `vel` yields a non-finite
/// time, to be absorbed by [`ApproachResult::clamped`].
#[inline]
pub fn time_of_impact_point_disc(
    pos: &Point<Real>,
    vel: &Vector<Real>,
    radius: Real,
    center: &Point<Real>,
) -> ApproachResult {
    let dpos = pos - center;
    let a = vel.norm_squared();
    let b = vel.dot(&dpos);
    let c = dpos.norm_squared() - radius * radius;
    let h = (b * b - a * c).max(0.0);
    let time = (-b - ComplexField::sqrt(h)) / a;

    ApproachResult::new(time, h > 0.0)
}
