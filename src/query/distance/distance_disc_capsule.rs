use crate::math::{Point, Real, UnitVector};
use crate::query::DistanceResult;
use crate::utils;

/// Distance between a disc and a capsule.
///
/// `center12` is the center of one shape relative to the other one, and the
/// capsule spine spans `[-axis * half_height, axis * half_height]` around its
/// center. The spine is symmetric, so the roles of both shapes can be swapped
/// by negating `center12`.
#[inline]
pub fn distance_disc_capsule(
    center12: &Point<Real>,
    axis: &UnitVector<Real>,
    half_height: Real,
    total_radius: Real,
) -> DistanceResult {
    let s = utils::clamp(axis.dot(&center12.coords), -half_height, half_height);
    let spine_pt = **axis * s;
    let diff = center12.coords - spine_pt;

    DistanceResult::from_displacement(&diff, total_radius)
}
