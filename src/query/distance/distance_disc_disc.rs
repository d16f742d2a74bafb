use crate::math::{Point, Real};
use crate::query::DistanceResult;

/// Distance between two discs.
///
/// `center12` is the center of the first disc relative to the second one.
#[inline]
pub fn distance_disc_disc(center12: &Point<Real>, total_radius: Real) -> DistanceResult {
    DistanceResult::from_displacement(&center12.coords, total_radius)
}
