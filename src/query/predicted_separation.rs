use crate::math::{Real, Vector};
use crate::query::{closest_point_of_approach, nearest_distance, ApproachResult, DistanceResult};
use crate::shape::Shape;

/// The separation between two moving shapes at their closest point of approach.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PredictedSeparation {
    /// When the shapes first touch, or are the closest.
    pub approach: ApproachResult,
    /// The distance and normal between the shapes at `approach.time`.
    pub separation: DistanceResult,
}

/// Computes the closest point of approach of two moving shapes, then their
/// nearest distance once both have moved for that time.
///
/// This is the quantity local avoidance reacts to: how close the shapes will
/// get within `max_time`, and in which direction to push them apart.
pub fn predicted_separation(
    shape_a: &Shape,
    vel_a: &Vector<Real>,
    shape_b: &Shape,
    vel_b: &Vector<Real>,
    max_time: Real,
) -> PredictedSeparation {
    let approach = closest_point_of_approach(shape_a, vel_a, shape_b, vel_b, max_time);
    let separation = nearest_distance(
        shape_a,
        &(vel_a * approach.time),
        shape_b,
        &(vel_b * approach.time),
    );

    PredictedSeparation {
        approach,
        separation,
    }
}
