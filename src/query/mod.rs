//! Non-persistent geometric queries between pairs of shapes.
//!
//! # General cases
//! The most general functions provided by this module are:
//!
//! * [`query::nearest_distance()`](nearest_distance) to compute the signed
//!   distance and separating normal between two shapes.
//! * [`query::closest_point_of_approach()`](closest_point_of_approach) to
//!   determine when two shapes moving with constant velocities first touch, or
//!   get the closest.
//! * [`query::predicted_separation()`](predicted_separation) to combine both.
//!
//! # Specific cases
//! The functions exported by the `details` submodule are the building blocks
//! of the general queries: the time-of-impact of a point against primitives,
//! the distance between specific pairs of shapes and the Minkowski sum of
//! support chains. They can be used directly when the shape types are known
//! in advance.

pub use self::distance::{nearest_distance, DistanceResult};
pub use self::minkowski_chain::{
    ChainOperand, ChainVertexSource, MinkowskiChain, MAX_MINKOWSKI_CHAIN_LEN,
};
pub use self::predicted_separation::{predicted_separation, PredictedSeparation};
pub use self::time_of_impact::{closest_point_of_approach, ApproachResult};

mod distance;
mod minkowski_chain;
mod point;
mod predicted_separation;
mod time_of_impact;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::distance::{distance_disc_capsule, distance_disc_disc, distance_support_chains};
    pub use super::minkowski_chain::minkowski_chain;
    pub use super::point::project_point_segment_parameter;
    pub use super::time_of_impact::{
        time_of_impact_point_capsule, time_of_impact_point_disc, time_of_impact_point_segment_body,
        time_of_impact_support_chains,
    };
}
