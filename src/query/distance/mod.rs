//! Implementation details of the `nearest_distance` function.

pub use self::distance_disc_capsule::distance_disc_capsule;
pub use self::distance_disc_disc::distance_disc_disc;
pub use self::distance_result::DistanceResult;
pub use self::nearest_distance::{distance_support_chains, nearest_distance};

mod distance_disc_capsule;
mod distance_disc_disc;
mod distance_result;
mod nearest_distance;
