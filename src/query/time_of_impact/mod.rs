//! Implementation details of the `closest_point_of_approach` function.

pub use self::closest_point_of_approach::{
    closest_point_of_approach, time_of_impact_support_chains, ApproachResult,
};
pub use self::time_of_impact_point_capsule::time_of_impact_point_capsule;
pub use self::time_of_impact_point_disc::time_of_impact_point_disc;
pub use self::time_of_impact_point_segment::time_of_impact_point_segment_body;

mod closest_point_of_approach;
mod time_of_impact_point_capsule;
mod time_of_impact_point_disc;
mod time_of_impact_point_segment;
