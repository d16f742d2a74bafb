//! Point projection on the primitives of the support chains.

pub use self::point_segment::project_point_segment_parameter;

mod point_segment;
