use crate::math::{Point, Real, DEGENERACY_EPSILON};

/// The parameter `t ∈ [0, 1]` of the projection of `pt` on the segment `[start, end]`.
///
/// Returns `0.0` if the segment is degenerate (squared length smaller than
/// [`DEGENERACY_EPSILON`]) or if `pt` projects behind `start`, and `1.0` if it
/// projects beyond `end`.
#[inline]
pub fn project_point_segment_parameter(
    pt: &Point<Real>,
    start: &Point<Real>,
    end: &Point<Real>,
) -> Real {
    let seg = end - start;
    let dir = pt - start;
    let sqnseg = seg.norm_squared();
    let dot = seg.dot(&dir);

    if dot < 0.0 || sqnseg < DEGENERACY_EPSILON {
        0.0
    } else if dot > sqnseg {
        1.0
    } else {
        dot / sqnseg
    }
}
