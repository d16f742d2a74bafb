use crate::math::{Point, Real, Vector, DEGENERACY_EPSILON};
use na::ComplexField;

/// Time of impact of a moving point against the body of a static capsule.
///
/// The point at `pos` moves at `vel` toward the segment `[start, end]`
/// inflated by `radius`. Only contacts with the straight part of the capsule
/// are reported: the hit is accepted only if it projects strictly inside the
/// segment, the rounded caps being handled separately with
/// [`time_of_impact_point_disc`](super::time_of_impact_point_disc).
///
/// Returns `None` when the leading coefficient of the quadratic does not
/// exceed [`DEGENERACY_EPSILON`], i.e. when the point does not move relative to
/// the segment, moves parallel to it, or when the segment is degenerate.
pub fn time_of_impact_point_segment_body(
    pos: &Point<Real>,
    vel: &Vector<Real>,
    radius: Real,
    start: &Point<Real>,
    end: &Point<Real>,
) -> Option<Real> {
    let quadratic = SweptSegmentQuadratic::new(pos, vel, radius, start, end);

    if ComplexField::abs(quadratic.a) > DEGENERACY_EPSILON {
        let t = (-quadratic.b - ComplexField::sqrt(quadratic.h)) / quadratic.a;

        if quadratic.is_on_body(t) {
            return Some(t);
        }
    }

    None
}

/// Coefficients of `a t² + 2 b t + c = 0`, the sweep of a point against the
/// infinite line through a segment offset by a radius.
///
/// All terms are scaled by the squared segment length to avoid a division.
pub(super) struct SweptSegmentQuadratic {
    pub seg_sq: Real,
    pub dir_vel: Real,
    pub dir_rel_pos: Real,
    pub a: Real,
    pub b: Real,
    pub c: Real,
    /// The discriminant, clamped to zero.
    pub h: Real,
}

impl SweptSegmentQuadratic {
    #[inline]
    pub fn new(
        pos: &Point<Real>,
        vel: &Vector<Real>,
        radius: Real,
        start: &Point<Real>,
        end: &Point<Real>,
    ) -> Self {
        let seg_dir = end - start;
        let rel_pos = pos - start;
        let vel_sq = vel.norm_squared();
        let seg_sq = seg_dir.norm_squared();
        let dir_vel = seg_dir.dot(vel);
        let dir_rel_pos = seg_dir.dot(&rel_pos);
        let vel_rel_pos = vel.dot(&rel_pos);
        let rel_pos_sq = rel_pos.norm_squared();

        let a = seg_sq * vel_sq - dir_vel * dir_vel;
        let b = seg_sq * vel_rel_pos - dir_rel_pos * dir_vel;
        let c = seg_sq * rel_pos_sq - dir_rel_pos * dir_rel_pos - radius * radius * seg_sq;
        let h = (b * b - a * c).max(0.0);

        Self {
            seg_sq,
            dir_vel,
            dir_rel_pos,
            a,
            b,
            c,
            h,
        }
    }

    /// Does the point at time `t` project strictly inside the segment?
    #[inline]
    pub fn is_on_body(&self, t: Real) -> bool {
        let y = self.projection_at(t);
        y > 0.0 && y < self.seg_sq
    }

    /// The projection of the point at time `t` on the segment direction, scaled by its length.
    #[inline]
    pub fn projection_at(&self, t: Real) -> Real {
        self.dir_rel_pos + t * self.dir_vel
    }
}
