use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::{LocalChain, SupportChain};
use crate::utils;

/// An oriented rectangle with rounded corners.
///
/// The `axis` is the local "up" direction: `half_extents.y` is measured along
/// it and `half_extents.x` along its left-perpendicular.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Rect {
    /// The center of the rectangle.
    pub position: Point<Real>,
    /// The local up direction.
    pub axis: UnitVector<Real>,
    /// The half-width (`x`) and half-height (`y`) of the rectangle core.
    pub half_extents: Vector<Real>,
    /// The radius of the rounded border.
    pub radius: Real,
}

impl Rect {
    /// Creates a new rectangle from its half-extents and border radius.
    #[inline]
    pub fn new(
        position: Point<Real>,
        axis: UnitVector<Real>,
        half_extents: Vector<Real>,
        radius: Real,
    ) -> Rect {
        Rect {
            position,
            axis,
            half_extents,
            radius,
        }
    }

    /// The quadrant of the corner pointing the most toward `-dir`.
    ///
    /// The components are the signs (`±1`) of that corner along the local
    /// left-perpendicular and up axes.
    #[inline]
    pub fn facing_corner(&self, dir: &Vector<Real>) -> (Real, Real) {
        let cx = utils::sign(utils::perp(&self.axis, &-dir));
        let cy = utils::sign(self.axis.dot(&-dir));
        (cx, cy)
    }
}

impl SupportChain for Rect {
    fn local_support_chain(&self, dir: &Vector<Real>) -> LocalChain {
        let (cx, cy) = self.facing_corner(dir);
        let dx = utils::left(&self.axis) * self.half_extents.x;
        let dy = *self.axis * self.half_extents.y;

        // The two edges around the facing corner.
        LocalChain::from([
            Point::from(dx * -cy + dy * cx),
            Point::from(dx * cx + dy * cy),
            Point::from(dx * cy + dy * -cx),
        ])
    }
}
