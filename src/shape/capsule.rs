use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::{LocalChain, SupportChain};
use crate::utils;

/// A capsule shape defined as a round segment centered at `position`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Capsule {
    /// The center of the capsule spine.
    pub position: Point<Real>,
    /// The direction of the spine.
    pub axis: UnitVector<Real>,
    /// Half the length of the spine.
    pub half_height: Real,
    /// The radius of the capsule.
    pub radius: Real,
}

impl Capsule {
    /// Creates a new capsule with a spine of length `2 * half_height` along `axis`.
    #[inline]
    pub fn new(
        position: Point<Real>,
        axis: UnitVector<Real>,
        half_height: Real,
        radius: Real,
    ) -> Capsule {
        Capsule {
            position,
            axis,
            half_height,
            radius,
        }
    }

    /// The spine endpoint along `-axis`, relative to the capsule center.
    pub fn local_spine_start(&self) -> Point<Real> {
        Point::from(*self.axis * -self.half_height)
    }

    /// The spine endpoint along `+axis`, relative to the capsule center.
    pub fn local_spine_end(&self) -> Point<Real> {
        Point::from(*self.axis * self.half_height)
    }
}

impl SupportChain for Capsule {
    fn local_support_chain(&self, dir: &Vector<Real>) -> LocalChain {
        // Orient the spine so that both endpoints wind the same way as the other chains.
        let side = utils::sign(utils::perp(&self.axis, &-dir));
        let dy = *self.axis * self.half_height;

        let mut chain = LocalChain::new();
        chain.push(Point::from(dy * side));
        chain.push(Point::from(-dy * side));
        chain
    }
}
