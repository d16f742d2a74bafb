use crate::math::{Point, Real, Vector};
use crate::shape::{LocalChain, SupportChain};

/// A disc shape: a point core inflated by its radius.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Disc {
    /// The center of the disc.
    pub position: Point<Real>,
    /// The radius of the disc.
    pub radius: Real,
}

impl Disc {
    /// Creates a new disc centered at `position` with the given radius.
    #[inline]
    pub fn new(position: Point<Real>, radius: Real) -> Disc {
        Disc { position, radius }
    }
}

impl SupportChain for Disc {
    #[inline]
    fn local_support_chain(&self, _: &Vector<Real>) -> LocalChain {
        let mut chain = LocalChain::new();
        chain.push(Point::origin());
        chain
    }
}
