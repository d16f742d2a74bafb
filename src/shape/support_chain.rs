//! Traits for shapes representable by a support chain.

use crate::math::{Point, Real, Vector};
use arrayvec::ArrayVec;

/// The maximum number of points of the support chain of a single shape.
pub const MAX_SUPPORT_CHAIN_LEN: usize = 3;

/// An ordered local-space polyline approximating the silhouette of a shape's core.
pub type LocalChain = ArrayVec<Point<Real>, MAX_SUPPORT_CHAIN_LEN>;

/// Trait of shapes whose core silhouette facing a direction can be approximated
/// by a short polyline.
///
/// The rounding radius of the shape is not part of the chain: it is added back
/// as a uniform offset by the queries.
pub trait SupportChain {
    /// Evaluates the support chain of this shape facing `-dir`, in local space.
    ///
    /// Only the sign structure of `dir` matters, it does not need to be normalized.
    /// The points are ordered so that consecutive chains of different shapes
    /// built with the same `dir` can be merged by [`crate::query::details::minkowski_chain`].
    fn local_support_chain(&self, dir: &Vector<Real>) -> LocalChain;
}
