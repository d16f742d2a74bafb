//! Minkowski sum of two support chains.

use crate::math::{Point, Real};
use crate::utils;
use arrayvec::ArrayVec;
use num::Zero;

/// The maximum number of points of a merged chain.
pub const MAX_MINKOWSKI_CHAIN_LEN: usize = 5;

/// One of the two chains given to [`minkowski_chain`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChainOperand {
    /// The first chain.
    A,
    /// The second chain.
    B,
}

/// Where a vertex of a [`MinkowskiChain`] comes from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChainVertexSource {
    /// The first vertex, sum of the first points of both chains.
    Seed,
    /// A vertex reached by walking along an edge of one of the chains.
    Edge {
        /// The chain the edge belongs to.
        operand: ChainOperand,
        /// The index, in that chain, of the point the edge ends at.
        end: usize,
    },
}

/// The chain of the Minkowski sum of two support chains.
///
/// Each vertex remembers which input edge produced it. This is only meant for
/// introspection: the queries only read the points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MinkowskiChain {
    points: ArrayVec<Point<Real>, MAX_MINKOWSKI_CHAIN_LEN>,
    sources: ArrayVec<ChainVertexSource, MAX_MINKOWSKI_CHAIN_LEN>,
}

impl MinkowskiChain {
    /// The vertices of this chain.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// The origin of each vertex of this chain.
    #[inline]
    pub fn sources(&self) -> &[ChainVertexSource] {
        &self.sources
    }

    /// The number of vertices of this chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is this chain empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates through the segments joining consecutive vertices.
    pub fn segments(&self) -> impl Iterator<Item = (Point<Real>, Point<Real>)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    fn push(&mut self, pt: Point<Real>, source: ChainVertexSource) {
        self.points.push(pt);
        self.sources.push(source);
    }
}

/// Merges two support chains into the chain of their Minkowski sum.
///
/// Both chains must be ordered as produced by
/// [`SupportChain::local_support_chain`](crate::shape::SupportChain::local_support_chain)
/// with the same direction: consecutive edges turn the same way, so the
/// edges of both chains can be merged by comparing their cross products, like
/// two sorted lists. Zero-length edges are taken as soon as they are met,
/// whatever the other chain holds. The result has at most
/// `min(MAX_MINKOWSKI_CHAIN_LEN, a.len() + b.len() - 1)` points. It is empty if
/// one of the inputs is empty.
pub fn minkowski_chain(a: &[Point<Real>], b: &[Point<Real>]) -> MinkowskiChain {
    let mut result = MinkowskiChain::default();

    let (Some(a0), Some(b0)) = (a.first(), b.first()) else {
        return result;
    };

    result.push(a0 + b0.coords, ChainVertexSource::Seed);

    let mut ia = 0;
    let mut ib = 0;

    while !result.points.is_full() {
        let ian = ia + 1;
        let ibn = ib + 1;

        let take_a = match (ian < a.len(), ibn < b.len()) {
            // Both chains have been consumed.
            (false, false) => break,
            (false, true) => false,
            (true, false) => true,
            (true, true) => {
                let edge_a = a[ian] - a[ia];
                let edge_b = b[ibn] - b[ib];
                // Degenerate extents yield zero-length edges.
                if edge_a.is_zero() {
                    true
                } else if edge_b.is_zero() {
                    false
                } else {
                    utils::perp(&edge_a, &edge_b) >= 0.0
                }
            }
        };

        let last = result.points[result.points.len() - 1];

        if take_a {
            let source = ChainVertexSource::Edge {
                operand: ChainOperand::A,
                end: ian,
            };
            result.push(last + (a[ian] - a[ia]), source);
            ia = ian;
        } else {
            let source = ChainVertexSource::Edge {
                operand: ChainOperand::B,
                end: ibn,
            };
            result.push(last + (b[ibn] - b[ib]), source);
            ib = ibn;
        }
    }

    result
}
