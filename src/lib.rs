/*!
approach2d
==========

**approach2d** answers two questions between pairs of rounded convex 2D
shapes (discs, capsules and rounded oriented rectangles):

* the signed nearest distance and separating normal between two static shapes,
  see [`query::nearest_distance()`];
* the time of first contact, or of closest approach, between two shapes moving
  with constant linear velocities over a bounded time window, see
  [`query::closest_point_of_approach()`].

Both are the building blocks of local avoidance for moving agents. The
[`steering`] module shows how they combine into a simple avoidance rule.

Every query is a pure function over `Copy` inputs: no allocation, no shared
state, and bit-identical results for identical inputs.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(all(feature = "f32", feature = "f64"))]
core::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;
pub mod steering;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point2, UnitVector2, Vector2};

    /// Threshold under which lengths, squared lengths and quadratic leading
    /// coefficients are treated as zero.
    pub const DEGENERACY_EPSILON: Real = 1.0e-6;

    /// The point type.
    pub use Point2 as Point;

    /// The vector type.
    pub use Vector2 as Vector;

    /// The unit vector type.
    pub use UnitVector2 as UnitVector;
}
