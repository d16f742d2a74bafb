//! Scalar and vector primitives shared by the shapes and the queries.

pub use self::inv::safe_inv;
pub use self::scalar_ops::{clamp, sign};
pub use self::vector_ops::{clamp_length, left, normalize_or, normalize_or_zero, perp, slerp};

mod inv;
mod scalar_ops;
mod vector_ops;
