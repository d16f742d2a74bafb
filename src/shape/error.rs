use crate::math::Real;

/// Error returned by the validating shape constructors.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A position, axis, extent or radius is NaN or infinite.
    #[error("the shape parameters contain a non-finite value.")]
    NonFinite,
    /// The rounding radius is negative.
    #[error("the rounding radius {0} is negative.")]
    NegativeRadius(Real),
    /// A half-extent is negative.
    #[error("the half-extent {0} is negative.")]
    NegativeHalfExtent(Real),
    /// The orientation axis is too short to be normalized.
    #[error("the orientation axis is too small to be normalized.")]
    DegenerateAxis,
}
