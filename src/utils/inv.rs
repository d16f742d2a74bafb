use crate::math::{Real, DEGENERACY_EPSILON};
use na::ComplexField;

/// The inverse of `val`, or zero if `|val|` does not exceed [`DEGENERACY_EPSILON`].
pub fn safe_inv(val: Real) -> Real {
    if ComplexField::abs(val) > DEGENERACY_EPSILON {
        1.0 / val
    } else {
        0.0
    }
}
