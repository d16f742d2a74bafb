//! Scalar helpers with explicit NaN and signed-zero behavior.

use crate::math::Real;

/// `-1.0` if `x` is strictly negative, `1.0` otherwise.
///
/// Zero (of either sign) and NaN map to `1.0`.
#[inline]
pub fn sign(x: Real) -> Real {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Clamps `x` to `[min, max]`, mapping NaN to `max`.
///
/// Unlike [`f32::clamp`] this never propagates a NaN: infinite or undefined
/// quadratic roots end up on the upper bound of the time window.
#[inline]
pub fn clamp(x: Real, min: Real, max: Real) -> Real {
    let x = if x < min { min } else { x };
    if x < max {
        x
    } else {
        max
    }
}
