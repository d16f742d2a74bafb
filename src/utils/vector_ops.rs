//! 2D vector operations not provided directly by `nalgebra`.

use crate::math::{Real, Vector, DEGENERACY_EPSILON};
use crate::utils::scalar_ops;
use na::ComplexField;

/// The left-perpendicular `(a.y, -a.x)` of `a`.
#[inline]
pub fn left(a: &Vector<Real>) -> Vector<Real> {
    Vector::new(a.y, -a.x)
}

/// The 2D cross product used by the support chains: `a.y * b.x - a.x * b.y`.
///
/// This is the component of `b` along [`left`]`(a)`. Note that this is the
/// opposite of `nalgebra`'s `a.perp(&b)`.
#[inline]
pub fn perp(a: &Vector<Real>, b: &Vector<Real>) -> Real {
    a.y * b.x - a.x * b.y
}

/// Normalizes `v`, returning `fallback` if `|v|` does not exceed [`DEGENERACY_EPSILON`].
#[inline]
pub fn normalize_or(v: &Vector<Real>, fallback: Vector<Real>) -> Vector<Real> {
    let len = v.norm();
    if len > DEGENERACY_EPSILON {
        v / len
    } else {
        fallback
    }
}

/// Normalizes `v`, returning the zero vector if `|v|` does not exceed [`DEGENERACY_EPSILON`].
#[inline]
pub fn normalize_or_zero(v: &Vector<Real>) -> Vector<Real> {
    let len = v.norm();
    let inv_len = if len > DEGENERACY_EPSILON {
        1.0 / len
    } else {
        0.0
    };
    v * inv_len
}

/// Spherical interpolation between the unit vectors `a` and `b`.
///
/// The result is renormalized, so it stays on the unit circle even for
/// slightly non-unit inputs. Returns the zero vector if `a` and `b` are
/// opposite.
pub fn slerp(a: &Vector<Real>, b: &Vector<Real>, t: Real) -> Vector<Real> {
    let k = ComplexField::acos(scalar_ops::clamp(a.dot(b), -1.0, 1.0));
    let t0 = ComplexField::sin(k * (1.0 - t));
    let t1 = ComplexField::sin(k * t);
    normalize_or_zero(&(a * t0 + b * t1))
}

/// Scales `v` down so that its length does not exceed `max_len`.
pub fn clamp_length(v: &Vector<Real>, max_len: Real) -> Vector<Real> {
    let len_sq = v.norm_squared();
    if len_sq > max_len * max_len {
        v * max_len / ComplexField::sqrt(len_sq)
    } else {
        *v
    }
}
