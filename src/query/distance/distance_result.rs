use crate::math::{Real, Vector, DEGENERACY_EPSILON};
use approx::{AbsDiffEq, RelativeEq};

/// The result of a nearest-distance query.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DistanceResult {
    /// The unit direction from the second shape toward the first one.
    ///
    /// Set to `(1, 0)` when the cores are too close for the direction to be defined.
    pub normal: Vector<Real>,
    /// The signed distance between the rounded boundaries. Negative when the shapes overlap.
    pub distance: Real,
}

impl DistanceResult {
    /// Creates a new distance result.
    #[inline]
    pub fn new(normal: Vector<Real>, distance: Real) -> Self {
        Self { normal, distance }
    }

    /// Builds the result from the displacement between the two nearest core
    /// points, minus the rounding radius of both shapes.
    #[inline]
    pub fn from_displacement(displacement: &Vector<Real>, total_radius: Real) -> Self {
        let dist = displacement.norm();
        let normal = if dist > DEGENERACY_EPSILON {
            displacement / dist
        } else {
            log::debug!("Degenerate separation between the shape cores, using the default normal.");
            Vector::x()
        };

        Self::new(normal, dist - total_radius)
    }

    /// The same result seen from the other shape: the normal is flipped.
    #[inline]
    #[must_use]
    pub fn swapped(self) -> Self {
        Self::new(-self.normal, self.distance)
    }
}

impl AbsDiffEq for DistanceResult {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        abs_diff_eq!(self.normal, other.normal, epsilon = epsilon)
            && abs_diff_eq!(self.distance, other.distance, epsilon = epsilon)
    }
}

impl RelativeEq for DistanceResult {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        relative_eq!(
            self.normal,
            other.normal,
            epsilon = epsilon,
            max_relative = max_relative
        ) && relative_eq!(
            self.distance,
            other.distance,
            epsilon = epsilon,
            max_relative = max_relative
        )
    }
}
