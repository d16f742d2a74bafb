use crate::math::{Point, Real, UnitVector, Vector, DEGENERACY_EPSILON};
use crate::shape::{Capsule, Disc, LocalChain, Rect, ShapeError, SupportChain};
use na::Unit;

/// Enum representing the type of a shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// A disc shape.
    Disc = 0,
    /// A capsule shape.
    Capsule,
    /// A rectangle with rounded corners.
    Rect,
}

/// A rounded convex shape placed in the plane.
///
/// Every shape is a convex core (a point, a segment or a rectangle) inflated
/// by a uniform rounding radius.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Shape {
    /// A disc.
    Disc(Disc),
    /// A capsule.
    Capsule(Capsule),
    /// A rounded rectangle.
    Rect(Rect),
}

impl Shape {
    /// Creates a disc of the given radius centered at `position`.
    pub fn disc(position: Point<Real>, radius: Real) -> Self {
        Shape::Disc(Disc::new(position, radius))
    }

    /// Creates a capsule whose spine goes from `position - axis * half_height`
    /// to `position + axis * half_height`.
    pub fn capsule(
        position: Point<Real>,
        axis: UnitVector<Real>,
        half_height: Real,
        radius: Real,
    ) -> Self {
        Shape::Capsule(Capsule::new(position, axis, half_height, radius))
    }

    /// Creates a rectangle oriented along `axis`, with rounded corners of radius `radius`.
    pub fn rect(
        position: Point<Real>,
        axis: UnitVector<Real>,
        half_width: Real,
        half_height: Real,
        radius: Real,
    ) -> Self {
        Shape::Rect(Rect::new(
            position,
            axis,
            Vector::new(half_width, half_height),
            radius,
        ))
    }

    /// Creates a disc after checking that its parameters are finite and its radius non-negative.
    pub fn try_disc(position: Point<Real>, radius: Real) -> Result<Self, ShapeError> {
        check_finite(&position.coords)?;
        check_radius(radius)?;
        Ok(Self::disc(position, radius))
    }

    /// Creates a capsule after validating its parameters.
    ///
    /// The `axis` does not need to be normalized but must not be degenerate.
    pub fn try_capsule(
        position: Point<Real>,
        axis: Vector<Real>,
        half_height: Real,
        radius: Real,
    ) -> Result<Self, ShapeError> {
        check_finite(&position.coords)?;
        let axis = check_axis(&axis)?;
        check_half_extent(half_height)?;
        check_radius(radius)?;
        Ok(Self::capsule(position, axis, half_height, radius))
    }

    /// Creates a rounded rectangle after validating its parameters.
    ///
    /// The `axis` does not need to be normalized but must not be degenerate.
    pub fn try_rect(
        position: Point<Real>,
        axis: Vector<Real>,
        half_width: Real,
        half_height: Real,
        radius: Real,
    ) -> Result<Self, ShapeError> {
        check_finite(&position.coords)?;
        let axis = check_axis(&axis)?;
        check_half_extent(half_width)?;
        check_half_extent(half_height)?;
        check_radius(radius)?;
        Ok(Self::rect(position, axis, half_width, half_height, radius))
    }

    /// The type of this shape.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Disc(_) => ShapeType::Disc,
            Shape::Capsule(_) => ShapeType::Capsule,
            Shape::Rect(_) => ShapeType::Rect,
        }
    }

    /// The center of this shape.
    pub fn position(&self) -> Point<Real> {
        match self {
            Shape::Disc(s) => s.position,
            Shape::Capsule(s) => s.position,
            Shape::Rect(s) => s.position,
        }
    }

    /// The local up direction of this shape. Always `+y` for discs.
    pub fn axis(&self) -> UnitVector<Real> {
        match self {
            Shape::Disc(_) => Vector::y_axis(),
            Shape::Capsule(s) => s.axis,
            Shape::Rect(s) => s.axis,
        }
    }

    /// The half-extents of the core of this shape.
    ///
    /// Zero for discs, `(0, half_height)` for capsules.
    pub fn half_extents(&self) -> Vector<Real> {
        match self {
            Shape::Disc(_) => Vector::zeros(),
            Shape::Capsule(s) => Vector::new(0.0, s.half_height),
            Shape::Rect(s) => s.half_extents,
        }
    }

    /// The rounding radius of this shape.
    pub fn radius(&self) -> Real {
        match self {
            Shape::Disc(s) => s.radius,
            Shape::Capsule(s) => s.radius,
            Shape::Rect(s) => s.radius,
        }
    }

    /// A copy of this shape moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector<Real>) -> Self {
        let mut result = *self;
        match &mut result {
            Shape::Disc(s) => s.position += *offset,
            Shape::Capsule(s) => s.position += *offset,
            Shape::Rect(s) => s.position += *offset,
        }
        result
    }
}

impl SupportChain for Shape {
    fn local_support_chain(&self, dir: &Vector<Real>) -> LocalChain {
        match self {
            Shape::Disc(s) => s.local_support_chain(dir),
            Shape::Capsule(s) => s.local_support_chain(dir),
            Shape::Rect(s) => s.local_support_chain(dir),
        }
    }
}

fn check_finite(v: &Vector<Real>) -> Result<(), ShapeError> {
    if v.iter().all(|e| e.is_finite()) {
        Ok(())
    } else {
        Err(ShapeError::NonFinite)
    }
}

fn check_radius(radius: Real) -> Result<(), ShapeError> {
    if !radius.is_finite() {
        Err(ShapeError::NonFinite)
    } else if radius < 0.0 {
        Err(ShapeError::NegativeRadius(radius))
    } else {
        Ok(())
    }
}

fn check_half_extent(extent: Real) -> Result<(), ShapeError> {
    if !extent.is_finite() {
        Err(ShapeError::NonFinite)
    } else if extent < 0.0 {
        Err(ShapeError::NegativeHalfExtent(extent))
    } else {
        Ok(())
    }
}

fn check_axis(axis: &Vector<Real>) -> Result<UnitVector<Real>, ShapeError> {
    check_finite(axis)?;
    Unit::try_new(*axis, DEGENERACY_EPSILON).ok_or(ShapeError::DegenerateAxis)
}
