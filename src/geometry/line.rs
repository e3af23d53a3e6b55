use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// An infinite line through `point` along `direction`.
///
/// The direction is kept as computed (typically the cross product of two
/// plane normals); callers normalize it when they need a unit vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub point: Point3<Real>,
    pub direction: Vector3<Real>,
}

impl Line {
    pub const fn new(point: Point3<Real>, direction: Vector3<Real>) -> Self {
        Line { point, direction }
    }

    /// Point at parameter `t`, `point + t * direction`.
    pub fn at(&self, t: Real) -> Point3<Real> {
        self.point + self.direction * t
    }
}
