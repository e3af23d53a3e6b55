//! Oriented planes in Hessian normal form.

use crate::errors::GeometryError;
use crate::float_types::{Real, tolerance};
use crate::geometry::{line::Line, rectangle::Rectangle};
use nalgebra::{Point3, Vector3};

/// A plane `normal · p = w` with a unit `normal`.
///
/// The half-space the normal points into is "in front of" the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Unit normal vector of the plane
    pub normal: Vector3<Real>,
    /// Distance from origin along normal (plane equation: n·p = w)
    pub w: Real,
}

impl Plane {
    /// Create a new plane from a normal vector and an offset.
    ///
    /// The normal is normalized, `w` is taken verbatim.
    pub fn from_normal(normal: Vector3<Real>, w: Real) -> Self {
        Plane {
            normal: normal.normalize(),
            w,
        }
    }

    /// Plane carrying a rectangle, oriented by the right-hand rule on its
    /// edges: `normal = normalize(u × v)`, `w = normal · p0`.
    pub fn from_rectangle(rectangle: &Rectangle) -> Result<Self, GeometryError> {
        let u = rectangle.u();
        let v = rectangle.v();
        let cross = u.cross(&v);
        if cross.norm() < tolerance() * tolerance() {
            return Err(GeometryError::DegenerateRectangle { u, v });
        }
        let normal = cross.normalize();
        let w = normal.dot(&rectangle.p0.coords);
        Ok(Plane { normal, w })
    }

    /// Get the plane normal
    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    /// The point of the plane closest to the origin.
    pub fn point_on_plane(&self) -> Point3<Real> {
        Point3::from(self.normal * (self.w / self.normal.norm_squared()))
    }

    /// Signed distance of `point` to the plane, positive in front of it.
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        (point - self.point_on_plane()).dot(&self.normal)
    }

    /// Whether `point` is strictly in front of the plane.
    pub fn is_in_front(&self, point: &Point3<Real>) -> bool {
        self.signed_distance(point) > 0.0
    }

    /// Infinite line shared by `self` and `other`, or `None` when the planes
    /// are parallel (including coincident).
    ///
    /// With `k = nA·nB`, the line passes through `c1·nA + c2·nB` where
    /// `c1 = (wA - wB·k) / (1 - k²)` and `c2 = (wB - wA·k) / (1 - k²)`, and runs
    /// along `nA × nB`.
    pub fn intersection_line(&self, other: &Plane) -> Option<Line> {
        let k = self.normal.dot(&other.normal);
        let denominator = 1.0 - k * k;
        if denominator.abs() < tolerance() * tolerance() {
            return None;
        }

        let c1 = (self.w - other.w * k) / denominator;
        let c2 = (other.w - self.w * k) / denominator;

        Some(Line::new(
            Point3::from(self.normal * c1 + other.normal * c2),
            self.normal.cross(&other.normal),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_is_signed_by_normal() {
        let plane = Plane::from_normal(Vector3::new(0.0, 0.0, 2.0), 1.0);
        assert_relative_eq!(plane.signed_distance(&Point3::new(5.0, 5.0, 3.0)), 2.0);
        assert_relative_eq!(plane.signed_distance(&Point3::new(0.0, 0.0, -1.0)), -2.0);
        assert!(!plane.is_in_front(&Point3::new(4.0, -4.0, 1.0)));
    }

    #[test]
    fn line_lies_on_both_planes() {
        let a = Plane::from_normal(Vector3::new(1.0, 1.0, 0.0), 2.0);
        let b = Plane::from_normal(Vector3::z(), -3.0);
        let line = a.intersection_line(&b).expect("planes are not parallel");
        for t in [-2.0, 0.0, 5.0] {
            let p = line.at(t);
            assert_relative_eq!(a.signed_distance(&p), 0.0, epsilon = 1e-9);
            assert_relative_eq!(b.signed_distance(&p), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn parallel_planes_have_no_line() {
        let a = Plane::from_normal(Vector3::y(), 0.0);
        let b = Plane::from_normal(-Vector3::y(), 4.0);
        assert!(a.intersection_line(&b).is_none());
        assert!(a.intersection_line(&a.clone()).is_none());
    }
}
