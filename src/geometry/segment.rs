use crate::float_types::Real;
use nalgebra::Point3;

/// A straight segment between two points.
///
/// Equality is undirected: `Segment::new(a, b) == Segment::new(b, a)`.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub a: Point3<Real>,
    pub b: Point3<Real>,
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl Segment {
    pub const fn new(a: Point3<Real>, b: Point3<Real>) -> Self {
        Segment { a, b }
    }

    pub fn length(&self) -> Real {
        nalgebra::distance(&self.a, &self.b)
    }

    /// Whether `point` lies on the segment, up to `tolerance`.
    ///
    /// Measured as `|ap| + |pb| - |ab|`, which is zero exactly on the segment
    /// and grows with the distance to it.
    pub fn contains_point(&self, point: &Point3<Real>, tolerance: Real) -> bool {
        let ab = self.length();
        let ap = nalgebra::distance(&self.a, point);
        let pb = nalgebra::distance(point, &self.b);
        (ap + pb - ab).abs() < tolerance
    }

    /// Same segment with both endpoints within `tolerance` of `other`'s,
    /// in either order.
    pub fn approx_eq(&self, other: &Segment, tolerance: Real) -> bool {
        let close = |p: &Point3<Real>, q: &Point3<Real>| nalgebra::distance(p, q) < tolerance;
        (close(&self.a, &other.a) && close(&self.b, &other.b))
            || (close(&self.a, &other.b) && close(&self.b, &other.a))
    }
}
