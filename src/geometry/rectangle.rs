//! Finite oriented rectangles and the clipping operations built on them.

use crate::errors::GeometryError;
use crate::float_types::{ROUNDING_DECIMALS, Real};
use crate::geometry::{intersection, plane::Plane, points, segment::Segment};
use nalgebra::{Matrix4, Point3, Vector3};

/// A rectangle in 3D space given by three consecutive corners.
///
/// `p0`, `p1` and `p2` follow each other around the boundary (clockwise or
/// anticlockwise, seen from any side); the fourth corner is derived as
/// `p3 = p0 + (p2 - p1)`. The edges `u = p1 - p0` and `v = p2 - p1` orient the
/// rectangle: its plane normal is `u × v`.
///
/// Nothing checks that `u` and `v` are perpendicular, so a parallelogram is
/// accepted too. Zero or parallel edges make the rectangle degenerate, which
/// [`Rectangle::plane`] reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub p0: Point3<Real>,
    pub p1: Point3<Real>,
    pub p2: Point3<Real>,
}

impl Rectangle {
    pub const fn new(p0: Point3<Real>, p1: Point3<Real>, p2: Point3<Real>) -> Self {
        Rectangle { p0, p1, p2 }
    }

    /// Rectangle spanned from `origin` by the edges `u` then `v`.
    pub fn from_origin_and_edges(
        origin: Point3<Real>,
        u: Vector3<Real>,
        v: Vector3<Real>,
    ) -> Self {
        Rectangle::new(origin, origin + u, origin + u + v)
    }

    /// The corner following `p2`.
    pub fn p3(&self) -> Point3<Real> {
        self.p0 + (self.p2 - self.p1)
    }

    /// `p1 - p0`, the "width" edge.
    pub fn u(&self) -> Vector3<Real> {
        self.p1 - self.p0
    }

    /// `p2 - p1`, the "height" edge.
    pub fn v(&self) -> Vector3<Real> {
        self.p2 - self.p1
    }

    pub fn corners(&self) -> [Point3<Real>; 4] {
        [self.p0, self.p1, self.p2, self.p3()]
    }

    /// The four boundary segments, in corner order.
    pub fn edges(&self) -> [Segment; 4] {
        let p3 = self.p3();
        [
            Segment::new(self.p0, self.p1),
            Segment::new(self.p1, self.p2),
            Segment::new(self.p2, p3),
            Segment::new(p3, self.p0),
        ]
    }

    pub fn plane(&self) -> Result<Plane, GeometryError> {
        Plane::from_rectangle(self)
    }

    pub fn area(&self) -> Real {
        self.u().cross(&self.v()).norm()
    }

    pub fn center(&self) -> Point3<Real> {
        nalgebra::center(&self.p0, &self.p2)
    }

    /// Copy of this rectangle with `transform` applied to its corners.
    pub fn transform(&self, transform: &Matrix4<Real>) -> Self {
        self.map_corners(|p| transform.transform_point(&p))
    }

    /// Copy of this rectangle with every defining corner passed through `f`.
    pub fn map_corners(&self, mut f: impl FnMut(Point3<Real>) -> Point3<Real>) -> Self {
        Rectangle::new(f(self.p0), f(self.p1), f(self.p2))
    }

    /// Unordered points outlining the part of this rectangle located in front
    /// of `cutter` (on the side its normal points to).
    ///
    /// These are the corners strictly in front of the cutter's plane plus the
    /// two ends of the intersection segment when the rectangles cross. The
    /// result has 0 to 6 points; fewer than 3 cannot form a polygon. A
    /// degenerate cutter yields nothing.
    pub fn part_in_front_of(&self, cutter: &Rectangle) -> Vec<Point3<Real>> {
        let Ok(plane) = cutter.plane() else {
            return Vec::new();
        };

        let mut points: Vec<Point3<Real>> = self
            .corners()
            .into_iter()
            .filter(|p| plane.is_in_front(p))
            .collect();

        if let Some(segment) = intersection::find_intersection(self, cutter) {
            points.push(segment.a);
            points.push(segment.b);
        }
        points
    }

    /// Unordered points outlining the part of this rectangle inside the box
    /// whose faces are `sides`.
    ///
    /// Every face crossing this rectangle contributes the two ends of their
    /// intersection segment. Ends found from two adjacent faces land on the
    /// shared edge with different rounding errors, so points that agree to
    /// [`ROUNDING_DECIMALS`] digits count as one. The first is kept as
    /// computed, so it matches the clipped face exactly.
    pub fn part_inside<'a>(&self, sides: impl IntoIterator<Item = &'a Rectangle>) -> Vec<Point3<Real>> {
        let endpoints = sides
            .into_iter()
            .filter_map(|side| intersection::find_intersection(side, self))
            .flat_map(|segment| [segment.a, segment.b]);
        points::dedup_rounded(endpoints, ROUNDING_DECIMALS)
    }
}
