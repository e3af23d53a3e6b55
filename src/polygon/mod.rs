//! `Polygon` struct: a sorted, meshable loop of points cut from a cube face
//! or from the cutting rectangle.

use crate::errors::GeometryError;
use crate::float_types::{Real, tolerance};
use crate::geometry::{bounding_rectangle, points, rectangle::Rectangle};
use nalgebra::{Point3, Vector3};

pub mod mesh;
pub mod sorting;

pub use mesh::{PolygonMesh, TextureFrame, TextureMapping};

/// Which part of the volume a polygon belongs to.
///
/// The six faces follow the viewer's convention: the viewer looks along +z,
/// so `Front` is the face at the smallest z, `Top` the face at the smallest y
/// and `Left` the face at the smallest x. `Slice` is the cross-section on
/// the cutting rectangle itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Top,
    Bottom,
    Left,
    Right,
    Back,
    Slice,
}

impl Side {
    /// The six faces of a box, in the order a `Cube` stores them.
    pub const FACES: [Side; 6] = [
        Side::Front,
        Side::Top,
        Side::Bottom,
        Side::Left,
        Side::Right,
        Side::Back,
    ];

    /// Spatial axes (0 = x, 1 = y, 2 = z) used as texture (u, v) on this side.
    /// The slice has no fixed axes and returns `None`.
    pub const fn texture_axes(&self) -> Option<(usize, usize)> {
        match self {
            Side::Front | Side::Back => Some((0, 1)),
            Side::Top | Side::Bottom => Some((0, 2)),
            Side::Left | Side::Right => Some((1, 2)),
            Side::Slice => None,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Side::Front => "front",
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
            Side::Back => "back",
            Side::Slice => "slice",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A planar polygon with at least 3 distinct, ordered points.
///
/// Built from an unordered point set: near-coincident points are merged, the
/// rest is sorted into a loop, and the minimum-area bounding rectangle used
/// for texture sampling is computed once.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point3<Real>>,
    side: Side,
    bounding_rectangle: Rectangle,
}

impl Polygon {
    /// Build a polygon from points in any order.
    ///
    /// `outward` orients the loop: the polygon winds anticlockwise around a
    /// normal that does not point against it. Without it the orientation is
    /// whatever the point set gives.
    ///
    /// # Errors
    /// [`GeometryError::TooFewPoints`] when fewer than 3 distinct points
    /// remain, [`GeometryError::Collinear`] when they do not span a plane.
    pub fn from_unordered(
        points: &[Point3<Real>],
        side: Side,
        outward: Option<&Vector3<Real>>,
    ) -> Result<Self, GeometryError> {
        let distinct = points::dedup_within(points, tolerance());
        if distinct.len() < 3 {
            return Err(GeometryError::TooFewPoints(distinct.len()));
        }

        let sorted = sorting::sort_points(&distinct, outward);
        let bounding_rectangle = bounding_rectangle::minimum_area_rectangle(&sorted)
            .ok_or(GeometryError::Collinear(sorted.len()))?;

        Ok(Polygon {
            points: sorted,
            side,
            bounding_rectangle,
        })
    }

    /// The ordered boundary points.
    pub fn points(&self) -> &[Point3<Real>] {
        &self.points
    }

    pub const fn side(&self) -> Side {
        self.side
    }

    /// Minimum-area rectangle containing the polygon, the default texture
    /// sampling window.
    pub const fn bounding_rectangle(&self) -> &Rectangle {
        &self.bounding_rectangle
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polygon has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn centroid(&self) -> Point3<Real> {
        points::centroid(&self.points)
    }

    /// Unit normal the loop winds anticlockwise around.
    pub fn normal(&self) -> Vector3<Real> {
        sorting::winding_normal(&self.points).normalize()
    }

    /// Enclosed area.
    pub fn area(&self) -> Real {
        sorting::winding_normal(&self.points).norm() / 2.0
    }
}
