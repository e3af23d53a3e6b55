//! Fan triangulation of polygons and texture coordinate assignment.
//!
//! The output is plain data (positions, texture coordinates and triangle
//! indices) so that any renderer can consume it.

use crate::float_types::{Real, tolerance};
use crate::geometry::rectangle::Rectangle;
use crate::polygon::{Polygon, Side};
use nalgebra::{Point3, Vector3};

/// Triangle mesh of one polygon.
///
/// `vertices[0]` is the polygon centroid and `vertices[1..]` its boundary in
/// loop order; `tex_coords` runs parallel to `vertices`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolygonMesh {
    pub vertices: Vec<Point3<Real>>,
    pub tex_coords: Vec<[Real; 2]>,
    pub faces: Vec<[u32; 3]>,
}

impl PolygonMesh {
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Corner positions of every triangle.
    pub fn triangles(&self) -> impl Iterator<Item = [Point3<Real>; 3]> + '_ {
        self.faces.iter().map(|face| face.map(|i| self.vertices[i as usize]))
    }
}

/// How texture coordinates are derived, which also fixes the window the
/// texture is sampled over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureMapping {
    /// Coordinates along the edges of the minimum-area bounding rectangle.
    #[default]
    BoundingRectangle,
    /// Coordinates along the axes of the polygon's [`Side`], normalized by the
    /// polygon's own extent.
    SideAxes,
}

/// Two orthonormal in-plane directions used as texture axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureFrame {
    pub u: Vector3<Real>,
    pub v: Vector3<Real>,
}

/// Fan of triangles around `center`: vertex 0 is the center, the boundary
/// follows, and triangle `i` is `(0, i + 1, (i + 1) % n + 1)`.
///
/// Winding follows the boundary order, so a loop sorted anticlockwise around
/// a normal gives triangles facing along that normal.
pub fn fan_triangulate(center: Point3<Real>, boundary: &[Point3<Real>]) -> (Vec<Point3<Real>>, Vec<[u32; 3]>) {
    let n = boundary.len() as u32;
    let mut vertices = Vec::with_capacity(boundary.len() + 1);
    vertices.push(center);
    vertices.extend_from_slice(boundary);

    let faces = (0..n).map(|i| [0, i + 1, (i + 1) % n + 1]).collect();
    (vertices, faces)
}

/// Coordinates of `point` along the edges of `window`, 0 at `p0` and 1 at
/// the far side of each edge.
fn window_coordinates(window: &Rectangle, point: &Point3<Real>) -> [Real; 2] {
    let offset = point - window.p0;
    let along = |edge: Vector3<Real>| {
        let length_squared = edge.norm_squared();
        if length_squared > 0.0 {
            offset.dot(&edge) / length_squared
        } else {
            0.0
        }
    };
    [along(window.u()), along(window.v())]
}

impl Polygon {
    /// Fan mesh with texture coordinates along the axes of the polygon's
    /// side, normalized to `[0, 1]` by the polygon's own extent.
    pub fn mesh(&self) -> PolygonMesh {
        self.mesh_with(TextureMapping::SideAxes)
    }

    /// Fan mesh with texture coordinates along the polygon's minimum-area
    /// bounding rectangle, matching a texture sampled over that rectangle.
    pub fn mesh_in_bounding_rectangle(&self) -> PolygonMesh {
        self.mesh_with(TextureMapping::BoundingRectangle)
    }

    pub fn mesh_with(&self, mapping: TextureMapping) -> PolygonMesh {
        let window = self.sampling_window(mapping);
        let (vertices, faces) = fan_triangulate(self.centroid(), self.points());
        let tex_coords = vertices.iter().map(|p| window_coordinates(&window, p)).collect();
        PolygonMesh {
            vertices,
            tex_coords,
            faces,
        }
    }

    /// Rectangle the texture of this polygon is sampled over; texture
    /// coordinates of [`Polygon::mesh_with`] are relative to it.
    pub fn sampling_window(&self, mapping: TextureMapping) -> Rectangle {
        match mapping {
            TextureMapping::BoundingRectangle => *self.bounding_rectangle(),
            TextureMapping::SideAxes => self.extent_along(&self.texture_frame()),
        }
    }

    /// Texture axes of this polygon.
    ///
    /// Cube faces use two coordinate axes. The slice uses a local frame: the
    /// boundary point with the smallest y and the edges to its two neighbours,
    /// orthonormalized. That frame is only known to suit quadrilateral
    /// slices; other slices log a warning, and a degenerate frame falls back
    /// to the bounding rectangle's edges.
    pub fn texture_frame(&self) -> TextureFrame {
        if let Some((first, second)) = self.side().texture_axes() {
            let mut u = Vector3::zeros();
            let mut v = Vector3::zeros();
            u[first] = 1.0;
            v[second] = 1.0;
            return TextureFrame { u, v };
        }

        if self.len() != 4 {
            log::warn!(
                "slice polygon has {} points; its local texture frame is only reliable for quadrilaterals",
                self.len()
            );
        }

        self.local_frame().unwrap_or_else(|| {
            log::warn!("slice texture frame is degenerate, using the bounding rectangle edges");
            let rectangle = self.bounding_rectangle();
            TextureFrame {
                u: rectangle.u().normalize(),
                v: rectangle.v().normalize(),
            }
        })
    }

    fn local_frame(&self) -> Option<TextureFrame> {
        let points = self.points();
        let n = points.len();
        let (k, corner) = points
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.y.total_cmp(&b.1.y))?;

        let next = points[(k + 1) % n] - corner;
        let previous = points[(k + n - 1) % n] - corner;
        if next.norm() < tolerance() {
            return None;
        }
        let u = next.normalize();
        let across = previous - u * u.dot(&previous);
        if across.norm() < tolerance() {
            return None;
        }
        Some(TextureFrame {
            u,
            v: across.normalize(),
        })
    }

    /// Tightest rectangle around the polygon with edges along `frame`.
    fn extent_along(&self, frame: &TextureFrame) -> Rectangle {
        // measured from a vertex so the window lies in the polygon plane
        let origin = self.points()[0];
        let (mut min_u, mut max_u, mut min_v, mut max_v) = (Real::MAX, Real::MIN, Real::MAX, Real::MIN);
        for p in self.points() {
            let a = frame.u.dot(&(p - origin));
            let b = frame.v.dot(&(p - origin));
            min_u = min_u.min(a);
            max_u = max_u.max(a);
            min_v = min_v.min(b);
            max_v = max_v.max(b);
        }

        Rectangle::new(
            origin + frame.u * min_u + frame.v * min_v,
            origin + frame.u * max_u + frame.v * min_v,
            origin + frame.u * max_u + frame.v * max_v,
        )
    }

    /// Whether this polygon is the cross-section on the cutting rectangle.
    pub fn is_slice(&self) -> bool {
        self.side() == Side::Slice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_closes_the_loop() {
        let boundary = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let (vertices, faces) = fan_triangulate(Point3::new(1.0 / 3.0, 1.0 / 3.0, 0.0), &boundary);
        assert_eq!(vertices.len(), 4);
        assert_eq!(faces, vec![[0, 1, 2], [0, 2, 3], [0, 3, 1]]);
    }
}
