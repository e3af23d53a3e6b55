//! A trait for anything that can be represented by triangles
use crate::vertex::Vertex;
use crate::volume::viewer::Frame;
use crate::polygon::PolygonMesh;
use nalgebra::Vector3;

/// A triangulated 3D surface.
///
/// Anything that can present itself as a bunch of triangles in 3D
/// can automatically use all the triangle-based IO backends.
pub trait Triangulated3D {
    /// Call `f` for each triangle.
    ///
    /// The triangle is `[v0, v1, v2]` with positions+normals.
    fn visit_triangles<F>(&self, f: F)
    where
        F: FnMut([Vertex; 3]);
}

impl Triangulated3D for PolygonMesh {
    /// Every corner carries the facet normal of its triangle.
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for [a, b, c] in self.triangles() {
            let normal = (b - a).cross(&(c - a)).try_normalize(0.0).unwrap_or_else(Vector3::zeros);
            f([a, b, c].map(|pos| Vertex::new(pos, normal)));
        }
    }
}

impl Triangulated3D for Frame {
    fn visit_triangles<F>(&self, mut f: F)
    where
        F: FnMut([Vertex; 3]),
    {
        for textured in &self.meshes {
            textured.mesh.visit_triangles(&mut f);
        }
    }
}
