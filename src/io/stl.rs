use crate::polygon::PolygonMesh;
use crate::triangulated::Triangulated3D;
use crate::volume::viewer::Frame;
use std::io::Cursor;

/// Export to ASCII STL
/// Convert any triangulated surface to an **ASCII STL** string with the given `name`.
///
/// ```rust
/// # use volslice::{Pose, SliceViewer, TextureConfig, VolumeDescriptor, VoxelGrid};
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let grid = VoxelGrid::from_fn(8, 8, 8, |_, _, _| image::Rgb([200, 200, 200]));
/// let descriptor = VolumeDescriptor::isotropic(8, 8, 8)?;
/// let mut text = String::new();
/// let mut viewer = SliceViewer::new(descriptor, grid, |frame: volslice::Frame| {
///     text = volslice::io::to_stl_ascii(&frame, "slice");
/// }, TextureConfig::default())?;
/// viewer.set_pose(Pose::new(4.0, 0.0, 0.0));
/// drop(viewer);
/// assert!(text.starts_with("solid slice"));
/// # Ok(())
/// # }
/// ```
pub fn to_stl_ascii<T: Triangulated3D + ?Sized>(shape: &T, name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("solid {name}\n"));

    shape.visit_triangles(|tri| {
        let n = tri[0].normal;
        out.push_str(&format!("  facet normal {:.6} {:.6} {:.6}\n", n.x, n.y, n.z));
        out.push_str("    outer loop\n");
        for v in &tri {
            let p = v.pos;
            out.push_str(&format!("      vertex {:.6} {:.6} {:.6}\n", p.x, p.y, p.z));
        }
        out.push_str("    endloop\n");
        out.push_str("  endfacet\n");
    });

    out.push_str(&format!("endsolid {name}\n"));
    out
}

/// Export to BINARY STL (returns `Vec<u8>`)
///
/// The binary format has no room for a name; the 80-byte header is left
/// blank.
pub fn to_stl_binary<T: Triangulated3D + ?Sized>(shape: &T) -> std::io::Result<Vec<u8>> {
    use stl_io::{Normal, Triangle, Vertex, write_stl};

    let mut triangles = Vec::<Triangle>::new();

    shape.visit_triangles(|tri| {
        let n = tri[0].normal;
        #[allow(clippy::unnecessary_cast)]
        {
            triangles.push(Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri.map(|v| {
                    let p = v.pos;
                    Vertex::new([p.x as f32, p.y as f32, p.z as f32])
                }),
            });
        }
    });

    let mut cursor = Cursor::new(Vec::new());
    write_stl(&mut cursor, triangles.iter())?;
    Ok(cursor.into_inner())
}

impl PolygonMesh {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }
    pub fn to_stl_binary(&self) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self)
    }
}

impl Frame {
    pub fn to_stl_ascii(&self, name: &str) -> String {
        self::to_stl_ascii(self, name)
    }
    pub fn to_stl_binary(&self) -> std::io::Result<Vec<u8>> {
        self::to_stl_binary(self)
    }
}
