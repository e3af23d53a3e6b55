//! Affine map from scene space to voxel coordinates.

use crate::float_types::Real;
use crate::volume::descriptor::VolumeDescriptor;
use nalgebra::{Matrix4, Point3, Vector3};

/// Maps a point of the box centred at the origin onto voxel coordinates.
///
/// Each axis is stretched from the physical extent `[-L/2, L/2]` onto the
/// voxel index range `[0, n - 1]`. The z axis is reversed: the face nearest
/// the viewer (`z = -D/2`) shows the last plane of the stack.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceToPixel {
    matrix: Matrix4<Real>,
}

impl SpaceToPixel {
    pub fn new(descriptor: &VolumeDescriptor) -> Self {
        let size = descriptor.physical_size();
        let last = Vector3::new(
            (descriptor.width - 1) as Real,
            (descriptor.height - 1) as Real,
            (descriptor.depth - 1) as Real,
        );

        let scaling = Vector3::new(last.x / size.x, last.y / size.y, -last.z / size.z);
        let matrix = Matrix4::new_translation(&(last / 2.0)) * Matrix4::new_nonuniform_scaling(&scaling);
        SpaceToPixel { matrix }
    }

    pub fn apply(&self, point: &Point3<Real>) -> Point3<Real> {
        self.matrix.transform_point(point)
    }
}
