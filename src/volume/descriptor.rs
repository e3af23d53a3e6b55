use crate::errors::VolumeError;
use crate::float_types::Real;
use nalgebra::Vector3;

/// Size of a volumetric image in voxels and the physical size of one voxel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeDescriptor {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub pixel_width: Real,
    pub pixel_height: Real,
    pub z_spacing: Real,
}

impl VolumeDescriptor {
    /// Describe a volume, checking that every dimension is non-empty and every
    /// spacing positive.
    pub fn new(
        width: u32,
        height: u32,
        depth: u32,
        pixel_width: Real,
        pixel_height: Real,
        z_spacing: Real,
    ) -> Result<Self, VolumeError> {
        let descriptor = VolumeDescriptor {
            width,
            height,
            depth,
            pixel_width,
            pixel_height,
            z_spacing,
        };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// A volume whose voxels are unit cubes.
    pub fn isotropic(width: u32, height: u32, depth: u32) -> Result<Self, VolumeError> {
        Self::new(width, height, depth, 1.0, 1.0, 1.0)
    }

    pub fn validate(&self) -> Result<(), VolumeError> {
        for (axis, size) in [("width", self.width), ("height", self.height), ("depth", self.depth)] {
            if size == 0 {
                return Err(VolumeError::EmptyDimension { axis });
            }
        }
        for (axis, value) in [
            ("pixel width", self.pixel_width),
            ("pixel height", self.pixel_height),
            ("z", self.z_spacing),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(VolumeError::InvalidSpacing { axis, value });
            }
        }
        Ok(())
    }

    /// Physical extent `(width·pixel_width, height·pixel_height, depth·z_spacing)`.
    pub fn physical_size(&self) -> Vector3<Real> {
        Vector3::new(
            self.width as Real * self.pixel_width,
            self.height as Real * self.pixel_height,
            self.depth as Real * self.z_spacing,
        )
    }

    /// Whether the voxel index `(x, y, z)` is inside the volume.
    pub const fn contains_voxel(&self, x: i64, y: i64, z: i64) -> bool {
        0 <= x
            && x < self.width as i64
            && 0 <= y
            && y < self.height as i64
            && 0 <= z
            && z < self.depth as i64
    }
}
