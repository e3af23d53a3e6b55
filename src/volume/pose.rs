//! Position and tilt of the cutting rectangle.

use crate::float_types::Real;
use crate::geometry::rectangle::Rectangle;
use crate::volume::descriptor::VolumeDescriptor;
use nalgebra::{Matrix4, Point3, Rotation3, Translation3, Vector3};

/// Pose of the cutting rectangle as set by the viewer's controls.
///
/// `z_translation` runs from 0 (front face) to the physical depth of the
/// volume (back face) before the rotations are applied. Rotations are in
/// degrees, about the x axis first and then about the y axis, both through
/// the centre of the volume.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub z_translation: Real,
    pub x_rotation_degrees: Real,
    pub y_rotation_degrees: Real,
}

impl Pose {
    pub const fn new(z_translation: Real, x_rotation_degrees: Real, y_rotation_degrees: Real) -> Self {
        Pose {
            z_translation,
            x_rotation_degrees,
            y_rotation_degrees,
        }
    }

    /// `Ry · Rx · T(0, 0, z_translation - D/2)`.
    pub fn transform(&self, descriptor: &VolumeDescriptor) -> Matrix4<Real> {
        let depth = descriptor.physical_size().z;
        let translation = Translation3::new(0.0, 0.0, self.z_translation - depth / 2.0).to_homogeneous();
        let x_rotation =
            Rotation3::from_axis_angle(&Vector3::x_axis(), self.x_rotation_degrees.to_radians()).to_homogeneous();
        let y_rotation =
            Rotation3::from_axis_angle(&Vector3::y_axis(), self.y_rotation_degrees.to_radians()).to_homogeneous();
        y_rotation * x_rotation * translation
    }

    /// The cutting rectangle for this pose.
    ///
    /// Before transformation it is a square at `z = 0` whose half side is the
    /// volume's diagonal. Its centre always ends up at the foot of the volume
    /// centre on the cutting plane, so it covers the whole cross-section for
    /// any tilt. Its normal points along +z: the part of the volume kept is
    /// the one beyond the cut, as seen by a viewer looking along +z.
    pub fn cutting_rectangle(&self, descriptor: &VolumeDescriptor) -> Rectangle {
        let reach = descriptor.physical_size().norm();
        let base = Rectangle::new(
            Point3::new(-reach, -reach, 0.0),
            Point3::new(reach, -reach, 0.0),
            Point3::new(reach, reach, 0.0),
        );
        base.transform(&self.transform(descriptor))
    }
}
