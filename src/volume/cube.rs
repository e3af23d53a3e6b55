//! The bounding box of a volume as six rectangles tied to voxel space.

use crate::errors::{GeometryError, VolumeError};
use crate::float_types::{Real, tolerance};
use crate::geometry::rectangle::Rectangle;
use crate::polygon::Side;
use crate::volume::{descriptor::VolumeDescriptor, pixel_transform::SpaceToPixel};
use nalgebra::{Point3, Vector3};

/// One face of a [`Cube`]: its rectangle and the voxel coordinates of its
/// corners.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeFace {
    side: Side,
    rectangle: Rectangle,
    pixel_corners: [Point3<Real>; 4],
}

impl CubeFace {
    pub const fn side(&self) -> Side {
        self.side
    }

    pub const fn rectangle(&self) -> &Rectangle {
        &self.rectangle
    }

    /// Voxel coordinates of `p0..p3`, in corner order.
    pub const fn pixel_corners(&self) -> &[Point3<Real>; 4] {
        &self.pixel_corners
    }

    /// Voxel coordinates of a point on this face, interpolated bilinearly
    /// from the corners.
    ///
    /// # Errors
    /// [`GeometryError::InvariantViolation`] when `point` is not on the
    /// face's plane: every point clipped from a face must stay on it.
    pub fn pixel_coordinates(&self, point: &Point3<Real>) -> Result<Point3<Real>, GeometryError> {
        let plane = self.rectangle.plane()?;
        let scale = self.rectangle.u().norm().max(self.rectangle.v().norm()).max(1.0);
        if plane.signed_distance(point).abs() > tolerance() * scale {
            return Err(GeometryError::InvariantViolation {
                message: format!("point is off the {} face", self.side),
                point: *point,
            });
        }

        let offset = point - self.rectangle.p0;
        let u = self.rectangle.u();
        let v = self.rectangle.v();
        let s = offset.dot(&u) / u.norm_squared();
        let t = offset.dot(&v) / v.norm_squared();

        let [c0, c1, c2, _] = self.pixel_corners;
        Ok(c0 + (c1 - c0) * s + (c2 - c1) * t)
    }
}

/// Axis-aligned box of a volume, centred at the origin, with physical size
/// `(width·pixel_width, height·pixel_height, depth·z_spacing)`.
///
/// Faces are stored in [`Side::FACES`] order. The viewer looks along +z, so
/// the front face is at `z = -D/2`. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    descriptor: VolumeDescriptor,
    to_pixel: SpaceToPixel,
    faces: [CubeFace; 6],
}

impl Cube {
    pub fn new(descriptor: VolumeDescriptor) -> Result<Self, VolumeError> {
        descriptor.validate()?;
        let to_pixel = SpaceToPixel::new(&descriptor);
        let half = descriptor.physical_size() / 2.0;

        let corner = |x: Real, y: Real, z: Real| Point3::new(x * half.x, y * half.y, z * half.z);
        let upper_left_close = corner(-1.0, -1.0, -1.0);
        let upper_right_close = corner(1.0, -1.0, -1.0);
        let lower_right_close = corner(1.0, 1.0, -1.0);
        let lower_left_close = corner(-1.0, 1.0, -1.0);
        let upper_left_away = corner(-1.0, -1.0, 1.0);
        let upper_right_away = corner(1.0, -1.0, 1.0);
        let lower_right_away = corner(1.0, 1.0, 1.0);
        let lower_left_away = corner(-1.0, 1.0, 1.0);

        let rectangles = [
            Rectangle::new(upper_left_close, upper_right_close, lower_right_close),
            Rectangle::new(upper_left_close, upper_right_close, upper_right_away),
            Rectangle::new(lower_left_close, lower_right_close, lower_right_away),
            Rectangle::new(upper_left_close, upper_left_away, lower_left_away),
            Rectangle::new(upper_right_close, upper_right_away, lower_right_away),
            Rectangle::new(upper_left_away, upper_right_away, lower_right_away),
        ];

        let faces = std::array::from_fn(|i| {
            let rectangle = rectangles[i];
            CubeFace {
                side: Side::FACES[i],
                rectangle,
                pixel_corners: rectangle.corners().map(|p| to_pixel.apply(&p).map(Real::round)),
            }
        });

        log::debug!(
            "built cube of {}x{}x{} voxels, physical size {:?}",
            descriptor.width,
            descriptor.height,
            descriptor.depth,
            descriptor.physical_size()
        );

        Ok(Cube {
            descriptor,
            to_pixel,
            faces,
        })
    }

    pub const fn descriptor(&self) -> &VolumeDescriptor {
        &self.descriptor
    }

    pub const fn faces(&self) -> &[CubeFace; 6] {
        &self.faces
    }

    pub fn face(&self, side: Side) -> Option<&CubeFace> {
        self.faces.iter().find(|face| face.side == side)
    }

    pub fn rectangles(&self) -> impl Iterator<Item = &Rectangle> + '_ {
        self.faces.iter().map(|face| &face.rectangle)
    }

    /// Half the physical size along each axis.
    pub fn half_extents(&self) -> Vector3<Real> {
        self.descriptor.physical_size() / 2.0
    }

    /// Voxel coordinates (not rounded) of a point in scene space.
    pub fn to_pixel(&self, point: &Point3<Real>) -> Point3<Real> {
        self.to_pixel.apply(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faces_enclose_the_box() {
        let cube = Cube::new(VolumeDescriptor::isotropic(4, 6, 8).expect("valid volume")).expect("valid cube");
        let half = cube.half_extents();
        assert_eq!(half, Vector3::new(2.0, 3.0, 4.0));

        let front = cube.face(Side::Front).expect("cube has a front face");
        assert!(front.rectangle().corners().iter().all(|p| p.z == -4.0));
        let back = cube.face(Side::Back).expect("cube has a back face");
        assert!(back.rectangle().corners().iter().all(|p| p.z == 4.0));

        for face in cube.faces() {
            assert!(face.rectangle().plane().is_ok(), "{} face is degenerate", face.side());
        }
    }

    #[test]
    fn face_corners_map_to_voxel_indices() {
        let cube = Cube::new(VolumeDescriptor::new(5, 3, 4, 2.0, 2.0, 0.5).expect("valid volume")).expect("valid cube");
        let front = cube.face(Side::Front).expect("cube has a front face");
        assert_eq!(
            front.pixel_corners(),
            &[
                Point3::new(0.0, 0.0, 3.0),
                Point3::new(4.0, 0.0, 3.0),
                Point3::new(4.0, 2.0, 3.0),
                Point3::new(0.0, 2.0, 3.0),
            ]
        );

        let centre = front.rectangle().center();
        let pixel = front.pixel_coordinates(&centre).expect("centre is on the face");
        assert!((pixel - Point3::new(2.0, 1.0, 3.0)).norm() < 1e-9);

        let off_face = Point3::new(0.0, 0.0, 0.0);
        assert!(matches!(
            front.pixel_coordinates(&off_face),
            Err(GeometryError::InvariantViolation { .. })
        ));
    }
}
