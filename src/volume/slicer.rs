//! Visible polygons of a volume cut by the cutting rectangle.

use crate::float_types::Real;
use crate::geometry::{points, rectangle::Rectangle};
use crate::polygon::{Polygon, Side};
use crate::volume::cube::Cube;
use nalgebra::Point3;

impl Cube {
    /// For every face, the unordered points outlining the part of the face in
    /// front of `cutter`. Faces entirely behind the cutter give an empty set.
    pub fn clipped_faces(&self, cutter: &Rectangle) -> Vec<(Side, Vec<Point3<Real>>)> {
        self.faces()
            .iter()
            .map(|face| (face.side(), face.rectangle().part_in_front_of(cutter)))
            .collect()
    }

    /// Unordered points outlining the cross-section of the volume on
    /// `cutter`.
    pub fn slice_points(&self, cutter: &Rectangle) -> Vec<Point3<Real>> {
        cutter.part_inside(self.rectangles())
    }

    /// Every polygon that bounds the part of the volume in front of
    /// `cutter`: the clipped faces and, when the cutter crosses the volume,
    /// the slice. Each loop winds anticlockwise around its outward normal.
    ///
    /// Candidates with fewer than 3 points are dropped; candidates that fail
    /// to form a polygon are logged and skipped.
    pub fn visible_polygons(&self, cutter: &Rectangle) -> Vec<Polygon> {
        let mut candidates: Vec<(Side, Vec<Point3<Real>>)> = self
            .clipped_faces(cutter)
            .into_iter()
            .filter(|(_, points)| points.len() > 2)
            .collect();

        let slice = self.slice_points(cutter);
        if slice.len() > 2 {
            candidates.push((Side::Slice, slice));
        }

        let all_points: Vec<Point3<Real>> = candidates.iter().flat_map(|(_, points)| points.iter().copied()).collect();
        let volume_centroid = points::centroid(&all_points);

        let polygons: Vec<Polygon> = candidates
            .into_iter()
            .filter_map(|(side, points)| {
                let outward = points::centroid(&points) - volume_centroid;
                match Polygon::from_unordered(&points, side, Some(&outward)) {
                    Ok(polygon) => Some(polygon),
                    Err(error) => {
                        log::debug!("skipping {side} polygon: {error}");
                        None
                    },
                }
            })
            .collect();

        log::debug!("{} visible polygons", polygons.len());
        polygons
    }
}
