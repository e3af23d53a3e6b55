//! Ordering of unordered planar point sets into polygon loops.

use crate::float_types::Real;
use crate::geometry::points;
use nalgebra::{Point3, Vector3};

/// Order `points` into a loop winding anticlockwise around the polygon normal.
///
/// The normal is the largest cross product of centroid-relative point pairs,
/// flipped to agree with `reference` when one is given (for a face of a
/// closed volume, the direction from the volume centroid to the face
/// centroid makes the loop wind outward). Points are then sorted by their
/// signed angle around that normal, measured from the direction of the first
/// input point.
///
/// Fewer than 3 points cannot form a polygon and give an empty result.
/// Assumes the points outline a convex (or star-shaped around the centroid)
/// polygon, which holds for every cut of a box.
pub fn sort_points(points: &[Point3<Real>], reference: Option<&Vector3<Real>>) -> Vec<Point3<Real>> {
    if points.len() < 3 {
        return Vec::new();
    }

    let center = points::centroid(points);
    let normal = points::largest_cross_product_normal(points, &center, reference);
    let start = points[0] - center;

    let mut keyed: Vec<(Real, Point3<Real>)> = points
        .iter()
        .map(|p| (points::signed_angle(&start, &(p - center), &normal), *p))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, p)| p).collect()
}

/// Normal of an ordered loop by Newell's method, pointing to the side the
/// loop winds anticlockwise around. Its length is twice the enclosed area.
pub fn winding_normal(points: &[Point3<Real>]) -> Vector3<Real> {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .fold(Vector3::zeros(), |acc, (curr, next)| {
            acc + curr.coords.cross(&next.coords)
        })
}
