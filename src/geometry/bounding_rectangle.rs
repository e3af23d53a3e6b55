//! Minimum-area rectangle around a planar point set.
//!
//! Follows the edge-candidate search of "Minimum-Area Rectangle Containing a
//! Set of Points" (D. Eberly, Geometric Tools, listing 1): the optimal
//! rectangle has one side along an edge of the convex polygon, so each edge
//! between consecutive points is tried as a side direction. The input is
//! expected to be ordered around a roughly convex outline, as produced by
//! [`sort_points`](crate::polygon::sorting::sort_points).

use crate::float_types::{Real, tolerance};
use crate::geometry::{points, rectangle::Rectangle};
use nalgebra::{Point3, Vector3};

/// Smallest rectangle, among those with a side along an edge between
/// consecutive points, that contains every point.
///
/// Returns `None` for fewer than 3 points or when the points are collinear.
/// The rectangle lies in the plane of the points; its `u` edge runs along
/// the winning polygon edge and `v` points across it.
pub fn minimum_area_rectangle(points: &[Point3<Real>]) -> Option<Rectangle> {
    if points.len() < 3 {
        return None;
    }

    let center = points::centroid(points);
    let plane_normal = points::largest_cross_product_normal(points, &center, None);
    if plane_normal.norm() < tolerance() * tolerance() {
        return None;
    }
    let plane_normal = plane_normal.normalize();

    let mut best: Option<(Real, Rectangle)> = None;
    let n = points.len();
    for i1 in 0..n {
        let i0 = (i1 + n - 1) % n;
        let origin = points[i0];
        let edge = points[i1] - origin;
        if edge.norm() < tolerance() {
            continue;
        }
        let u0 = edge.normalize();
        let u1 = u0.cross(&plane_normal).normalize();

        let (rectangle, area) = fit_along(points, &origin, &u0, &u1);
        if best.as_ref().is_none_or(|(best_area, _)| area < *best_area) {
            best = Some((area, rectangle));
        }
    }

    best.map(|(_, rectangle)| rectangle)
}

/// Tightest rectangle around `points` with sides along `u0` and `u1`,
/// measured from `origin`, and its area.
fn fit_along(
    points: &[Point3<Real>],
    origin: &Point3<Real>,
    u0: &Vector3<Real>,
    u1: &Vector3<Real>,
) -> (Rectangle, Real) {
    let (mut min0, mut max0, mut min1, mut max1): (Real, Real, Real, Real) = (0.0, 0.0, 0.0, 0.0);
    for point in points {
        let offset = point - origin;
        let along = u0.dot(&offset);
        let across = u1.dot(&offset);
        min0 = min0.min(along);
        max0 = max0.max(along);
        min1 = min1.min(across);
        max1 = max1.max(across);
    }

    let rectangle = Rectangle::new(
        origin + u0 * min0 + u1 * min1,
        origin + u0 * max0 + u1 * min1,
        origin + u0 * max0 + u1 * max1,
    );
    (rectangle, (max0 - min0) * (max1 - min1))
}

/// Area of the box around `points` aligned with the two coordinate axes
/// that best span their plane (the two components of the plane normal with
/// the smallest magnitude).
pub fn axis_aligned_area(points: &[Point3<Real>]) -> Real {
    if points.len() < 3 {
        return 0.0;
    }
    let center = points::centroid(points);
    let normal = points::largest_cross_product_normal(points, &center, None);
    let dominant = normal.iamax();
    let axes: Vec<usize> = (0..3).filter(|&axis| axis != dominant).collect();

    axes.iter()
        .map(|&axis| {
            let (min, max) = points.iter().fold((Real::MAX, Real::MIN), |(min, max), p| {
                (min.min(p[axis]), max.max(p[axis]))
            });
            max - min
        })
        .product()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rectangle_of_a_square_is_the_square() {
        let square = [
            Point3::new(0.0, 0.0, 2.0),
            Point3::new(3.0, 0.0, 2.0),
            Point3::new(3.0, 3.0, 2.0),
            Point3::new(0.0, 3.0, 2.0),
        ];
        let rectangle = minimum_area_rectangle(&square).expect("square is not degenerate");
        assert_relative_eq!(rectangle.area(), 9.0, epsilon = 1e-9);
        for corner in rectangle.corners() {
            assert!(square.iter().any(|p| nalgebra::distance(p, &corner) < 1e-9));
        }
    }

    #[test]
    fn collinear_points_have_no_rectangle() {
        let line = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        assert!(minimum_area_rectangle(&line).is_none());
        assert!(minimum_area_rectangle(&line[..2]).is_none());
    }
}
