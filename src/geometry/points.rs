//! Helpers on sets of points: centroid, orientation and deduplication.

use crate::float_types::Real;
use nalgebra::{Point3, Vector3};

/// Arithmetic mean of `points`, or the origin when `points` is empty.
pub fn centroid(points: &[Point3<Real>]) -> Point3<Real> {
    if points.is_empty() {
        return Point3::origin();
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Point3::from(sum / points.len() as Real)
}

/// Angle in radians between `from` and `to`, signed by the side of `axis`
/// the rotation from `from` to `to` goes around.
///
/// A zero triple product counts as positive, so collinear vectors pointing in
/// opposite directions give `+π`.
pub fn signed_angle(from: &Vector3<Real>, to: &Vector3<Real>, axis: &Vector3<Real>) -> Real {
    let angle = from.angle(to);
    if axis.dot(&from.cross(to)) >= 0.0 {
        angle
    } else {
        -angle
    }
}

/// Normal of a roughly planar point set.
///
/// Takes the largest cross product among all pairs of centroid-relative
/// vectors, which stays stable for noisy points where the first three may
/// be nearly collinear. O(n²), fine for the handful of points of a slice.
///
/// When `direction` is given the result is flipped so that it does not point
/// against it. The result is not normalized; it is the zero vector when every
/// point is collinear with the centroid.
pub fn largest_cross_product_normal(
    points: &[Point3<Real>],
    center: &Point3<Real>,
    direction: Option<&Vector3<Real>>,
) -> Vector3<Real> {
    let mut largest = Vector3::zeros();
    let mut largest_magnitude = 0.0;

    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let cross = (a - center).cross(&(b - center));
            let magnitude = cross.norm();
            if magnitude > largest_magnitude {
                largest = cross;
                largest_magnitude = magnitude;
            }
        }
    }

    match direction {
        Some(direction) if largest.dot(direction) < 0.0 => -largest,
        _ => largest,
    }
}

/// Keep the first occurrence of every point, dropping later ones that lie
/// within `tolerance` of an already kept point.
pub fn dedup_within(points: &[Point3<Real>], tolerance: Real) -> Vec<Point3<Real>> {
    let mut kept: Vec<Point3<Real>> = Vec::with_capacity(points.len());
    for p in points {
        if !kept.iter().any(|k| nalgebra::distance(k, p) < tolerance) {
            kept.push(*p);
        }
    }
    kept
}

/// Round every coordinate to `decimals` decimal digits, halves away from zero.
pub fn round_to(point: &Point3<Real>, decimals: i32) -> Point3<Real> {
    let scale = (10.0 as Real).powi(decimals);
    point.map(|c| {
        let rounded = (c * scale).round() / scale;
        // avoid -0.0 so that rounded points compare and print consistently
        if rounded == 0.0 { 0.0 } else { rounded }
    })
}

/// Keep the first of every group of points that agree when rounded to
/// `decimals` digits, in input order. Kept points are returned unrounded.
pub fn dedup_rounded(points: impl IntoIterator<Item = Point3<Real>>, decimals: i32) -> Vec<Point3<Real>> {
    let mut keys: Vec<Point3<Real>> = Vec::new();
    let mut kept = Vec::new();
    for p in points {
        let key = round_to(&p, decimals);
        if !keys.contains(&key) {
            keys.push(key);
            kept.push(p);
        }
    }
    kept
}
