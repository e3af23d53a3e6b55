mod support;

use crate::support::approx_eq;
use nalgebra::{Point3, Rotation3, Vector3};
use proptest::prelude::*;
use volslice::{
    float_types::{Real, TAU},
    geometry::{
        bounding_rectangle::{axis_aligned_area, minimum_area_rectangle},
        points::centroid,
    },
    polygon::sorting::sort_points,
};

/// Whether `p` is inside the (right-angled) rectangle spanned by `r`.
fn encloses(r: &volslice::Rectangle, p: &Point3<Real>, eps: Real) -> bool {
    let offset = p - r.p0;
    let s = offset.dot(&r.u()) / r.u().norm_squared();
    let t = offset.dot(&r.v()) / r.v().norm_squared();
    (-eps..=1.0 + eps).contains(&s) && (-eps..=1.0 + eps).contains(&t)
}

/// A 4×1 rectangle turned by `angle` about z, then tilted about x.
fn rotated_bar(angle: Real, tilt: Real) -> Vec<Point3<Real>> {
    let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), tilt)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), angle);
    [(0.0, 0.0), (4.0, 0.0), (4.0, 1.0), (0.0, 1.0)]
        .iter()
        .map(|&(x, y)| rotation * Point3::new(x, y, 0.0) + Vector3::new(1.0, 2.0, 3.0))
        .collect()
}

#[test]
fn rotated_bar_is_fitted_exactly() {
    let points = rotated_bar(TAU / 12.0, 0.0);
    let rectangle = minimum_area_rectangle(&points).expect("bar is not degenerate");
    assert!(approx_eq(rectangle.area(), 4.0, 1e-9));
    assert!(rectangle.area() < axis_aligned_area(&points));
    assert!(points.iter().all(|p| encloses(&rectangle, p, 1e-9)));
}

#[test]
fn rectangle_lies_in_the_plane_of_the_points() {
    let points = rotated_bar(0.3, 0.7);
    let rectangle = minimum_area_rectangle(&points).expect("bar is not degenerate");
    let normal = rectangle.u().cross(&rectangle.v()).normalize();
    let center = centroid(&points);
    for corner in rectangle.corners() {
        assert!((corner - center).dot(&normal).abs() < 1e-9);
    }
}

#[test]
fn fewer_than_three_points_have_no_rectangle() {
    assert!(minimum_area_rectangle(&[]).is_none());
    assert!(minimum_area_rectangle(&[Point3::origin(), Point3::new(1.0, 0.0, 0.0)]).is_none());
    assert_eq!(axis_aligned_area(&[Point3::origin()]), 0.0);
}

proptest! {
    #[test]
    fn never_larger_than_the_axis_aligned_box(
        angles in prop::collection::vec(0.0..TAU, 3..10),
        radii in (0.5..5.0 as Real, 0.5..5.0 as Real),
        turn in 0.0..TAU,
    ) {
        // points on a turned ellipse outline a convex polygon
        let mut angles = angles;
        angles.sort_by(|a, b| a.total_cmp(b));
        angles.dedup_by(|a, b| (*a - *b).abs() < 0.05);
        prop_assume!(angles.len() >= 3);
        prop_assume!(angles[0] + TAU - angles[angles.len() - 1] >= 0.05);

        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), turn);
        let points: Vec<Point3<Real>> = angles
            .iter()
            .map(|a| rotation * Point3::new(radii.0 * a.cos(), radii.1 * a.sin(), 1.5))
            .collect();
        let sorted = sort_points(&points, Some(&Vector3::z()));

        let rectangle = minimum_area_rectangle(&sorted).expect("convex polygon has a rectangle");
        prop_assert!(rectangle.area() >= 0.0);
        prop_assert!(rectangle.area() <= axis_aligned_area(&sorted) + 1e-9);
        prop_assert!(sorted.iter().all(|p| encloses(&rectangle, p, 1e-6)));
    }
}
