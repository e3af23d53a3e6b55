//! Intersection of two finite rectangles in 3D space.
//!
//! The planes of both rectangles meet along an infinite line. That line is
//! clipped against the boundary of each rectangle separately, and the
//! intersection is the part common to both clipped segments.

use crate::float_types::{Real, tolerance};
use crate::geometry::{line::Line, points, rectangle::Rectangle, segment::Segment};
use nalgebra::Point3;

/// Segment shared by the rectangles `a` and `b`, or `None` when they do not
/// cross.
///
/// Rectangles on parallel or identical planes never intersect here, even if
/// they overlap; neither do degenerate rectangles.
pub fn find_intersection(a: &Rectangle, b: &Rectangle) -> Option<Segment> {
    let plane_a = a.plane().ok()?;
    let plane_b = b.plane().ok()?;
    let line = plane_a.intersection_line(&plane_b)?;

    let segment_a = clip_line_to_rectangle(a, &line)?;
    let segment_b = clip_line_to_rectangle(b, &line)?;

    let tolerance = tolerance();
    let common: Vec<Point3<Real>> = [segment_a.a, segment_a.b, segment_b.a, segment_b.b]
        .into_iter()
        .filter(|p| segment_a.contains_point(p, tolerance) && segment_b.contains_point(p, tolerance))
        .collect();

    match points::dedup_within(&common, tolerance).as_slice() {
        [p, q] => Some(Segment::new(*p, *q)),
        _ => None,
    }
}

/// Part of `line` lying inside `rectangle`, assuming the line is in the
/// rectangle's plane.
///
/// The line must cross the boundary at exactly two distinct points. A line
/// through a corner hits two edges at the same place, which counts once.
pub fn clip_line_to_rectangle(rectangle: &Rectangle, line: &Line) -> Option<Segment> {
    let hits: Vec<Point3<Real>> = rectangle
        .edges()
        .iter()
        .filter_map(|edge| intersect_segment_with_line(edge, line))
        .collect();

    match points::dedup_within(&hits, tolerance()).as_slice() {
        [p, q] => Some(Segment::new(*p, *q)),
        _ => None,
    }
}

/// Point where `line` meets `segment`, if any.
///
/// Uses the shortest segment between two 3D lines (Paul Bourke,
/// "The shortest line between two lines in 3D"): with `P1`, `P2` the segment
/// ends and `P3`, `P4 = P3 + direction` two points of the line, the closest
/// points are `Pa = P1 + mua (P2 - P1)` and `Pb = P3 + mub (P4 - P3)`. The
/// point is accepted when `Pa` and `Pb` coincide and `Pa` is on the segment.
/// A segment parallel to the line never yields a point.
pub fn intersect_segment_with_line(segment: &Segment, line: &Line) -> Option<Point3<Real>> {
    let p1 = segment.a;
    let p2 = segment.b;
    let p3 = line.point;
    let p4 = line.point + line.direction;

    // d(m, n, o, p) = (xm - xn)(xo - xp) + (ym - yn)(yo - yp) + (zm - zn)(zo - zp)
    let d = |m: &Point3<Real>, n: &Point3<Real>, o: &Point3<Real>, p: &Point3<Real>| (m - n).dot(&(o - p));

    let d1343 = d(&p1, &p3, &p4, &p3);
    let d4321 = d(&p4, &p3, &p2, &p1);
    let d1321 = d(&p1, &p3, &p2, &p1);
    let d4343 = d(&p4, &p3, &p4, &p3);
    let d2121 = d(&p2, &p1, &p2, &p1);

    let denominator = d2121 * d4343 - d4321 * d4321;
    let tolerance = tolerance();
    if d2121 <= Real::EPSILON
        || d4343 <= Real::EPSILON
        || denominator.abs() < tolerance * tolerance * d2121 * d4343
    {
        return None;
    }

    let mua = (d1343 * d4321 - d1321 * d4343) / denominator;
    let mub = (d1343 + mua * d4321) / d4343;

    let pa = p1 + (p2 - p1) * mua;
    let pb = p3 + (p4 - p3) * mub;

    if nalgebra::distance(&pa, &pb) < tolerance && segment.contains_point(&pa, tolerance) {
        Some(pa)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn line_through_middle_of_edge() {
        let segment = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0));
        let line = Line::new(Point3::new(1.0, 5.0, 0.0), Vector3::new(0.0, -3.0, 0.0));
        let hit = intersect_segment_with_line(&segment, &line).expect("line crosses the segment");
        assert!(nalgebra::distance(&hit, &Point3::new(1.0, 0.0, 0.0)) < 1e-9);
    }

    #[test]
    fn skew_and_parallel_lines_miss() {
        let segment = Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 0.0, 0.0));
        let skew = Line::new(Point3::new(1.0, 0.0, 1.0), Vector3::y());
        let parallel = Line::new(Point3::new(0.0, 0.0, 0.0), Vector3::x());
        let beyond = Line::new(Point3::new(3.0, 0.0, 0.0), Vector3::y());
        assert!(intersect_segment_with_line(&segment, &skew).is_none());
        assert!(intersect_segment_with_line(&segment, &parallel).is_none());
        assert!(intersect_segment_with_line(&segment, &beyond).is_none());
    }

    #[test]
    fn diagonal_through_corners_counts_each_corner_once() {
        let square = Rectangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
        );
        let diagonal = Line::new(Point3::origin(), Vector3::new(1.0, 1.0, 0.0));
        let segment = clip_line_to_rectangle(&square, &diagonal).expect("diagonal crosses the square");
        assert!(segment.approx_eq(
            &Segment::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)),
            1e-9
        ));
    }
}
