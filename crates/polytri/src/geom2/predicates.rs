//! Exact geometric predicates.
//!
//! All tests are sign tests on `f64` cross products with strict inequalities;
//! a zero cross product means collinear. Nothing here returns an error.

use super::types::{Point2, PointLocation, Segment};

/// z-component of `a × b`. Positive when `b` is counterclockwise from `a`.
#[inline]
pub fn cross(a: Point2, b: Point2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Orientation of `c` relative to the directed line `a → b`.
#[inline]
pub fn orient(a: Point2, b: Point2, c: Point2) -> f64 {
    cross(b - a, c - a)
}

/// True iff the open segments cross transversally.
///
/// Each segment's endpoints must lie strictly on opposite sides of the other
/// segment's line. Touching at an endpoint or overlapping collinearly does not
/// count.
pub fn segments_properly_intersect(s1: &Segment, s2: &Segment) -> bool {
    let d1 = s1.direction();
    let d2 = s2.direction();
    let c1 = cross(d1, s2.start - s1.start);
    let c2 = cross(d1, s2.end - s1.start);
    let c3 = cross(d2, s1.start - s2.start);
    let c4 = cross(d2, s1.end - s2.start);
    c1 * c2 < 0.0 && c3 * c4 < 0.0
}

/// True if `p` lies on the closed segment `[a, b]`.
pub fn point_on_segment(p: Point2, a: Point2, b: Point2) -> bool {
    if orient(a, b, p) != 0.0 {
        return false;
    }
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

/// Classify `p` against the closed triangle `(a, b, c)` (either winding).
///
/// A degenerate (collinear) triangle has no interior: points on one of its
/// sides are `OnEdge`, everything else is `Outside`.
pub fn point_in_triangle(p: Point2, a: Point2, b: Point2, c: Point2) -> PointLocation {
    if orient(a, b, c) == 0.0 {
        let on_side =
            point_on_segment(p, a, b) || point_on_segment(p, b, c) || point_on_segment(p, c, a);
        return if on_side {
            PointLocation::OnEdge
        } else {
            PointLocation::Outside
        };
    }
    let d1 = orient(a, b, p);
    let d2 = orient(b, c, p);
    let d3 = orient(c, a, p);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    if has_neg && has_pos {
        PointLocation::Outside
    } else if d1 == 0.0 || d2 == 0.0 || d3 == 0.0 {
        PointLocation::OnEdge
    } else {
        PointLocation::Inside
    }
}

/// Ray-casting point-in-polygon over the implicit closed chain `polygon`.
///
/// Per edge, boundary membership is checked first and short-circuits to
/// `OnEdge`. Otherwise a horizontal ray towards +x toggles parity on every edge
/// that straddles `p.y` (half-open in y, so horizontal edges never toggle).
pub fn point_in_polygon(p: Point2, polygon: &[Point2]) -> PointLocation {
    let n = polygon.len();
    let mut inside = false;
    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];
        if point_on_segment(p, pi, pj) {
            return PointLocation::OnEdge;
        }
        if (pi.y > p.y) != (pj.y > p.y) && p.x < (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x
        {
            inside = !inside;
        }
        j = i;
    }
    if inside {
        PointLocation::Inside
    } else {
        PointLocation::Outside
    }
}
