use std::f64::consts::TAU;

use nalgebra::Vector2;

use super::predicates::{cross, orient};
use super::types::Point2;

/// Shoelace sum; positive for counterclockwise cycles.
pub fn signed_area(vertices: &[Point2]) -> f64 {
    let n = vertices.len();
    let twice: f64 = (0..n)
        .map(|i| cross(vertices[i], vertices[(i + 1) % n]))
        .sum();
    0.5 * twice
}

#[inline]
pub fn polygon_area(vertices: &[Point2]) -> f64 {
    signed_area(vertices).abs()
}

/// True for a cycle whose turns all have the same nonzero sign and whose
/// total turning is one full revolution (rules out pentagram-like loops).
pub fn is_strictly_convex(vertices: &[Point2]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0.0_f64;
    let mut turning = 0.0_f64;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];
        let e1 = b - a;
        let e2 = c - b;
        let t = cross(e1, e2);
        if t == 0.0 {
            return false;
        }
        if sign == 0.0 {
            sign = t.signum();
        } else if t.signum() != sign {
            return false;
        }
        turning += t.atan2(e1.dot(&e2));
    }
    (turning.abs() - TAU).abs() < 1e-6
}

/// Andrew’s monotone chain convex hull (CCW, collinear points dropped).
pub fn convex_hull(points: &[Point2]) -> Option<Vec<Point2>> {
    if points.len() < 3 {
        return None;
    }
    let mut pts: Vec<Point2> = points.to_vec();
    pts.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
    });
    pts.dedup();
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && orient(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point2> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && orient(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        return None;
    }
    Some(hull)
}

/// Axis-aligned bounding box `(min, max)`; `None` for an empty slice.
pub(crate) fn bounding_box(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = *points.first()?;
    Some(points.iter().fold((first, first), |(lo, hi), p| {
        (
            Vector2::new(lo.x.min(p.x), lo.y.min(p.y)),
            Vector2::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    }))
}
