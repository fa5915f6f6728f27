//! Basic 2D types used by the triangulators.
//!
//! - `Point2`: a column vector; `==` is exact.
//! - `Segment`: directed `(start, end)` pair; undirected for geometric tests.
//! - `Triangle`: owns its three edges (no sharing across a triangulation).
//! - `PointLocation`: three-way answer of the containment predicates.

use nalgebra::Vector2;

use super::predicates::{cross, point_in_triangle};

/// A point in the plane.
pub type Point2 = Vector2<f64>;

/// Classification of a point against a closed region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointLocation {
    Inside,
    OnEdge,
    Outside,
}

/// Directed segment `start → end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    #[inline]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }
    #[inline]
    pub fn direction(&self) -> Point2 {
        self.end - self.start
    }
    #[inline]
    pub fn midpoint(&self) -> Point2 {
        Vector2::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }
    /// True if `p` is exactly one of the two endpoints.
    #[inline]
    pub fn has_endpoint(&self, p: Point2) -> bool {
        self.start == p || self.end == p
    }
    /// True if the segments have an endpoint in common (exact equality).
    #[inline]
    pub fn shares_endpoint_with(&self, other: &Segment) -> bool {
        self.has_endpoint(other.start) || self.has_endpoint(other.end)
    }
}

/// Triangle stored as its three directed edges `a→b`, `b→c`, `c→a`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub edges: [Segment; 3],
}

impl Triangle {
    pub fn new(a: Point2, b: Point2, c: Point2) -> Self {
        Self {
            edges: [Segment::new(a, b), Segment::new(b, c), Segment::new(c, a)],
        }
    }

    /// Corners in construction order.
    #[inline]
    pub fn vertices(&self) -> [Point2; 3] {
        [self.edges[0].start, self.edges[1].start, self.edges[2].start]
    }

    /// Positive for counterclockwise corners.
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.vertices();
        0.5 * cross(b - a, c - a)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn centroid(&self) -> Point2 {
        let [a, b, c] = self.vertices();
        (a + b + c) / 3.0
    }

    pub fn contains(&self, p: Point2) -> PointLocation {
        let [a, b, c] = self.vertices();
        point_in_triangle(p, a, b, c)
    }
}

/// Closed segment chain `v0→v1, …, v(n-1)→v0` for a vertex cycle.
pub fn closed_boundary(vertices: &[Point2]) -> Vec<Segment> {
    let n = vertices.len();
    (0..n)
        .map(|i| Segment::new(vertices[i], vertices[(i + 1) % n]))
        .collect()
}
