use crate::geom2::{Point2, Segment, Triangle};

/// Triangles and their edges in emission order (ears first, final triangle last).
///
/// Every triangle contributes its own three edges to `edges`, so an interior
/// diagonal appears once per adjacent triangle. Nothing is sorted or deduplicated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Triangulation {
    pub triangles: Vec<Triangle>,
    pub edges: Vec<Segment>,
}

impl Triangulation {
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangles),
            edges: Vec::with_capacity(3 * triangles),
        }
    }

    pub fn push_triangle(&mut self, triangle: Triangle) {
        self.edges.extend_from_slice(&triangle.edges);
        self.triangles.push(triangle);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn total_area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }

    /// Triangle corners, three per triangle, in emission order.
    pub fn corners(&self) -> impl Iterator<Item = Point2> + '_ {
        self.triangles.iter().flat_map(|t| t.vertices())
    }
}
