use tracing::debug;

use crate::geom2::{is_strictly_convex, Segment, Triangle};

use super::{extract_vertices, Triangulation, TriangulationError, Triangulator};

/// Fan from the first boundary vertex; strictly convex boundaries only.
///
/// O(n) baseline that the ear clipper must agree with on convex input.
#[derive(Clone, Copy, Debug, Default)]
pub struct FanTriangulation;

impl FanTriangulation {
    pub const NAME: &'static str = "fan";
    pub const LABEL: &'static str = "Convex Fan";
}

impl Triangulator for FanTriangulation {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn run(&self, boundary: &[Segment]) -> Result<Triangulation, TriangulationError> {
        let poly = extract_vertices(boundary)?;
        if !is_strictly_convex(&poly) {
            return Err(TriangulationError::NotConvex);
        }
        let n = poly.len();
        let mut out = Triangulation::with_capacity(n - 2);
        for i in 1..n - 1 {
            out.push_triangle(Triangle::new(poly[0], poly[i], poly[i + 1]));
        }
        debug!(vertices = n, triangles = out.len(), "fan_done");
        Ok(out)
    }
}
