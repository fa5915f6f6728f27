//! Ear-clipping engine ("Subtracting Ears").
//!
//! Loop
//! - While more than three vertices remain, scan candidate indices `i` of the
//!   current cycle. `(V[i-1], V[i], V[i+1])` is an ear if the diagonal
//!   `V[i-1] → V[i+1]` is valid (passes through no other vertex, crosses no
//!   non-incident edge, midpoint strictly inside the current polygon) and no
//!   other vertex lies strictly inside the triangle. Clipping emits the triangle and removes `V[i]`.
//! - The last three vertices form the final triangle.
//!
//! Complexity
//! - O(n) clips × O(n) candidates × O(n) checks = O(n³) worst case.
//!
//! Code cross-refs: `cfg::ScanOrder`, `output::Triangulation`

use std::fmt;

use tracing::{debug, trace, warn};

use crate::geom2::{
    point_in_polygon, point_in_triangle, point_on_segment, segments_properly_intersect, Point2,
    PointLocation, Segment, Triangle,
};

use super::{
    extract_vertices, EarClipCfg, ScanOrder, Triangulation, TriangulationError, Triangulator,
};

/// Ear-clipping triangulator, registered as `"ear_clipping"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct EarClipping {
    cfg: EarClipCfg,
}

impl EarClipping {
    pub const NAME: &'static str = "ear_clipping";
    pub const LABEL: &'static str = "Subtracting Ears";

    pub fn new(cfg: EarClipCfg) -> Self {
        Self { cfg }
    }

    pub fn cfg(&self) -> EarClipCfg {
        self.cfg
    }
}

impl Triangulator for EarClipping {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn label(&self) -> &'static str {
        Self::LABEL
    }

    fn run(&self, boundary: &[Segment]) -> Result<Triangulation, TriangulationError> {
        let vertices = extract_vertices(boundary)?;
        clip_ears(vertices, self.cfg)
    }
}

impl fmt::Display for EarClipping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::LABEL)
    }
}

/// Triangulate a vertex cycle, consuming it as the working polygon.
pub fn clip_ears(
    mut poly: Vec<Point2>,
    cfg: EarClipCfg,
) -> Result<Triangulation, TriangulationError> {
    if poly.len() < 3 {
        return Err(TriangulationError::InvalidPolygon {
            vertices: poly.len(),
        });
    }
    let n = poly.len();
    debug!(vertices = n, scan = ?cfg.scan, "ear_clip_start");
    let mut out = Triangulation::with_capacity(n - 2);
    while poly.len() > 3 {
        let clipped = match cfg.scan {
            ScanOrder::Sweep => sweep_pass(&mut poly, &mut out),
            ScanOrder::Restart => usize::from(clip_first_ear(&mut poly, &mut out)),
        };
        if clipped == 0 {
            warn!(remaining = poly.len(), "ear_clip_no_progress");
            return Err(TriangulationError::DegenerateOrNonSimplePolygon {
                remaining: poly.len(),
            });
        }
    }
    out.push_triangle(Triangle::new(poly[0], poly[1], poly[2]));
    debug!(vertices = n, triangles = out.len(), "ear_clip_done");
    Ok(out)
}

/// One pass over the cycle; after a removal the scan continues at the next
/// index of the shrunk list. Returns the number of ears clipped.
fn sweep_pass(poly: &mut Vec<Point2>, out: &mut Triangulation) -> usize {
    let mut clipped = 0;
    let mut i = 0;
    while i < poly.len() && poly.len() > 3 {
        if is_ear(poly, i) {
            clip(poly, i, out);
            clipped += 1;
        }
        i += 1;
    }
    clipped
}

fn clip_first_ear(poly: &mut Vec<Point2>, out: &mut Triangulation) -> bool {
    match (0..poly.len()).find(|&i| is_ear(poly, i)) {
        Some(i) => {
            clip(poly, i, out);
            true
        }
        None => false,
    }
}

fn clip(poly: &mut Vec<Point2>, i: usize, out: &mut Triangulation) {
    let (prev, cur, next) = corners(poly, i);
    trace!(index = i, remaining = poly.len() - 1, "ear_clipped");
    out.push_triangle(Triangle::new(prev, cur, next));
    poly.remove(i);
}

#[inline]
fn neighbors(n: usize, i: usize) -> (usize, usize) {
    ((i + n - 1) % n, (i + 1) % n)
}

#[inline]
fn corners(poly: &[Point2], i: usize) -> (Point2, Point2, Point2) {
    let (ip, inx) = neighbors(poly.len(), i);
    (poly[ip], poly[i], poly[inx])
}

/// Is `(poly[i-1], poly[i], poly[i+1])` an ear of the cycle `poly`?
pub fn is_ear(poly: &[Point2], i: usize) -> bool {
    let n = poly.len();
    let (ip, inx) = neighbors(n, i);
    let (prev, cur, next) = corners(poly, i);
    if !is_valid_diagonal(prev, next, poly) {
        return false;
    }
    poly.iter()
        .enumerate()
        .filter(|&(j, _)| j != i && j != ip && j != inx)
        .all(|(_, &p)| point_in_triangle(p, prev, cur, next) != PointLocation::Inside)
}

/// Does the segment `a → b` lie inside the polygon `poly`?
///
/// No other vertex may lie on the closed segment. Edges incident to `a` or `b`
/// (exact equality) are skipped in the crossing test; the midpoint must then
/// classify as strictly `Inside`.
pub fn is_valid_diagonal(a: Point2, b: Point2, poly: &[Point2]) -> bool {
    if poly
        .iter()
        .any(|&v| v != a && v != b && point_on_segment(v, a, b))
    {
        return false;
    }
    let diagonal = Segment::new(a, b);
    let n = poly.len();
    for k in 0..n {
        let edge = Segment::new(poly[k], poly[(k + 1) % n]);
        if edge.has_endpoint(a) || edge.has_endpoint(b) {
            continue;
        }
        if segments_properly_intersect(&diagonal, &edge) {
            return false;
        }
    }
    point_in_polygon(diagonal.midpoint(), poly) == PointLocation::Inside
}
