//! Polygon triangulation by ear clipping, plus a convex fan baseline.
//!
//! Purpose
//! - Turn an ordered boundary (closed chain of segments) of a simple polygon
//!   into triangles whose union is the polygon's interior, using only the
//!   boundary's own vertices.
//! - Expose every algorithm behind one flat `Triangulator` contract, selected
//!   by name through a `Registry`.
//!
//! Data flow
//! - boundary segments → `extract_vertices` → working vertex cycle
//!   → repeated ear tests (`geom2` predicates) → `Triangulation` (triangles in
//!   emission order, every triangle's three edges appended to a flat list).
//!
//! Failure surface
//! - `TriangulationError::InvalidPolygon` before any clipping when fewer than
//!   three vertices survive extraction.
//! - `TriangulationError::DegenerateOrNonSimplePolygon` when a full scan clips
//!   nothing. Output is only returned on success.
//!
//! Each call owns its working state; triangulators are `Send + Sync` and can be
//! shared across threads without locking.
//!
//! Code cross-refs: `geom2::{point_in_polygon, point_in_triangle, segments_properly_intersect}`

mod boundary;
mod cfg;
pub mod ear_clip;
mod error;
mod fan;
mod output;
mod registry;

pub use boundary::extract_vertices;
pub use cfg::{EarClipCfg, ScanOrder};
pub use ear_clip::{clip_ears, is_ear, is_valid_diagonal, EarClipping};
pub use error::TriangulationError;
pub use fan::FanTriangulation;
pub use output::Triangulation;
pub use registry::Registry;

use crate::geom2::Segment;

/// Uniform contract shared by all triangulation algorithms.
pub trait Triangulator: Send + Sync {
    /// Registry key, e.g. `"ear_clipping"`.
    fn name(&self) -> &'static str;

    /// Human-readable label for display.
    fn label(&self) -> &'static str;

    /// Triangulate the polygon whose boundary is given in traversal order.
    fn run(&self, boundary: &[Segment]) -> Result<Triangulation, TriangulationError>;
}

#[cfg(test)]
mod tests;
