//! Curated import surface for the CLI, benches and demos.
//!
//! Prefer these re-exports over reaching into submodules; the module layout
//! behind them may move.

// Geometry
pub use crate::geom2::{
    closed_boundary, is_strictly_convex, point_in_polygon, point_in_triangle, polygon_area,
    segments_properly_intersect, signed_area, Point2, PointLocation, Segment, Triangle,
};
// Random simple polygons
pub use crate::geom2::rand::{
    draw_convex_polygon, draw_star_polygon, fit_to_box, RadialCfg, ReplayToken, VertexCount,
};
// Triangulation
pub use crate::triangulate::{
    clip_ears, extract_vertices, EarClipCfg, EarClipping, FanTriangulation, Registry, ScanOrder,
    Triangulation, TriangulationError, Triangulator,
};
