//! Simple-polygon triangulation by ear clipping.
//!
//! Layout
//! - `geom2`: points, segments, triangles, exact predicates, random polygons.
//! - `triangulate`: boundary extraction, the ear-clipping engine, the convex
//!   fan baseline, result assembly and the name-keyed algorithm registry.
//!
//! API Policy
//! - Callers hand in a boundary (segments in traversal order) and get back a
//!   `Triangulation` or a `TriangulationError`; nothing partial is returned.
//! - `api` is the curated import surface for the CLI and benches.

pub mod api;
pub mod geom2;
pub mod triangulate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Point2, PointLocation, Segment, Triangle};
pub use triangulate::{
    EarClipCfg, EarClipping, Registry, ScanOrder, Triangulation, TriangulationError, Triangulator,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_convex_polygon, draw_star_polygon, RadialCfg, ReplayToken, VertexCount,
    };
    pub use crate::geom2::{closed_boundary, polygon_area, Point2, PointLocation, Segment, Triangle};
    pub use crate::triangulate::{
        EarClipCfg, EarClipping, FanTriangulation, Registry, ScanOrder, Triangulation,
        TriangulationError, Triangulator,
    };
    pub use nalgebra::Vector2 as Vec2;
}
