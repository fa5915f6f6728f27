//! Planar geometry for simple polygons (exact predicates, no tolerances).
//!
//! Purpose
//! - Provide the point/segment/triangle vocabulary shared by every triangulator
//!   and the predicate stack the ear clipper composes: cross products, proper
//!   segment intersection, point-on-segment, point-in-triangle and ray-casting
//!   point-in-polygon.
//! - Provide reproducible random simple polygons for tests and benches.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; equality is exact component-wise
//!   comparison. Nothing in this module snaps or dedups with an epsilon.
//! - Predicates never fail. Ties resolve through strict inequalities, so a point
//!   exactly on a boundary classifies as `PointLocation::OnEdge`.
//!
//! Code cross-refs: `crate::triangulate::{EarClipping, extract_vertices}`

pub mod predicates;
pub mod rand;
mod types;
mod util;

pub use predicates::{
    cross, orient, point_in_polygon, point_in_triangle, point_on_segment,
    segments_properly_intersect,
};
pub use types::{closed_boundary, Point2, PointLocation, Segment, Triangle};
pub use util::{convex_hull, is_strictly_convex, polygon_area, signed_area};
