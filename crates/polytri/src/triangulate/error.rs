use std::fmt;

/// Errors surfaced by the triangulators and the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TriangulationError {
    /// Fewer than 3 distinct vertices after boundary extraction.
    InvalidPolygon { vertices: usize },
    /// A full scan over the working cycle found no ear.
    DegenerateOrNonSimplePolygon { remaining: usize },
    /// The fan baseline only accepts strictly convex boundaries.
    NotConvex,
    /// No algorithm registered under this key.
    UnknownAlgorithm { name: String },
}

impl fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPolygon { vertices } => write!(
                f,
                "a polygon must have at least 3 vertices (boundary yields {vertices})"
            ),
            Self::DegenerateOrNonSimplePolygon { remaining } => write!(
                f,
                "cannot triangulate this boundary: no ear found with {remaining} vertices left \
                 (self-intersecting or degenerate input?)"
            ),
            Self::NotConvex => write!(f, "boundary is not strictly convex"),
            Self::UnknownAlgorithm { name } => write!(f, "unknown algorithm '{name}'"),
        }
    }
}

impl std::error::Error for TriangulationError {}
