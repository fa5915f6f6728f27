use crate::geom2::{Point2, Segment};

use super::TriangulationError;

/// Ordered vertex cycle from boundary segments given in traversal order.
///
/// A segment's start is appended unless it repeats the last vertex; its end is
/// appended unless it closes the cycle onto the first vertex. Segments are not
/// reordered.
pub fn extract_vertices(boundary: &[Segment]) -> Result<Vec<Point2>, TriangulationError> {
    let mut vertices: Vec<Point2> = Vec::with_capacity(boundary.len());
    for seg in boundary {
        if vertices.last() != Some(&seg.start) {
            vertices.push(seg.start);
        }
        if vertices.first() != Some(&seg.end) {
            vertices.push(seg.end);
        }
    }
    if vertices.len() < 3 {
        return Err(TriangulationError::InvalidPolygon {
            vertices: vertices.len(),
        });
    }
    Ok(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::closed_boundary;
    use nalgebra::vector;

    #[test]
    fn closed_chain_round_trips_to_vertices() {
        let verts = vec![vector![0.0, 0.0], vector![4.0, 0.0], vector![4.0, 4.0]];
        assert_eq!(extract_vertices(&closed_boundary(&verts)).unwrap(), verts);
    }

    #[test]
    fn open_chain_keeps_last_end() {
        let segs = vec![
            Segment::new(vector![0.0, 0.0], vector![1.0, 0.0]),
            Segment::new(vector![1.0, 0.0], vector![1.0, 1.0]),
        ];
        let verts = extract_vertices(&segs).unwrap();
        assert_eq!(verts.len(), 3);
        assert_eq!(verts[2], vector![1.0, 1.0]);
    }

    #[test]
    fn two_distinct_points_are_rejected() {
        let segs = vec![
            Segment::new(vector![0.0, 0.0], vector![1.0, 0.0]),
            Segment::new(vector![1.0, 0.0], vector![0.0, 0.0]),
        ];
        assert_eq!(
            extract_vertices(&segs),
            Err(TriangulationError::InvalidPolygon { vertices: 2 })
        );
        assert_eq!(
            extract_vertices(&[]),
            Err(TriangulationError::InvalidPolygon { vertices: 0 })
        );
    }

    #[test]
    fn gap_between_segments_keeps_both_endpoints() {
        // disconnected edges are taken as-is, in the given order
        let segs = vec![
            Segment::new(vector![0.0, 0.0], vector![2.0, 0.0]),
            Segment::new(vector![2.0, 1.0], vector![0.0, 0.0]),
        ];
        let verts = extract_vertices(&segs).unwrap();
        assert_eq!(
            verts,
            vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![2.0, 1.0]]
        );
    }
}
