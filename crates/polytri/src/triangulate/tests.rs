//! Scenario and property tests for the triangulators.

use super::*;
use crate::geom2::rand::{draw_convex_polygon, draw_star_polygon, RadialCfg, ReplayToken, VertexCount};
use crate::geom2::{
    closed_boundary, point_in_polygon, polygon_area, segments_properly_intersect, Point2,
    PointLocation, Segment, Triangle,
};
use nalgebra::vector;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

const BOTH_ORDERS: [ScanOrder; 2] = [ScanOrder::Sweep, ScanOrder::Restart];

fn ear_clip(vertices: &[Point2], scan: ScanOrder) -> Result<Triangulation, TriangulationError> {
    EarClipping::new(EarClipCfg { scan }).run(&closed_boundary(vertices))
}

fn square() -> Vec<Point2> {
    vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
    ]
}

fn notched_pentagon() -> Vec<Point2> {
    vec![
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![2.0, 1.0],
        vector![0.0, 4.0],
    ]
}

fn bowtie() -> Vec<Point2> {
    vec![
        vector![0.0, 0.0],
        vector![4.0, 4.0],
        vector![4.0, 0.0],
        vector![0.0, 4.0],
    ]
}

/// n-2 triangles, area conserved, corners from the boundary, edges mirror the
/// triangles, no two triangles overlap.
fn assert_partition(vertices: &[Point2], out: &Triangulation) {
    let n = vertices.len();
    assert_eq!(out.len(), n - 2, "triangle count");
    assert_eq!(out.edges.len(), 3 * out.len(), "edge count");
    for (k, t) in out.triangles.iter().enumerate() {
        assert_eq!(&out.edges[3 * k..3 * k + 3], &t.edges[..]);
    }

    let area = polygon_area(vertices);
    let diff = (out.total_area() - area).abs();
    assert!(diff <= 1e-9 * area.max(1.0), "area {} vs {}", out.total_area(), area);

    for p in out.corners() {
        assert!(vertices.contains(&p), "corner {p:?} not on the boundary");
    }
    for t in &out.triangles {
        assert!(t.area() > 0.0, "degenerate triangle {t:?}");
    }
    assert_no_overlap(&out.triangles);
}

fn assert_no_overlap(tris: &[Triangle]) {
    for (i, a) in tris.iter().enumerate() {
        for b in &tris[i + 1..] {
            for ea in &a.edges {
                for eb in &b.edges {
                    assert!(!segments_properly_intersect(ea, eb), "{a:?} crosses {b:?}");
                }
            }
            assert_ne!(b.contains(a.centroid()), PointLocation::Inside);
            assert_ne!(a.contains(b.centroid()), PointLocation::Inside);
        }
    }
}

/// Orthogonal comb: bottom edge, then `heights.len()` teeth whose gap floors
/// all sit on the line `y = 1`. Not star-shaped for more than one tooth.
fn comb(heights: &[f64]) -> Vec<Point2> {
    let k = heights.len() as f64;
    let mut v = vec![vector![0.0, 0.0], vector![2.0 * k, 0.0]];
    for (j, &h) in heights.iter().enumerate().rev() {
        let x = 2.0 * j as f64;
        v.extend([
            vector![x + 2.0, h],
            vector![x + 1.0, h],
            vector![x + 1.0, 1.0],
            vector![x, 1.0],
        ]);
    }
    v
}

/// Every rotation of the cycle in both windings.
fn rotations(vertices: &[Point2]) -> Vec<Vec<Point2>> {
    let mut reversed = vertices.to_vec();
    reversed.reverse();
    [vertices.to_vec(), reversed]
        .into_iter()
        .flat_map(|cycle| {
            (0..cycle.len()).map(move |r| {
                let mut c = cycle.clone();
                c.rotate_left(r);
                c
            })
        })
        .collect()
}

fn star_cfg(n: usize) -> RadialCfg {
    RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    }
}

#[test]
fn square_gives_two_triangles_of_total_area_16() {
    for scan in BOTH_ORDERS {
        let out = ear_clip(&square(), scan).unwrap();
        assert_eq!(out.len(), 2);
        assert!((out.total_area() - 16.0).abs() < 1e-12);
        assert_partition(&square(), &out);
    }
}

#[test]
fn two_point_boundary_is_invalid() {
    let segs = vec![
        Segment::new(vector![0.0, 0.0], vector![1.0, 1.0]),
        Segment::new(vector![1.0, 1.0], vector![0.0, 0.0]),
    ];
    let reg = Registry::with_defaults();
    for name in ["ear_clipping", "fan"] {
        assert_eq!(
            reg.run(name, &segs),
            Err(TriangulationError::InvalidPolygon { vertices: 2 })
        );
    }
}

#[test]
fn notched_pentagon_gives_three_empty_triangles() {
    let p = notched_pentagon();
    for scan in BOTH_ORDERS {
        let out = ear_clip(&p, scan).unwrap();
        assert_eq!(out.len(), 3);
        assert!((out.total_area() - 10.0).abs() < 1e-12);
        for t in &out.triangles {
            let [a, b, c] = t.vertices();
            for &v in &p {
                if v != a && v != b && v != c {
                    assert_ne!(t.contains(v), PointLocation::Inside);
                }
            }
        }
        assert_partition(&p, &out);
    }
}

#[test]
fn bowtie_has_no_ear() {
    for scan in BOTH_ORDERS {
        assert_eq!(
            ear_clip(&bowtie(), scan),
            Err(TriangulationError::DegenerateOrNonSimplePolygon { remaining: 4 })
        );
    }
}

#[test]
fn clockwise_input_is_accepted() {
    let mut p = notched_pentagon();
    p.reverse();
    let out = ear_clip(&p, ScanOrder::Sweep).unwrap();
    assert_partition(&p, &out);
}

#[test]
fn collinear_boundary_vertex_is_kept() {
    let p = vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![4.0, 0.0],
        vector![4.0, 4.0],
        vector![0.0, 4.0],
    ];
    for scan in BOTH_ORDERS {
        let out = ear_clip(&p, scan).unwrap();
        assert_partition(&p, &out);
    }
}

#[test]
fn u_shape_with_two_reflex_vertices() {
    let p = vec![
        vector![0.0, 0.0],
        vector![3.0, 0.0],
        vector![3.0, 3.0],
        vector![2.0, 3.0],
        vector![2.0, 1.0],
        vector![1.0, 1.0],
        vector![1.0, 3.0],
        vector![0.0, 3.0],
    ];
    for scan in BOTH_ORDERS {
        let out = ear_clip(&p, scan).unwrap();
        assert!((out.total_area() - 7.0).abs() < 1e-12);
        assert_partition(&p, &out);
    }
    // first ear is the outer corner of the right arm in both orders
    let out = ear_clip(&p, ScanOrder::Sweep).unwrap();
    assert_eq!(out.triangles[0].vertices(), [p[1], p[2], p[3]]);
}

#[test]
fn combs_in_every_rotation_and_winding() {
    for teeth in 1..=12 {
        let poly = comb(&vec![2.0; teeth]);
        assert_eq!(poly.len(), 4 * teeth + 2);
        for cycle in rotations(&poly) {
            for scan in BOTH_ORDERS {
                let out = ear_clip(&cycle, scan)
                    .unwrap_or_else(|e| panic!("{teeth} teeth, {scan:?}: {e}"));
                assert_partition(&cycle, &out);
            }
        }
    }
}

#[test]
fn fan_rejects_reflex_boundary() {
    let out = FanTriangulation.run(&closed_boundary(&notched_pentagon()));
    assert_eq!(out, Err(TriangulationError::NotConvex));
}

#[test]
fn fan_matches_ear_clipping_on_square() {
    let boundary = closed_boundary(&square());
    let fan = FanTriangulation.run(&boundary).unwrap();
    assert_partition(&square(), &fan);
    assert_eq!(fan.triangles[0].vertices(), [square()[0], square()[1], square()[2]]);
}

#[test]
fn seeded_star_polygons_sweep_and_restart() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..40 {
        let n = rng.gen_range(3..30);
        let tok = ReplayToken::new(rng.gen(), 0);
        let poly = draw_star_polygon(star_cfg(n), tok);
        for scan in BOTH_ORDERS {
            let out = ear_clip(&poly, scan).unwrap();
            assert_partition(&poly, &out);
        }
    }
}

#[test]
fn shared_registry_across_threads() {
    let reg = Registry::with_defaults();
    std::thread::scope(|s| {
        for idx in 0..4 {
            let reg = &reg;
            s.spawn(move || {
                let poly = draw_star_polygon(star_cfg(16), ReplayToken::new(99, idx));
                let out = reg.run("ear_clipping", &closed_boundary(&poly)).unwrap();
                assert_eq!(out.len(), 14);
            });
        }
    });
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn star_polygons_partition(seed in any::<u64>(), n in 3usize..40, jitter in 0.0f64..0.9) {
        let cfg = RadialCfg { radial_jitter: jitter, ..star_cfg(n) };
        let poly = draw_star_polygon(cfg, ReplayToken::new(seed, 0));
        let out = ear_clip(&poly, ScanOrder::Sweep).unwrap();
        assert_partition(&poly, &out);
    }

    #[test]
    fn convex_polygons_never_fail(seed in any::<u64>(), n in 3usize..40) {
        let cfg = RadialCfg { radial_jitter: 0.2, ..star_cfg(n) };
        let Some(poly) = draw_convex_polygon(cfg, ReplayToken::new(seed, 1)) else {
            return Ok(());
        };
        let boundary = closed_boundary(&poly);
        for scan in BOTH_ORDERS {
            let out = EarClipping::new(EarClipCfg { scan }).run(&boundary).unwrap();
            assert_partition(&poly, &out);
        }
        let fan = FanTriangulation.run(&boundary).unwrap();
        prop_assert_eq!(fan.len(), poly.len() - 2);
        prop_assert!((fan.total_area() - polygon_area(&poly)).abs() < 1e-9);
    }

    #[test]
    fn combs_with_ragged_teeth_partition(
        heights in prop::collection::vec(2u8..7, 1..10),
        rot in any::<usize>(),
        clockwise in any::<bool>(),
    ) {
        let heights: Vec<f64> = heights.into_iter().map(f64::from).collect();
        let mut poly = comb(&heights);
        if clockwise {
            poly.reverse();
        }
        let r = rot % poly.len();
        poly.rotate_left(r);
        for scan in BOTH_ORDERS {
            let out = ear_clip(&poly, scan).unwrap();
            assert_partition(&poly, &out);
        }
    }

    #[test]
    fn boundary_vertices_classify_on_edge(seed in any::<u64>(), n in 3usize..30) {
        let poly = draw_star_polygon(star_cfg(n), ReplayToken::new(seed, 2));
        for &v in &poly {
            prop_assert_eq!(point_in_polygon(v, &poly), PointLocation::OnEdge);
        }
    }
}
