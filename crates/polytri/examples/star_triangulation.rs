//! Triangulate a few random polygons and print counts and areas.
//!
//! Usage:
//!   cargo run -p polytri --example star_triangulation -- star
//!   cargo run -p polytri --example star_triangulation -- convex

use polytri::api::{
    closed_boundary, draw_convex_polygon, draw_star_polygon, polygon_area, Point2, RadialCfg,
    Registry, ReplayToken, VertexCount,
};

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "star".to_string());
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 5, max: 25 },
        ..RadialCfg::default()
    };
    let mut tok = ReplayToken::new(2025, 0);
    let registry = Registry::with_defaults();
    for i in 0..5 {
        let cur = tok;
        tok = tok.advance();
        let poly: Vec<Point2> = match mode.as_str() {
            "star" => draw_star_polygon(cfg, cur),
            "convex" => match draw_convex_polygon(cfg, cur) {
                Some(p) => p,
                None => continue,
            },
            _ => {
                eprintln!("usage: star_triangulation [star|convex]");
                return;
            }
        };
        let boundary = closed_boundary(&poly);
        for algo in registry.iter() {
            match algo.run(&boundary) {
                Ok(t) => println!(
                    "{mode} sample {i} [{}]: n={}, triangles={}, area={:.6} (shoelace {:.6})",
                    algo.label(),
                    poly.len(),
                    t.len(),
                    t.total_area(),
                    polygon_area(&poly)
                ),
                Err(e) => println!("{mode} sample {i} [{}]: {e}", algo.label()),
            }
        }
    }
}
