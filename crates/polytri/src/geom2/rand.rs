//! Random simple polygons in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic sources of simple polygons for property tests, benches and
//!   the CLI `sample` command.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter. Connecting the points in angle order gives a star-shaped
//!   (hence simple) counterclockwise polygon; taking their convex hull instead
//!   gives a strictly convex one.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point2;
use super::util::{bounding_box, convex_hull};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    /// Values near 1 give deep reflex notches.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.6,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Next token in the same stream.
    pub fn advance(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn radial_points(cfg: RadialCfg, tok: ReplayToken) -> Vec<Point2> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            (k as f64) * delta + jitter
        })
        .collect();
    angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            let th = th + phase;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

/// Draw a star-shaped simple polygon (counterclockwise, star center at the origin).
///
/// Angles stay strictly increasing because the angular jitter is below half
/// the spacing, so the cycle never self-intersects.
pub fn draw_star_polygon(cfg: RadialCfg, tok: ReplayToken) -> Vec<Point2> {
    radial_points(cfg, tok)
}

/// Draw a strictly convex polygon (counterclockwise) as the hull of a radial draw.
///
/// The hull may have fewer vertices than requested; returns `None` only if it
/// collapses below a triangle.
pub fn draw_convex_polygon(cfg: RadialCfg, tok: ReplayToken) -> Option<Vec<Point2>> {
    convex_hull(&radial_points(cfg, tok))
}

/// Uniformly scale about the origin so the bounding box fits in `[-half, half]²`.
pub fn fit_to_box(vertices: &[Point2], half: f64) -> Option<Vec<Point2>> {
    let (lo, hi) = bounding_box(vertices)?;
    let extent = [lo.x, lo.y, hi.x, hi.y]
        .into_iter()
        .fold(0.0_f64, |m, c| m.max(c.abs()));
    if !(extent.is_finite() && extent > 0.0 && half > 0.0) {
        return None;
    }
    let s = half / extent;
    Some(vertices.iter().map(|p| p * s).collect())
}
