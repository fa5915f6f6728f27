use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use polytri::api::{
    draw_convex_polygon, draw_star_polygon, fit_to_box, EarClipCfg, EarClipping, RadialCfg,
    Registry, ReplayToken, ScanOrder, TriangulationError, VertexCount,
};
use serde_json::json;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "polytri")]
#[command(about = "Triangulate simple polygons by ear clipping")]
struct Cmd {
    /// Log at DEBUG level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate a boundary (.json or .csv) and write triangles + edges as JSON
    Run {
        #[arg(long, default_value = EarClipping::NAME)]
        algo: String,
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Candidate scan order of the ear clipper
        #[arg(long, value_enum, default_value_t = Scan::Sweep)]
        scan: Scan,
    },
    /// List registered algorithms (key and display label)
    List,
    /// Write a random simple polygon as a `vertices` document
    Sample {
        #[arg(long, value_enum, default_value_t = Shape::Star)]
        kind: Shape,
        #[arg(long, default_value_t = 12)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Rescale so the polygon fits in [-half_width, half_width]²
        #[arg(long, default_value_t = 10.0)]
        half_width: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scan {
    Sweep,
    Restart,
}

impl From<Scan> for ScanOrder {
    fn from(s: Scan) -> Self {
        match s {
            Scan::Sweep => ScanOrder::Sweep,
            Scan::Restart => ScanOrder::Restart,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Star,
    Convex,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Run {
            algo,
            input,
            out,
            scan,
        } => run(algo, input, out, scan),
        Action::List => list(),
        Action::Sample {
            kind,
            n,
            seed,
            half_width,
            out,
        } => sample(kind, n, seed, half_width, out),
        Action::Report => report(),
    }
}

fn registry(scan: Scan) -> Registry {
    let mut reg = Registry::with_defaults();
    reg.register(EarClipping::new(EarClipCfg { scan: scan.into() }));
    reg
}

fn run(algo: String, input: PathBuf, out: PathBuf, scan: Scan) -> Result<()> {
    tracing::info!(algo, input = %input.display(), out = %out.display(), ?scan, "run");
    let boundary = io::read_boundary(&input)?;
    let reg = registry(scan);
    let triangulator = reg
        .get(&algo)
        .ok_or_else(|| TriangulationError::UnknownAlgorithm { name: algo.clone() })?;
    let tri = triangulator
        .run(&boundary)
        .with_context(|| format!("triangulating {}", input.display()))?;
    tracing::info!(
        triangles = tri.len(),
        edges = tri.edges.len(),
        area = tri.total_area(),
        "triangulated"
    );

    io::write_json(&out, &io::TriangulationDoc::new(triangulator, &tri))?;
    let payload = Payload::new(json!({
        "algo": algo,
        "label": triangulator.label(),
        "scan": format!("{scan:?}").to_lowercase(),
        "input": input.display().to_string(),
        "segments": boundary.len(),
        "triangles": tri.len()
    }));
    provenance::write_sidecar(&out, payload)?;
    Ok(())
}

fn list() -> Result<()> {
    for algo in Registry::with_defaults().iter() {
        println!("{}\t{}", algo.name(), algo.label());
    }
    Ok(())
}

fn sample(kind: Shape, n: usize, seed: u64, half_width: f64, out: PathBuf) -> Result<()> {
    tracing::info!(?kind, n, seed, out = %out.display(), "sample");
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    let tok = ReplayToken::new(seed, 0);
    let poly = match kind {
        Shape::Star => draw_star_polygon(cfg, tok),
        Shape::Convex => {
            draw_convex_polygon(cfg, tok).context("convex hull collapsed below a triangle")?
        }
    };
    let poly = fit_to_box(&poly, half_width).context("half_width must be positive")?;
    io::write_json(&out, &io::BoundaryDoc::from_vertices(&poly))?;
    let payload = Payload::new(json!({
        "kind": format!("{kind:?}").to_lowercase(),
        "n": n,
        "seed": seed,
        "half_width": half_width,
        "vertices": poly.len()
    }));
    provenance::write_sidecar(&out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let reg = Registry::with_defaults();
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "polytri_version": polytri::VERSION,
        "algorithms": reg.names().collect::<Vec<_>>(),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
