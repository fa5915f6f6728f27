//! Boundary input (JSON or CSV) and triangulation output documents.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use polytri::api::{closed_boundary, Point2, Segment, Triangulation, Triangulator};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

type Xy = [f64; 2];

#[inline]
fn xy(p: Point2) -> Xy {
    [p.x, p.y]
}

#[inline]
fn point(p: Xy) -> Point2 {
    Point2::new(p[0], p[1])
}

/// Polygon input. `segments` wins over `vertices`; `points` are accepted and ignored.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BoundaryDoc {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<Xy>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<[Xy; 2]>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<Xy>,
}

impl BoundaryDoc {
    pub fn from_vertices(vertices: &[Point2]) -> Self {
        Self {
            vertices: vertices.iter().copied().map(xy).collect(),
            ..Self::default()
        }
    }

    pub fn into_boundary(self) -> Vec<Segment> {
        if !self.segments.is_empty() {
            return self
                .segments
                .into_iter()
                .map(|[a, b]| Segment::new(point(a), point(b)))
                .collect();
        }
        let vertices: Vec<Point2> = self.vertices.into_iter().map(point).collect();
        closed_boundary(&vertices)
    }
}

/// Output written by `polytri run`.
#[derive(Debug, Deserialize, Serialize)]
pub struct TriangulationDoc {
    pub algo: String,
    pub label: String,
    pub triangles: Vec<[Xy; 3]>,
    pub edges: Vec<[Xy; 2]>,
}

impl TriangulationDoc {
    pub fn new(algo: &dyn Triangulator, tri: &Triangulation) -> Self {
        Self {
            algo: algo.name().to_string(),
            label: algo.label().to_string(),
            triangles: tri.triangles.iter().map(|t| t.vertices().map(xy)).collect(),
            edges: tri.edges.iter().map(|e| [xy(e.start), xy(e.end)]).collect(),
        }
    }
}

/// Read a boundary from `.json` (a `BoundaryDoc`) or `.csv` (columns `x`, `y`).
pub fn read_boundary(path: &Path) -> Result<Vec<Segment>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let doc: BoundaryDoc = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(doc.into_boundary())
        }
        Some("csv") => Ok(closed_boundary(&read_csv_vertices(path)?)),
        _ => bail!("unsupported input {} (expected .json or .csv)", path.display()),
    }
}

fn read_csv_vertices(path: &Path) -> Result<Vec<Point2>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading vertices from {}", path.display()))?;
    tracing::debug!(rows = df.height(), "input_csv_shape");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(Point2::new(x, y)),
            _ => Err(anyhow!("row {row}: missing coordinate")),
        })
        .collect()
}

/// Pretty JSON to `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
