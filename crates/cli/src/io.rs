//! Polygon and triangulation documents on disk.
//!
//! Input
//! - JSON: `{"vertices": [{"position": [x, y, z], "index": 7}, ...]}`; `index`
//!   is optional and auto-assigned when missing.
//! - CSV (by `.csv` extension): columns `x,y,z` and an optional `index`.
//!
//! Output
//! - `{"triangles": [[a, b, c], ...], "outcome": {...}, "area": .., "normal": [..],
//!   "center": [..] | null, "extent": [..]}`.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use polygon3::{EarClipOutcome, Polygon3, TriCfg, Triangulation, Vec3};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VertexDoc {
    pub position: [f64; 3],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolygonDoc {
    pub vertices: Vec<VertexDoc>,
}

impl PolygonDoc {
    pub fn from_polygon(poly: &Polygon3) -> Self {
        let vertices = poly
            .iter()
            .map(|v| VertexDoc {
                position: [v.position.x, v.position.y, v.position.z],
                index: Some(v.index),
            })
            .collect();
        Self { vertices }
    }

    pub fn to_polygon(&self, cfg: TriCfg) -> Polygon3 {
        let mut poly = Polygon3::with_cfg(cfg);
        for v in &self.vertices {
            let p = Vec3::from(v.position);
            match v.index {
                Some(index) => poly.add_vertex_with_index(p, index),
                None => {
                    poly.add_vertex(p);
                }
            }
        }
        poly
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutcomeDoc {
    Complete,
    TooFewVertices,
    Degenerate,
    Partial { remaining: usize },
}

impl From<EarClipOutcome> for OutcomeDoc {
    fn from(o: EarClipOutcome) -> Self {
        match o {
            EarClipOutcome::Complete => OutcomeDoc::Complete,
            EarClipOutcome::TooFewVertices => OutcomeDoc::TooFewVertices,
            EarClipOutcome::Degenerate => OutcomeDoc::Degenerate,
            EarClipOutcome::Partial { remaining } => OutcomeDoc::Partial { remaining },
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct TriangulationDoc {
    pub triangles: Vec<[i64; 3]>,
    pub outcome: OutcomeDoc,
    pub area: f64,
    pub normal: [f64; 3],
    /// Bounding-box center; absent for an empty polygon.
    pub center: Option<[f64; 3]>,
    pub extent: [f64; 3],
}

impl TriangulationDoc {
    pub fn new(poly: &Polygon3, tri: &Triangulation) -> Self {
        let n = poly.normal();
        let bounds = poly.bounds();
        let e = bounds.extent();
        Self {
            triangles: tri.triangles().collect(),
            outcome: tri.outcome.into(),
            area: poly.area(),
            normal: [n.x, n.y, n.z],
            center: bounds.center().map(|c| [c.x, c.y, c.z]),
            extent: [e.x, e.y, e.z],
        }
    }
}

/// Read a boundary from JSON or CSV (chosen by extension).
pub fn read_polygon(path: &Path, cfg: TriCfg) -> Result<Polygon3> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let doc = if is_csv {
        read_csv(path)?
    } else {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing polygon JSON {}", path.display()))?
    };
    Ok(doc.to_polygon(cfg))
}

fn read_csv(path: &Path) -> Result<PolygonDoc> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening CSV {}", path.display()))?
        .collect()
        .with_context(|| format!("reading CSV {}", path.display()))?;
    let xs = f64_column(&df, "x")?;
    let ys = f64_column(&df, "y")?;
    let zs = f64_column(&df, "z")?;
    let indices = if df.column("index").is_ok() {
        Some(i64_column(&df, "index")?)
    } else {
        None
    };
    tracing::debug!(rows = df.height(), indexed = indices.is_some(), "polygon_csv");

    let vertices = (0..df.height())
        .map(|row| VertexDoc {
            position: [xs[row], ys[row], zs[row]],
            index: indices.as_ref().map(|ix| ix[row]),
        })
        .collect();
    Ok(PolygonDoc { vertices })
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    let values = series.f64()?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null `{name}` in row {row}")))
        .collect()
}

fn i64_column(df: &DataFrame, name: &str) -> Result<Vec<i64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Int64)?;
    let values = series.i64()?;
    values
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null `{name}` in row {row}")))
        .collect()
}

/// Pretty-print `value` to `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    if path.is_dir() {
        bail!("output path {} is a directory", path.display());
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
