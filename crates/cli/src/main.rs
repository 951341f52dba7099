use anyhow::Result;
use clap::{Parser, Subcommand};
use polygon3::geom3::rand::{
    draw_convex_polygon, draw_star_polygon, ReplayToken, StarCfg, VertexCount,
};
use polygon3::TriCfg;
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Triangulate planar 3D polygons from files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate a polygon (JSON or CSV) and write the triangle list as JSON
    Triangulate {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Squared-length cutoff for a usable normal
        #[arg(long, default_value_t = TriCfg::default().eps_normal)]
        eps_normal: f64,
        /// Convexity cutoff of the ear test
        #[arg(long, default_value_t = TriCfg::default().eps_ear)]
        eps_ear: f64,
    },
    /// Write a reproducible random polygon in the JSON input format
    Random {
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Draw a convex polygon instead of a star-shaped one
        #[arg(long)]
        convex: bool,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Triangulate {
            input,
            out,
            eps_normal,
            eps_ear,
        } => triangulate(&input, &out, TriCfg { eps_normal, eps_ear }),
        Action::Random {
            vertices,
            seed,
            index,
            convex,
            out,
        } => random(vertices, ReplayToken { seed, index }, convex, &out),
        Action::Report => report(),
    }
}

fn triangulate(input: &str, out: &str, cfg: TriCfg) -> Result<()> {
    tracing::info!(
        input,
        out,
        eps_normal = cfg.eps_normal,
        eps_ear = cfg.eps_ear,
        "triangulate"
    );
    let poly = io::read_polygon(Path::new(input), cfg)?;
    let tri = poly.triangulate();
    if !tri.is_complete() {
        tracing::warn!(
            outcome = ?tri.outcome,
            vertices = poly.num_vertices(),
            "incomplete triangulation"
        );
    }
    io::write_json(Path::new(out), &io::TriangulationDoc::new(&poly, &tri))?;
    tracing::info!(
        vertices = poly.num_vertices(),
        triangles = tri.num_triangles(),
        "triangles_written"
    );
    provenance::write_sidecar(
        out,
        Payload::new(
            "triangulate",
            json!({
                "input": input,
                "eps_normal": cfg.eps_normal,
                "eps_ear": cfg.eps_ear,
                "vertices": poly.num_vertices(),
                "triangles": tri.num_triangles()
            }),
        ),
    )?;
    Ok(())
}

fn random(vertices: usize, tok: ReplayToken, convex: bool, out: &str) -> Result<()> {
    tracing::info!(vertices, seed = tok.seed, index = tok.index, convex, out, "random");
    let poly = if convex {
        draw_convex_polygon(vertices, tok)
    } else {
        let cfg = StarCfg {
            vertex_count: VertexCount::Fixed(vertices),
            ..StarCfg::default()
        };
        draw_star_polygon(cfg, tok)
    };
    io::write_json(Path::new(out), &io::PolygonDoc::from_polygon(&poly))?;
    provenance::write_sidecar(
        out,
        Payload::new(
            "random",
            json!({
                "vertices": vertices,
                "seed": tok.seed,
                "index": tok.index,
                "convex": convex
            }),
        ),
    )?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "polygon3_version": polygon3::VERSION,
        "command": "report",
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn random_then_triangulate_end_to_end() {
        let dir = tempdir().unwrap();
        let poly_path = dir.path().join("poly.json");
        let tris_path = dir.path().join("out/tris.json");
        let poly_str = poly_path.to_str().unwrap();
        let tris_str = tris_path.to_str().unwrap();

        random(10, ReplayToken { seed: 7, index: 3 }, false, poly_str).unwrap();
        assert!(dir.path().join("poly.provenance.json").exists());

        triangulate(poly_str, tris_str, TriCfg::default()).unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(&tris_path).unwrap()).unwrap();
        assert_eq!(doc["outcome"]["kind"], "complete");
        assert_eq!(doc["triangles"].as_array().unwrap().len(), 8);
        assert!(doc["area"].as_f64().unwrap() > 0.0);

        let prov: Value =
            serde_json::from_slice(&fs::read(dir.path().join("out/tris.provenance.json")).unwrap())
                .unwrap();
        assert_eq!(prov["params"]["triangles"], 8);
    }

    #[test]
    fn missing_input_reports_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let out = dir.path().join("tris.json");
        let err = triangulate(
            missing.to_str().unwrap(),
            out.to_str().unwrap(),
            TriCfg::default(),
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("nope.json"));
        assert!(!out.exists());
    }

    #[test]
    fn cli_parses_triangulate_flags() {
        let cmd = Cmd::try_parse_from([
            "cli",
            "triangulate",
            "--input",
            "a.csv",
            "--out",
            "b.json",
            "--eps-ear",
            "0.001",
        ])
        .unwrap();
        match cmd.action {
            Action::Triangulate {
                eps_ear, eps_normal, ..
            } => {
                assert_eq!(eps_ear, 0.001);
                assert_eq!(eps_normal, TriCfg::default().eps_normal);
            }
            _ => panic!("expected triangulate"),
        }
    }
}
