//! Example: contour regions on synthetic terrain.
//!
//! Generates a smooth synthetic elevation grid, quantizes it into contour
//! bands, discovers the regions, traces and thins each region's boundary
//! polygon, and writes the surviving outlines to a JSON file. Per-stage
//! timing is printed to stdout.
//!
//! Run from the workspace root:
//!   cargo run -p topo-contour --example contourmap -- --help
//!   cargo run -p topo-contour --example contourmap

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use topo_contour::{ElevationGrid, PathFilterConfig, Regionalizer, trace_regions};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Trace contour region outlines on a synthetic elevation grid")]
struct Args {
    /// Grid rows
    #[arg(long, default_value_t = 512)]
    rows: usize,

    /// Grid columns
    #[arg(long, default_value_t = 512)]
    cols: usize,

    /// Contour interval (quantization step), in elevation units
    #[arg(long, default_value_t = 50.0)]
    step: f32,

    /// Minimum distance between kept polygon points (0 keeps every point)
    #[arg(long, default_value_t = 2.0)]
    min_distance: f32,

    /// Output JSON path
    #[arg(long, default_value = "contours.json")]
    out: String,
}

// ── JSON DTOs ─────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct PointDto {
    col: usize,
    row: usize,
}

#[derive(Serialize)]
struct OutlineDto {
    region: usize,
    value: f32,
    cell_count: usize,
    points: Vec<PointDto>,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Smooth rolling-hills terrain: two superposed sinusoid fields.
fn synthetic_terrain(rows: usize, cols: usize) -> Result<ElevationGrid> {
    let mut data = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let x = c as f32 * 0.012;
            let y = r as f32 * 0.015;
            let h = 400.0
                + 300.0 * (x.sin() * y.cos())
                + 80.0 * ((3.1 * x).sin() + (2.7 * y).sin());
            data.push(h);
        }
    }
    ElevationGrid::from_vec(rows, cols, data).context("building terrain grid")
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    anyhow::ensure!(args.step > 0.0, "step must be positive");

    println!(
        "terrain: {}x{}, step={}, min_distance={}",
        args.rows, args.cols, args.step, args.min_distance
    );

    let mut grid = synthetic_terrain(args.rows, args.cols)?;
    let (lo, hi) = grid.min_max();
    println!("elevation range: {lo:.1}..{hi:.1}");

    let t0 = Instant::now();
    grid.quantize(args.step);
    println!("quantize: {:.2} ms", t0.elapsed().as_secs_f64() * 1e3);

    let t0 = Instant::now();
    let mut regionalizer = Regionalizer::new(&grid).context("building regionalizer")?;
    regionalizer.generate_regions();
    println!(
        "regionalize: {} regions  ({:.2} ms)",
        regionalizer.regions().len(),
        t0.elapsed().as_secs_f64() * 1e3
    );

    let cfg = PathFilterConfig {
        min_distance: args.min_distance,
        ..PathFilterConfig::default()
    };

    let t0 = Instant::now();
    let outlines = trace_regions(&regionalizer, cfg);
    println!(
        "trace: {} outlines  ({:.2} ms)",
        outlines.len(),
        t0.elapsed().as_secs_f64() * 1e3
    );

    let dtos: Vec<OutlineDto> = outlines
        .iter()
        .map(|o| OutlineDto {
            region: o.region,
            value: o.value,
            cell_count: o.cell_count,
            points: o
                .points
                .iter()
                .map(|p| PointDto {
                    col: p.col,
                    row: p.row,
                })
                .collect(),
        })
        .collect();

    let out_file =
        std::fs::File::create(&args.out).with_context(|| format!("creating {}", args.out))?;
    serde_json::to_writer_pretty(out_file, &dtos)
        .with_context(|| format!("writing JSON to {}", args.out))?;

    println!("outlines written to {}", args.out);
    Ok(())
}
