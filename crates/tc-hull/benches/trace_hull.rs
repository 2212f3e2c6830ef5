use criterion::{Criterion, black_box, criterion_group, criterion_main};
use tc_grid::ElevationGrid;
use tc_hull::{PathFilterConfig, trace_regions};
use tc_region::Regionalizer;

fn synthetic_terrain(rows: usize, cols: usize) -> ElevationGrid {
    let mut data = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        for c in 0..cols {
            let x = c as f32 * 0.01;
            let y = r as f32 * 0.013;
            let h = 400.0
                + 300.0 * (x.sin() * y.cos())
                + 80.0 * ((3.1 * x).sin() + (2.7 * y).sin());
            data.push(h);
        }
    }

    let mut grid = ElevationGrid::from_vec(rows, cols, data).expect("valid grid");
    grid.quantize(50.0);
    grid
}

fn bench_trace_regions(c: &mut Criterion) {
    let grid = synthetic_terrain(1024, 1280);
    let mut rz = Regionalizer::new(&grid).expect("valid regionalizer");
    rz.generate_regions();

    let cfg = PathFilterConfig {
        min_distance: 2.0,
        ..PathFilterConfig::default()
    };

    c.bench_function("tc_hull_trace_regions_1280x1024", |b| {
        b.iter(|| {
            let outlines = trace_regions(black_box(&rz), black_box(cfg));
            black_box(outlines.len());
        });
    });
}

criterion_group!(benches, bench_trace_regions);
criterion_main!(benches);
