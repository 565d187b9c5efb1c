use criterion::{black_box, criterion_group, criterion_main, Criterion};

use seating_system::models::{SeatGrid, SeatLocation};
use seating_system::services::{candidates, run_allocation};
use seating_system::telemetry::NoopEvents;

// Большой зал с занятым каждым седьмым местом
fn fragmented_grid(rows: usize, columns: usize) -> SeatGrid {
    let mut grid = SeatGrid::create(rows, columns).unwrap();
    for row in 0..rows {
        for column in (row % 7..columns).step_by(7) {
            grid.reserve(SeatLocation::new(row, column)).unwrap();
        }
    }
    grid
}

fn bench_find_all_ranges(c: &mut Criterion) {
    let grid = fragmented_grid(200, 400);
    c.bench_function("find_all_ranges 200x400 n=4", |b| {
        b.iter(|| candidates::find_all_ranges(black_box(&grid), black_box(4)))
    });
}

fn bench_full_run(c: &mut Criterion) {
    let requests: Vec<String> = (0..500).map(|i| ((i % 6) + 1).to_string()).collect();
    c.bench_function("run_allocation 50x60 500 requests", |b| {
        b.iter(|| {
            let grid = SeatGrid::create(50, 60).unwrap();
            run_allocation(grid, None, black_box(&requests), NoopEvents)
        })
    });
}

criterion_group!(benches, bench_find_all_ranges, bench_full_run);
criterion_main!(benches);
