#[macro_use]
extern crate criterion;

use criterion::Criterion;
use seamroute::{find_minimum_seam, PixelGrid};

// Deterministic synthetic intensities; the search cost depends on the
// grid shape, not the values, but scrambled values keep the heap
// honest.
fn scrambled_grid(rows: usize, cols: usize) -> PixelGrid {
    let mut seed: u64 = 0x5eed;
    let data = (0..rows * cols)
        .map(|_| {
            seed = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((seed >> 33) % 256) as u32
        })
        .collect();
    PixelGrid::from_raw(rows, cols, data).unwrap()
}

fn bench_find_seam(c: &mut Criterion) {
    let grid = scrambled_grid(128, 128);
    c.bench_function("find_seam 128x128", move |b| {
        b.iter(|| find_minimum_seam(&grid).unwrap())
    });
}

criterion_group!(benches, bench_find_seam);
criterion_main!(benches);
