use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use ua_braille::registry::SpinnerName;
use ua_braille::scale::scale;
use ua_braille::{DotGrid, braille_to_grid, grid_to_braille};
use ua_core::spinner::ScaleFactor;

fn bench_codec(c: &mut Criterion) {
    let grid = DotGrid::from_fn(64, 128, |r, c| (r * 7 + c * 3) % 5 == 0).unwrap_or_else(|_| {
        unreachable!("64×128 est aligné sur les cellules")
    });
    let text = grid_to_braille(&grid);

    c.bench_function("grid_to_braille_64x128", |b| {
        b.iter(|| grid_to_braille(black_box(&grid)));
    });
    c.bench_function("braille_to_grid_64x128", |b| {
        b.iter(|| braille_to_grid(black_box(&text)));
    });
}

fn bench_scale(c: &mut Criterion) {
    let helix = SpinnerName::Helix.spinner();
    c.bench_function("scale_helix_x2", |b| {
        b.iter(|| scale(black_box(helix), ScaleFactor::Two));
    });
    c.bench_function("scale_helix_x3", |b| {
        b.iter(|| scale(black_box(helix), ScaleFactor::Three));
    });
}

criterion_group!(benches, bench_codec, bench_scale);
criterion_main!(benches);
