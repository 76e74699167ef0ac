// ABOUTME: Benchmark for escape sequence generation across image protocols
// ABOUTME: Tests Kitty chunking, tmux passthrough wrapping, and ANSI half-block rendering

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};
use termimg::{Passthrough, ansi, kitty};

fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 255 / width) as u8, (y * 255 / height) as u8, 128, 255])
    })
}

fn benchmark_kitty_chunking(c: &mut Criterion) {
    let mut group = c.benchmark_group("kitty_chunking");

    for kib in [4usize, 64, 512].iter() {
        let payload = "QUJD".repeat(kib * 256);

        group.bench_with_input(BenchmarkId::new("build_sequence", kib), kib, |b, _| {
            b.iter(|| kitty::build_sequence(&payload))
        });
    }

    group.finish();
}

fn benchmark_passthrough(c: &mut Criterion) {
    let sequence = kitty::build_sequence(&"QUJD".repeat(64 * 256));

    c.bench_function("tmux_wrap_64k", |b| {
        b.iter(|| Passthrough::Tmux.wrap(sequence.clone()))
    });
}

fn benchmark_ansi_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("ansi_rendering");

    for columns in [40u32, 80, 120].iter() {
        let img = gradient(*columns, *columns);

        group.bench_with_input(BenchmarkId::new("render_cells", columns), columns, |b, _| {
            b.iter(|| ansi::render_cells(&img))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_kitty_chunking,
    benchmark_passthrough,
    benchmark_ansi_rendering
);
criterion_main!(benches);
