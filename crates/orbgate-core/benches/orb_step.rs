//! Benchmarks for the orb-field frame step
//!
//! Run with: cargo bench -p orbgate-core
//!
//! The step runs every 16 ms for the lifetime of the window, so it
//! should stay far below a frame budget even on modest hardware.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use orbgate_core::OrbField;

fn bench_generation(c: &mut Criterion) {
    c.bench_function("generate_field", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| black_box(OrbField::with_rng(1920.0, 1080.0, &mut rng)))
    });
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    group.bench_function("single_frame", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = OrbField::with_rng(1920.0, 1080.0, &mut rng);
        b.iter(|| {
            field.step();
            black_box(field.orbs().len())
        })
    });

    // One simulated second of frames
    group.bench_function("sixty_frames", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = OrbField::with_rng(1920.0, 1080.0, &mut rng);
        b.iter(|| {
            for _ in 0..60 {
                field.step();
            }
            black_box(field.orbs().len())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_generation, bench_step);
criterion_main!(benches);
