// Benchmarks for full choreography runs.
//
// Measures end-to-end event generation for both probability sources. The
// classroom scene is tiny; the scaled variant stresses the per-slot path
// with a larger document grid.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use topic_stage_sim::choreography::Choreography;
use topic_stage_sim::config::SceneConfig;

fn classroom_static(c: &mut Criterion) {
    c.bench_function("classroom_static_full_run", |b| {
        b.iter(|| {
            let mut engine =
                Choreography::with_seed(black_box(SceneConfig::classroom()), 42).unwrap();
            black_box(engine.run_to_end().unwrap())
        });
    });
}

fn classroom_drawn(c: &mut Criterion) {
    c.bench_function("classroom_drawn_full_run", |b| {
        b.iter(|| {
            let mut engine =
                Choreography::with_seed(black_box(SceneConfig::classroom_drawn()), 42).unwrap();
            black_box(engine.run_to_end().unwrap())
        });
    });
}

fn scaled_drawn(c: &mut Criterion) {
    let mut config = SceneConfig::classroom_drawn();
    config.documents = 100;
    config.slots_per_document = 50;
    c.bench_function("drawn_100_docs_50_slots", |b| {
        b.iter(|| {
            let mut engine = Choreography::with_seed(black_box(config.clone()), 42).unwrap();
            black_box(engine.run_to_end().unwrap())
        });
    });
}

criterion_group!(benches, classroom_static, classroom_drawn, scaled_drawn);
criterion_main!(benches);
