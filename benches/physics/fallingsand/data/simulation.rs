use criterion::{criterion_group, BatchSize, Criterion};

use super::super::get_simulation;

fn bench_step(c: &mut Criterion) {
    c.bench_function("step", |b| {
        b.iter_batched(get_simulation, |mut sim| sim.step(), BatchSize::SmallInput)
    });
}

fn bench_step_settled(c: &mut Criterion) {
    let mut sim = get_simulation();
    for _ in 0..200 {
        sim.step();
    }
    c.bench_function("step_settled", |b| b.iter(|| sim.step()));
}

criterion_group!(benches, bench_step, bench_step_settled);
