use criterion::{black_box, criterion_group, Criterion};

use super::super::get_simulation;

fn bench_texture(c: &mut Criterion) {
    let sim = get_simulation();
    c.bench_function("texture", |b| {
        b.iter(|| {
            black_box(sim.texture());
        })
    });
}

fn bench_to_bevy_image(c: &mut Criterion) {
    let image = get_simulation().texture();
    c.bench_function("to_bevy_image", |b| {
        b.iter(|| black_box(image.clone()).to_bevy_image())
    });
}

criterion_group!(benches, bench_texture, bench_to_bevy_image);
