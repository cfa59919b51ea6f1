#[macro_use]
extern crate criterion;
extern crate julia_set;
extern crate num;

use criterion::{black_box, Criterion};
use julia_set::julia::{DEFAULT_CONSTANT, DEFAULT_ITERATIONS, DEFAULT_THRESHOLD};
use julia_set::JuliaRenderer;
use num::Complex;

fn classic(width: usize, height: usize) -> JuliaRenderer {
    JuliaRenderer::new(
        width,
        height,
        Complex::new(-1.5, -1.5),
        Complex::new(1.5, 1.5),
        DEFAULT_CONSTANT,
        DEFAULT_ITERATIONS,
        DEFAULT_THRESHOLD,
    )
    .unwrap()
}

// The origin never escapes, so this measures the full iteration
// budget for a single point.
fn bench_escape(c: &mut Criterion) {
    let renderer = classic(2, 2);
    c.bench_function("escape of the origin", move |b| {
        b.iter(|| renderer.escape(black_box(Complex::new(0.0, 0.0))))
    });
}

fn bench_render_single(c: &mut Criterion) {
    let renderer = classic(64, 64);
    c.bench_function("render 64x64 on one thread", move |b| {
        b.iter(|| renderer.render_single())
    });
}

fn bench_render_threaded(c: &mut Criterion) {
    let renderer = classic(64, 64);
    c.bench_function("render 64x64 on four threads", move |b| {
        b.iter(|| renderer.render(4))
    });
}

criterion_group!(
    benches,
    bench_escape,
    bench_render_single,
    bench_render_threaded
);
criterion_main!(benches);
