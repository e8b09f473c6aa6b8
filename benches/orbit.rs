#[macro_use]
extern crate criterion;
extern crate num;
extern crate orbitscope;

use criterion::{black_box, Criterion};
use num::Complex;

use orbitscope::{background, orbit, FractalKind, Viewport};

// A point deep in the set runs the full iteration budget.
fn interior_orbit(c: &mut Criterion) {
    c.bench_function("orbit interior 30", |b| {
        let point = Complex::new(-0.1, 0.1);
        let seed = Complex::new(0.0, 0.0);
        b.iter(|| orbit(FractalKind::Mandelbrot, black_box(point), seed, 30))
    });
}

// A point just outside the set escapes after a handful of steps.
fn escaping_orbit(c: &mut Criterion) {
    c.bench_function("orbit escaping", |b| {
        let point = Complex::new(0.5, 0.5);
        let seed = Complex::new(0.0, 0.0);
        b.iter(|| orbit(FractalKind::Mandelbrot, black_box(point), seed, 30))
    });
}

// The full per-pixel pass at a small but honest frame size.
fn background_pass(c: &mut Criterion) {
    c.bench_function("background 160x120", |b| {
        let view = Viewport::new(160, 120).unwrap();
        let seed = Complex::new(0.0, 0.0);
        b.iter(|| background(&view, FractalKind::Mandelbrot, black_box(seed)))
    });
}

criterion_group!(benches, interior_orbit, escaping_orbit, background_pass);
criterion_main!(benches);
