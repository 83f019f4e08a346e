//! Full plot recomputation, as triggered by one slider move.

use std::hint::black_box;

use criterion::Criterion;
use fourier_lab::{
    config::{DiracConfig, SeriesConfig},
    scene::{DiracLesson, Lesson, SeriesLesson},
};

pub fn bench_scenes(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenes");

    let dirac = DiracLesson::new(DiracConfig::default()).unwrap();
    group.bench_function("dirac", |b| b.iter(|| dirac.compute(black_box(0.5))));

    let series = SeriesLesson::new(SeriesConfig::default()).unwrap();
    for &period in &[4.0, 20.0] {
        group.bench_function(format!("series/T={period}"), |b| {
            b.iter(|| series.compute(black_box(period)))
        });
    }

    group.finish();
}
