//! Benchmarks for time-domain pulse sampling.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fourier_lab::{
    signal::{dirac_approximation, PulseSignalGenerator},
    PulseAlignment, PulseParameters, SampleGrid,
};

use crate::GRID_SIZES;

pub fn bench_pulse(c: &mut Criterion) {
    let mut group = c.benchmark_group("signal/pulse");

    for &size in GRID_SIZES {
        let grid = SampleGrid::symmetric(5.0, size).unwrap();

        // Single centred pulse - one comparison per sample
        group.bench_with_input(BenchmarkId::new("dirac", size), &size, |b, _| {
            b.iter(|| dirac_approximation(black_box(0.5), black_box(&grid)))
        });

        // Pulse train - rem_euclid per sample
        let params = PulseParameters::periodic(1.0, 1.0, 4.0).unwrap();
        let train = PulseSignalGenerator::new(params).with_alignment(PulseAlignment::Leading);
        group.bench_with_input(BenchmarkId::new("train", size), &size, |b, _| {
            b.iter(|| train.generate(black_box(&grid)))
        });
    }

    group.finish();
}
