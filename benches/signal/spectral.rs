//! Benchmarks for closed-form spectra and the FFT estimate.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use fourier_lab::{
    spectral::{continuous_transform, numeric::numeric_series_coefficients, SpectralAnalyzer},
    PulseAlignment, PulseParameters, SampleGrid,
};

use crate::GRID_SIZES;

pub fn bench_spectral(c: &mut Criterion) {
    let mut group = c.benchmark_group("signal/spectral");

    for &size in GRID_SIZES {
        let grid = SampleGrid::symmetric(20.0, size).unwrap();

        // Real sinc - one sin() per point
        group.bench_with_input(BenchmarkId::new("transform", size), &size, |b, _| {
            b.iter(|| continuous_transform(black_box(0.5), black_box(2.0), black_box(&grid)))
        });

        // Leading pulse adds a from_polar per point
        let params = PulseParameters::periodic(1.0, 1.0, 4.0).unwrap();
        let analyzer = SpectralAnalyzer::new(params).with_alignment(PulseAlignment::Leading);
        group.bench_with_input(BenchmarkId::new("envelope", size), &size, |b, _| {
            b.iter(|| analyzer.envelope(black_box(&grid)))
        });
    }

    // T = 20 s at 10 Hz is the largest line spectrum the series lesson shows
    let params = PulseParameters::periodic(1.0, 1.0, 20.0).unwrap();
    let analyzer = SpectralAnalyzer::new(params).with_alignment(PulseAlignment::Leading);
    group.bench_function("series/closed_form/200", |b| {
        b.iter(|| analyzer.series_coefficients(black_box(200)))
    });
    group.bench_function("series/fft/200", |b| {
        b.iter(|| {
            numeric_series_coefficients(
                black_box(&params),
                PulseAlignment::Leading,
                black_box(200),
                black_box(16384),
            )
        })
    });

    group.finish();
}
