//! Benchmarks for the numeric core.

mod pulse;
mod spectral;

pub use pulse::bench_pulse;
pub use spectral::bench_spectral;
