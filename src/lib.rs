//! Rectangular pulses and their spectra.
//!
//! The crate is the numeric core behind two signals-and-systems lessons:
//! the Dirac delta as the limit of a narrowing unit-area pulse, and the
//! Fourier series of a periodic pulse train. Everything here is a pure
//! function of its parameters; the `fourier` binary owns the terminal,
//! holds the current parameter and redraws whatever the core returns.

pub mod config;
pub mod error;
pub mod grid; // Evenly spaced time/frequency axes
pub mod scene; // Parameter-driven recomputation for each lesson
pub mod signal;
pub mod spectral;

pub use error::{Result, SignalError};
pub use grid::SampleGrid;
pub use signal::{Period, PulseAlignment, PulseParameters, SignalSample};

/// Re-exported so callers do not need a direct `num-complex` dependency.
pub use rustfft::num_complex::Complex64;
