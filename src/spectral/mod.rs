//! Frequency-domain analysis of rectangular pulses.
//!
//! The transforms here are closed forms, evaluated point by point, so they
//! are exact up to floating point and cost one `sin` per output value.
//! [`numeric`] computes the same series coefficients from samples with an
//! FFT, which is how the closed forms are cross-checked.

/// FFT-based series coefficients from one sampled period.
pub mod numeric;
/// Fourier series of a periodic pulse train.
pub mod series;
/// Normalised sinc with exact zeros.
pub mod sinc;
/// Continuous Fourier transform of a single pulse.
pub mod transform;

pub use series::{harmonic_limit, series_coefficients, FourierCoefficientSet, SpectralLine};
pub use sinc::sinc;
pub use transform::{continuous_transform, envelope};

use std::f64::consts::PI;

use crate::error::{Result, SignalError};
use crate::grid::SampleGrid;
use crate::signal::{PulseAlignment, PulseParameters, SignalSample};
use crate::Complex64;

/// Phase of `c` in radians, `atan2(im, re)`.
///
/// A zero coefficient has no direction; its phase is reported as 0 so
/// that `-0.0` components never show up as ±π.
pub fn phase_of(c: Complex64) -> f64 {
    if c.re == 0.0 && c.im == 0.0 {
        0.0
    } else {
        c.arg()
    }
}

/// Spectra of one rectangular pulse description.
///
/// Centred pulses produce purely real values. Leading pulses carry the
/// linear phase `-π f w` of a delay by `w/2`.
#[derive(Debug, Clone, Copy)]
pub struct SpectralAnalyzer {
    params: PulseParameters,
    alignment: PulseAlignment,
}

impl SpectralAnalyzer {
    pub fn new(params: PulseParameters) -> Self {
        Self {
            params,
            alignment: PulseAlignment::Centered,
        }
    }

    pub fn with_alignment(mut self, alignment: PulseAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// `X(f)` of a single pulse: `A·w·sinc(w·f)`, delayed if leading.
    pub fn transform_at(&self, frequency: f64) -> Complex64 {
        let width = self.params.width();
        self.shaped(self.params.area(), width * frequency)
    }

    /// `X(f)` over every point of `freq_grid`.
    ///
    /// Fails with `FrequencyOverflow` when `w·f` at either grid end is not
    /// finite.
    pub fn continuous_transform(
        &self,
        freq_grid: &SampleGrid,
    ) -> Result<SignalSample<Complex64>> {
        let width = self.params.width();
        for frequency in [freq_grid.start(), freq_grid.stop()] {
            if !(width * frequency).is_finite() {
                return Err(SignalError::FrequencyOverflow { width, frequency });
            }
        }
        Ok(SignalSample::from_fn(*freq_grid, |f| self.transform_at(f)))
    }

    /// Coefficient `c_n = (A·w/T)·sinc(n·w/T)`, delayed if leading.
    pub fn coefficient(&self, harmonic: i64) -> Result<Complex64> {
        let period = self.params.period_length()?;
        let x = harmonic as f64 * self.params.width() / period;
        Ok(self.shaped(self.params.area() / period, x))
    }

    /// Coefficients for harmonics `-max_harmonic..=max_harmonic`.
    pub fn series_coefficients(&self, max_harmonic: u32) -> Result<FourierCoefficientSet> {
        let period = self.params.period_length()?;
        let m = i64::from(max_harmonic);
        let values = (-m..=m)
            .map(|n| self.coefficient(n))
            .collect::<Result<Vec<_>>>()?;
        Ok(FourierCoefficientSet::from_values(period, max_harmonic, values))
    }

    /// Single-pulse transform scaled by `1/T`: the curve the coefficients
    /// sample at `f = n/T`.
    pub fn envelope(&self, freq_grid: &SampleGrid) -> Result<SignalSample<Complex64>> {
        let period = self.params.period_length()?;
        Ok(self.continuous_transform(freq_grid)?.scaled(1.0 / period))
    }

    // scale·sinc(x), times e^{-jπx} for a leading pulse (x = w·f)
    fn shaped(&self, scale: f64, x: f64) -> Complex64 {
        let magnitude = scale * sinc(x);
        match self.alignment {
            PulseAlignment::Centered => Complex64::new(magnitude, 0.0),
            PulseAlignment::Leading => {
                if magnitude == 0.0 {
                    Complex64::new(0.0, 0.0)
                } else {
                    Complex64::from_polar(magnitude, -PI * x)
                }
            }
        }
    }
}
