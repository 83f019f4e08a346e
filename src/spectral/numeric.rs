/*
Series coefficients from samples
================================

    c_n = (1/T) ∫₀ᵀ x(t) e^{-j2πnt/T} dt

Sampling one period at t_k = k·T/N turns the integral into a DFT:

    c_n ≈ (1/N) Σ_{k=0}^{N-1} x[k] e^{-j2πnk/N} = X[n mod N] / N

Negative harmonics live at the top of the FFT output (bin N - |n|). N must
exceed 2M so that +M and -M do not land in the same bin. The estimate is a
rectangle rule across the pulse edges, so it converges like 1/N.
*/

use std::sync::Arc;

use log::debug;
use rustfft::{Fft, FftPlanner};

use super::series::FourierCoefficientSet;
use crate::error::{Result, SignalError};
use crate::signal::{PulseAlignment, PulseParameters, PulseSignalGenerator};
use crate::Complex64;

/// Estimate `c_{-M..=M}` of a pulse train from `samples` points of one period.
pub fn numeric_series_coefficients(
    params: &PulseParameters,
    alignment: PulseAlignment,
    max_harmonic: u32,
    samples: usize,
) -> Result<FourierCoefficientSet> {
    let period = params.period_length()?;
    if samples <= 2 * max_harmonic as usize {
        return Err(SignalError::TooFewSamples {
            samples,
            max_harmonic,
        });
    }

    let generator = PulseSignalGenerator::new(*params).with_alignment(alignment);
    let dt = period / samples as f64;
    let mut buffer: Vec<Complex64> = (0..samples)
        .map(|k| Complex64::new(generator.value_at(k as f64 * dt), 0.0))
        .collect();

    let mut planner = FftPlanner::new();
    let fft: Arc<dyn Fft<f64>> = planner.plan_fft_forward(samples);
    fft.process(&mut buffer);

    debug!("numeric series: {samples}-point FFT for {max_harmonic} harmonics");

    let scale = 1.0 / samples as f64;
    let n = samples as i64;
    let m = i64::from(max_harmonic);
    let values = (-m..=m)
        .map(|harmonic| buffer[harmonic.rem_euclid(n) as usize] * scale)
        .collect();

    Ok(FourierCoefficientSet::from_values(period, max_harmonic, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectral::SpectralAnalyzer;

    fn assert_close(numeric: &FourierCoefficientSet, exact: &FourierCoefficientSet, tol: f64) {
        for (a, b) in numeric.iter().zip(exact.iter()) {
            assert_eq!(a.harmonic, b.harmonic);
            let err = (a.value - b.value).norm();
            assert!(err < tol, "n = {}: {} vs {}", a.harmonic, a.value, b.value);
        }
    }

    #[test]
    fn centered_train_matches_closed_form() {
        let params = PulseParameters::periodic(2.0, 1.0, 10.0).unwrap();
        let numeric =
            numeric_series_coefficients(&params, PulseAlignment::Centered, 5, 8192).unwrap();
        let exact = SpectralAnalyzer::new(params).series_coefficients(5).unwrap();

        assert_close(&numeric, &exact, 2e-3);
    }

    #[test]
    fn leading_train_matches_closed_form() {
        let params = PulseParameters::periodic(1.0, 1.0, 4.0).unwrap();
        let numeric =
            numeric_series_coefficients(&params, PulseAlignment::Leading, 10, 16384).unwrap();
        let exact = SpectralAnalyzer::new(params)
            .with_alignment(PulseAlignment::Leading)
            .series_coefficients(10)
            .unwrap();

        assert_close(&numeric, &exact, 2e-3);
    }

    #[test]
    fn needs_more_samples_than_harmonics() {
        let params = PulseParameters::periodic(1.0, 1.0, 4.0).unwrap();
        assert_eq!(
            numeric_series_coefficients(&params, PulseAlignment::Centered, 8, 16),
            Err(SignalError::TooFewSamples {
                samples: 16,
                max_harmonic: 8
            })
        );
    }

    #[test]
    fn needs_a_period() {
        let params = PulseParameters::single(1.0, 1.0).unwrap();
        assert_eq!(
            numeric_series_coefficients(&params, PulseAlignment::Centered, 2, 64),
            Err(SignalError::AperiodicSignal)
        );
    }
}
