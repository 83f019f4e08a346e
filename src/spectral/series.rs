use std::ops::RangeInclusive;

use super::{phase_of, SpectralAnalyzer};
use crate::error::Result;
use crate::signal::PulseParameters;
use crate::Complex64;

/// Complex coefficients `c_n` for harmonics `-M..=M` of one periodic signal.
///
/// Built whole by the analyzer and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FourierCoefficientSet {
    period: f64,
    max_harmonic: u32,
    values: Vec<Complex64>, // index = n + M
}

/// One line of the line spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralLine {
    pub harmonic: i64,
    /// `n / T` in Hz
    pub frequency: f64,
    pub value: Complex64,
}

impl SpectralLine {
    pub fn magnitude(&self) -> f64 {
        self.value.norm()
    }

    pub fn phase(&self) -> f64 {
        phase_of(self.value)
    }
}

impl FourierCoefficientSet {
    pub(crate) fn from_values(period: f64, max_harmonic: u32, values: Vec<Complex64>) -> Self {
        debug_assert_eq!(values.len(), 2 * max_harmonic as usize + 1);
        Self {
            period,
            max_harmonic,
            values,
        }
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn max_harmonic(&self) -> u32 {
        self.max_harmonic
    }

    pub fn harmonics(&self) -> RangeInclusive<i64> {
        let m = i64::from(self.max_harmonic);
        -m..=m
    }

    /// Number of coefficients, `2M + 1`.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, harmonic: i64) -> Option<Complex64> {
        let index = harmonic.checked_add(i64::from(self.max_harmonic))?;
        usize::try_from(index)
            .ok()
            .and_then(|i| self.values.get(i))
            .copied()
    }

    /// Frequency of harmonic `n`: `n / T`.
    pub fn frequency(&self, harmonic: i64) -> f64 {
        harmonic as f64 / self.period
    }

    pub fn magnitude(&self, harmonic: i64) -> Option<f64> {
        self.get(harmonic).map(|c| c.norm())
    }

    /// Phase of harmonic `n`; 0 for a zero coefficient.
    pub fn phase(&self, harmonic: i64) -> Option<f64> {
        self.get(harmonic).map(phase_of)
    }

    /// Lines in ascending harmonic order.
    pub fn iter(&self) -> impl Iterator<Item = SpectralLine> + '_ {
        self.harmonics()
            .zip(self.values.iter())
            .map(move |(harmonic, &value)| SpectralLine {
                harmonic,
                frequency: self.frequency(harmonic),
                value,
            })
    }

    /// `(frequency, |c_n|)` points for a stem plot.
    pub fn magnitude_points(&self) -> Vec<(f64, f64)> {
        self.iter().map(|l| (l.frequency, l.magnitude())).collect()
    }

    /// `(frequency, ∠c_n)` points for a stem plot.
    pub fn phase_points(&self) -> Vec<(f64, f64)> {
        self.iter().map(|l| (l.frequency, l.phase())).collect()
    }

    /// `Σ |c_n|²`, the power captured by the retained harmonics (Parseval).
    pub fn power(&self) -> f64 {
        self.values.iter().map(|c| c.norm_sqr()).sum()
    }
}

/// Harmonics whose line frequency fits in `[-f_max, f_max]`: `⌊f_max·T⌋`.
pub fn harmonic_limit(period: f64, f_max: f64) -> u32 {
    let limit = (f_max * period).floor();
    if limit.is_finite() && limit > 0.0 {
        limit.min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// `c_n = (A·w/T)·sinc(n·w/T)` for `n` in `-max_harmonic..=max_harmonic`,
/// for a train of centred pulses.
pub fn series_coefficients(
    width: f64,
    amplitude: f64,
    period: f64,
    max_harmonic: u32,
) -> Result<FourierCoefficientSet> {
    let params = PulseParameters::periodic(width, amplitude, period)?;
    SpectralAnalyzer::new(params).series_coefficients(max_harmonic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SignalError;

    #[test]
    fn classroom_scenario() {
        let set = series_coefficients(2.0, 1.0, 10.0, 5).unwrap();

        assert_eq!(set.len(), 11);
        assert_eq!(set.get(0), Some(Complex64::new(0.2, 0.0)));
        assert!((set.get(1).unwrap().re - 0.1871).abs() < 1e-4);
        assert_eq!(set.magnitude(5), Some(0.0));
        assert_eq!(set.get(6), None);
        assert_eq!(set.get(-6), None);
    }

    #[test]
    fn nulls_where_duty_cycle_times_n_is_integer() {
        // w/T = 1/4: every fourth harmonic vanishes
        let set = series_coefficients(1.0, 3.0, 4.0, 40).unwrap();
        for n in set.harmonics().filter(|n| *n != 0 && n % 4 == 0) {
            assert_eq!(set.magnitude(n), Some(0.0), "n = {n}");
            assert_eq!(set.phase(n), Some(0.0), "n = {n}");
        }
        assert_eq!(set.get(0), Some(Complex64::new(0.75, 0.0)));
    }

    #[test]
    fn coefficients_are_even_for_centered_pulse() {
        let set = series_coefficients(1.3, 1.0, 7.0, 25).unwrap();
        for n in 1..=25 {
            assert_eq!(set.get(n), set.get(-n));
        }
    }

    #[test]
    fn negative_lobes_have_phase_pi() {
        // sinc(6/4) < 0
        let set = series_coefficients(1.0, 1.0, 4.0, 8).unwrap();
        assert!(set.get(6).unwrap().re < 0.0);
        assert_eq!(set.phase(6), Some(std::f64::consts::PI));
    }

    #[test]
    fn lines_carry_frequency() {
        let set = series_coefficients(1.0, 1.0, 4.0, 2).unwrap();
        let freqs: Vec<f64> = set.iter().map(|l| l.frequency).collect();
        assert_eq!(freqs, vec![-0.5, -0.25, 0.0, 0.25, 0.5]);
    }

    #[test]
    fn full_duty_cycle_limit() {
        // period → width: c_0 → A, all other lines → 0
        let set = series_coefficients(1.0, 2.0, 1.0 + 1e-9, 10).unwrap();
        assert!((set.get(0).unwrap().re - 2.0).abs() < 1e-8);
        for n in set.harmonics().filter(|n| *n != 0) {
            assert!(set.magnitude(n).unwrap() < 1e-8, "n = {n}");
        }
    }

    #[test]
    fn parseval_power_approaches_mean_square() {
        // mean square of the train is A²·w/T = 0.25
        let set = series_coefficients(1.0, 1.0, 4.0, 2000).unwrap();
        assert!((set.power() - 0.25).abs() < 1e-3);
    }

    #[test]
    fn harmonic_limit_floors() {
        assert_eq!(harmonic_limit(4.0, 10.0), 40);
        assert_eq!(harmonic_limit(2.5, 1.0), 2);
        assert_eq!(harmonic_limit(0.5, 1.0), 0);
        assert_eq!(harmonic_limit(1.0, -3.0), 0);
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert_eq!(
            series_coefficients(0.0, 1.0, 4.0, 3),
            Err(SignalError::InvalidWidth(0.0))
        );
        assert_eq!(
            series_coefficients(1.0, 1.0, -4.0, 3),
            Err(SignalError::InvalidPeriod(-4.0))
        );
        assert!(series_coefficients(5.0, 1.0, 4.0, 3).is_err());
    }
}
