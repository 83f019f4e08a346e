//! Time-domain signal description and generation.
//!
//! `PulseParameters` is the validated description of a rectangular pulse
//! (single or repeating). The generator in [`pulse`] samples it onto a grid,
//! and the analyzers in [`crate::spectral`] read the same parameters to
//! produce the matching spectra.

/// Rectangular pulse generator.
pub mod pulse;
/// Grid-aligned sample arrays.
pub mod sample;

pub use pulse::{dirac_approximation, generate, PulseSignalGenerator};
pub use sample::SignalSample;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{Result, SignalError};

/// Repetition of the pulse.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Period {
    /// A single pulse, never repeated
    Aperiodic,
    /// Pulse repeats every `T` seconds
    Finite(f64),
}

/// Where a pulse sits inside its period.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PulseAlignment {
    /// On `[-w/2, w/2]`; real, even spectrum
    #[default]
    Centered,
    /// On `[0, w)`; the centred spectrum delayed by `w/2`
    Leading,
}

/// Validated rectangular pulse description.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseParameters {
    width: f64,
    amplitude: f64,
    period: Period,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct PulseFields {
    width: f64,
    amplitude: f64,
    period: Period,
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for PulseParameters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let PulseFields {
            width,
            amplitude,
            period,
        } = PulseFields::deserialize(deserializer)?;
        let params = match period {
            Period::Aperiodic => Self::single(width, amplitude),
            Period::Finite(period) => Self::periodic(width, amplitude, period),
        };
        params.map_err(de::Error::custom)
    }
}

impl PulseParameters {
    /// A single pulse of the given width and height.
    pub fn single(width: f64, amplitude: f64) -> Result<Self> {
        validate_width(width)?;
        validate_amplitude(amplitude, width)?;
        Ok(Self {
            width,
            amplitude,
            period: Period::Aperiodic,
        })
    }

    /// A pulse train; `width` must be strictly below `period`.
    pub fn periodic(width: f64, amplitude: f64, period: f64) -> Result<Self> {
        validate_width(width)?;
        validate_amplitude(amplitude, width)?;
        if !(period.is_finite() && period > 0.0) {
            return Err(SignalError::InvalidPeriod(period));
        }
        if width >= period {
            return Err(SignalError::WidthExceedsPeriod { width, period });
        }
        Ok(Self {
            width,
            amplitude,
            period: Period::Finite(period),
        })
    }

    /// Unit-area pulse of width `epsilon`, height `1/epsilon`.
    pub fn unit_area(epsilon: f64) -> Result<Self> {
        validate_width(epsilon)?;
        Self::single(epsilon, 1.0 / epsilon)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Period length, or `AperiodicSignal` for a single pulse.
    pub fn period_length(&self) -> Result<f64> {
        match self.period {
            Period::Finite(period) => Ok(period),
            Period::Aperiodic => Err(SignalError::AperiodicSignal),
        }
    }

    /// Fraction of each period the pulse is high. `None` for a single pulse.
    pub fn duty_cycle(&self) -> Option<f64> {
        match self.period {
            Period::Finite(period) => Some(self.width / period),
            Period::Aperiodic => None,
        }
    }

    /// Area under one pulse.
    pub fn area(&self) -> f64 {
        self.amplitude * self.width
    }
}

fn validate_width(width: f64) -> Result<()> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(SignalError::InvalidWidth(width))
    }
}

// The pulse area `A·w` must be finite too: it scales every spectrum.
fn validate_amplitude(amplitude: f64, width: f64) -> Result<()> {
    if amplitude.is_finite() && (amplitude * width).is_finite() {
        Ok(())
    } else {
        Err(SignalError::InvalidAmplitude(amplitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_width() {
        assert_eq!(
            PulseParameters::single(0.0, 1.0),
            Err(SignalError::InvalidWidth(0.0))
        );
        assert!(PulseParameters::single(-1.0, 1.0).is_err());
        assert!(PulseParameters::single(f64::NAN, 1.0).is_err());
        assert!(PulseParameters::periodic(-0.5, 1.0, 4.0).is_err());
    }

    #[test]
    fn rejects_bad_period() {
        assert_eq!(
            PulseParameters::periodic(1.0, 1.0, 0.0),
            Err(SignalError::InvalidPeriod(0.0))
        );
        assert!(PulseParameters::periodic(1.0, 1.0, f64::INFINITY).is_err());
        assert_eq!(
            PulseParameters::periodic(1.0, 1.0, 1.0),
            Err(SignalError::WidthExceedsPeriod {
                width: 1.0,
                period: 1.0
            })
        );
    }

    #[test]
    fn rejects_non_finite_amplitude() {
        assert!(PulseParameters::single(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_overflowing_area() {
        assert_eq!(
            PulseParameters::single(1e200, 1e200),
            Err(SignalError::InvalidAmplitude(1e200))
        );
        assert_eq!(
            PulseParameters::periodic(1e200, -1e200, 1e201),
            Err(SignalError::InvalidAmplitude(-1e200))
        );
        assert!(PulseParameters::single(1e200, 1e100).is_ok());
    }

    #[test]
    fn unit_area_pulse() {
        let params = PulseParameters::unit_area(0.25).unwrap();
        assert_eq!(params.amplitude(), 4.0);
        assert_eq!(params.area(), 1.0);

        // 1/ε overflows for subnormal widths
        assert!(PulseParameters::unit_area(1e-310).is_err());
    }

    #[test]
    fn duty_cycle_only_for_trains() {
        let train = PulseParameters::periodic(1.0, 1.0, 4.0).unwrap();
        assert_eq!(train.duty_cycle(), Some(0.25));
        assert_eq!(train.period_length(), Ok(4.0));

        let single = PulseParameters::single(1.0, 1.0).unwrap();
        assert_eq!(single.duty_cycle(), None);
        assert_eq!(single.period_length(), Err(SignalError::AperiodicSignal));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_parameters_are_validated() {
        let train: PulseParameters = serde_json::from_str(
            r#"{"width":1.0,"amplitude":2.0,"period":{"Finite":4.0}}"#,
        )
        .unwrap();
        assert_eq!(train, PulseParameters::periodic(1.0, 2.0, 4.0).unwrap());

        let negative = serde_json::from_str::<PulseParameters>(
            r#"{"width":-2.0,"amplitude":1.0,"period":"Aperiodic"}"#,
        );
        assert!(negative.is_err());
        let too_wide = serde_json::from_str::<PulseParameters>(
            r#"{"width":4.0,"amplitude":1.0,"period":{"Finite":4.0}}"#,
        );
        assert!(too_wide.is_err());
    }
}
