//! Numeric constants for the two lessons, grouped per scene.
//!
//! Defaults reproduce the classroom demos: a ±5 s / ±20 Hz view for the
//! Dirac lesson and a 0-20 s / ±10 Hz view for the Fourier series lesson.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::SampleGrid;
use crate::signal::PulseAlignment;

/// Slider limits for a scene parameter.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub initial: f64,
}

impl ParameterRange {
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Move `steps` slider notches from `value`, snapped to the step lattice
    /// and clamped to the range.
    pub fn step_by(&self, value: f64, steps: i32) -> f64 {
        let notch = ((value - self.min) / self.step).round() + f64::from(steps);
        self.clamp(self.min + notch * self.step)
    }
}

/// Bounds and resolution of a plot axis.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisConfig {
    pub start: f64,
    pub stop: f64,
    pub points: usize,
}

impl AxisConfig {
    pub fn grid(&self) -> Result<SampleGrid> {
        SampleGrid::linspace(self.start, self.stop, self.points)
    }
}

/// Dirac delta lesson: unit-area pulse of width ε and its transform.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiracConfig {
    pub time_axis: AxisConfig,
    pub freq_axis: AxisConfig,
    pub width: ParameterRange,
    /// Below this ε the plot fades toward the limiting flat spectrum
    pub limit_blend_below: f64,
    pub sweep: SweepConfig,
}

impl Default for DiracConfig {
    fn default() -> Self {
        Self {
            time_axis: AxisConfig {
                start: -5.0,
                stop: 5.0,
                points: 2000,
            },
            freq_axis: AxisConfig {
                start: -20.0,
                stop: 20.0,
                points: 2000,
            },
            width: ParameterRange {
                min: 0.001,
                max: 2.0,
                step: 0.001,
                initial: 0.5,
            },
            limit_blend_below: 0.01,
            sweep: SweepConfig::default(),
        }
    }
}

/// Fourier series lesson: pulse train with a variable period.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesConfig {
    pub pulse_width: f64,
    pub amplitude: f64,
    pub alignment: PulseAlignment,
    /// Must stay above `pulse_width`
    pub period: ParameterRange,
    pub time_axis: AxisConfig,
    /// Line spectrum and envelope span `[-f_max, f_max]`
    pub f_max: f64,
    pub envelope_points: usize,
}

impl SeriesConfig {
    pub fn envelope_grid(&self) -> Result<SampleGrid> {
        SampleGrid::symmetric(self.f_max, self.envelope_points)
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            pulse_width: 1.0,
            amplitude: 1.0,
            alignment: PulseAlignment::Leading,
            period: ParameterRange {
                min: 2.0,
                max: 20.0,
                step: 1.0,
                initial: 4.0,
            },
            time_axis: AxisConfig {
                start: 0.0,
                stop: 20.0,
                points: 2000,
            },
            f_max: 10.0,
            envelope_points: 2001,
        }
    }
}

/// Parameter animation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    pub frames: usize,
    pub frame_interval_ms: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            frames: 100,
            frame_interval_ms: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_snaps_and_clamps() {
        let range = SeriesConfig::default().period;
        assert_eq!(range.step_by(4.0, 1), 5.0);
        assert_eq!(range.step_by(4.4, -1), 3.0);
        assert_eq!(range.step_by(3.0, -5), 2.0);
        assert_eq!(range.step_by(19.0, 10), 20.0);
    }

    #[test]
    fn default_axes_are_valid() {
        let dirac = DiracConfig::default();
        assert!(dirac.time_axis.grid().is_ok());
        assert!(dirac.freq_axis.grid().is_ok());

        let series = SeriesConfig::default();
        assert!(series.time_axis.grid().is_ok());
        assert_eq!(series.envelope_grid().unwrap().len(), 2001);
        assert!(series.period.min > series.pulse_width);
    }
}
