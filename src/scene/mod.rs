//! Parameter-driven recomputation for each lesson.
//!
//! A front-end holds one [`Scene`] per lesson and forwards every slider
//! move, key press or animation tick to [`Scene::set_parameter`]. The scene
//! asks its [`Lesson`] for a fresh [`Plot`] and swaps it in whole. When the
//! lesson rejects the value, the previous parameter and plot stay in place
//! so the screen keeps showing the last valid picture.

/// Dirac delta as the limit of a narrowing pulse.
pub mod dirac;
/// Fourier series of a pulse train.
pub mod series;
/// Logarithmic parameter animation.
pub mod sweep;

pub use dirac::DiracLesson;
pub use series::SeriesLesson;
pub use sweep::Sweep;

use log::{debug, warn};

use crate::config::ParameterRange;
use crate::error::Result;
use crate::signal::SignalSample;
use crate::spectral::FourierCoefficientSet;
use crate::Complex64;

/// Everything a front-end draws for one parameter value.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub time: SignalSample,
    pub spectrum: SpectrumPlot,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpectrumPlot {
    /// Continuous transform of a single pulse
    Continuous {
        transform: SignalSample,
        /// 0..=1 weight of the limiting flat spectrum, for crossfading
        limit_weight: f64,
    },
    /// Line spectrum of a pulse train with its continuous envelope
    Lines {
        coefficients: FourierCoefficientSet,
        envelope: SignalSample<Complex64>,
    },
}

/// One lesson: how a parameter value becomes a plot.
pub trait Lesson {
    fn title(&self) -> &str;

    /// Short symbol for the parameter, e.g. "ε" or "T"
    fn parameter_label(&self) -> &str;

    fn range(&self) -> ParameterRange;

    /// Human-readable `label = value`.
    fn format_parameter(&self, value: f64) -> String {
        format!("{} = {value:.2}", self.parameter_label())
    }

    /// Recompute the full plot for `parameter`.
    fn compute(&self, parameter: f64) -> Result<Plot>;

    /// Animation starting from `current`, if the lesson has one.
    fn sweep(&self, _current: f64) -> Option<Sweep> {
        None
    }
}

/// A lesson together with its current parameter and last valid plot.
pub struct Scene {
    lesson: Box<dyn Lesson>,
    parameter: f64,
    plot: Plot,
}

impl Scene {
    /// Build the scene at the lesson's initial parameter.
    pub fn new<L: Lesson + 'static>(lesson: L) -> Result<Self> {
        let parameter = lesson.range().initial;
        let plot = lesson.compute(parameter)?;
        Ok(Self {
            lesson: Box::new(lesson),
            parameter,
            plot,
        })
    }

    pub fn lesson(&self) -> &dyn Lesson {
        self.lesson.as_ref()
    }

    pub fn parameter(&self) -> f64 {
        self.parameter
    }

    pub fn plot(&self) -> &Plot {
        &self.plot
    }

    /// Recompute for `value`. On error nothing changes.
    pub fn set_parameter(&mut self, value: f64) -> Result<()> {
        match self.lesson.compute(value) {
            Ok(plot) => {
                debug!("{}: {} = {value}", self.lesson.title(), self.lesson.parameter_label());
                self.parameter = value;
                self.plot = plot;
                Ok(())
            }
            Err(err) => {
                warn!(
                    "{}: rejected {} = {value}: {err}",
                    self.lesson.title(),
                    self.lesson.parameter_label()
                );
                Err(err)
            }
        }
    }

    /// Move the parameter `steps` notches along the lesson's range.
    pub fn step(&mut self, steps: i32) -> Result<()> {
        let value = self.lesson.range().step_by(self.parameter, steps);
        self.set_parameter(value)
    }

    pub fn sweep(&self) -> Option<Sweep> {
        self.lesson.sweep(self.parameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DiracConfig, SeriesConfig};
    use crate::error::SignalError;

    #[test]
    fn starts_at_initial_parameter() {
        let scene = Scene::new(DiracLesson::new(DiracConfig::default()).unwrap()).unwrap();
        assert_eq!(scene.parameter(), 0.5);
    }

    #[test]
    fn rejected_parameter_keeps_last_plot() {
        let mut scene = Scene::new(SeriesLesson::new(SeriesConfig::default()).unwrap()).unwrap();
        scene.set_parameter(6.0).unwrap();
        let before = scene.plot().clone();

        // pulse width is 1.0, so a period of 0.5 is invalid
        assert_eq!(
            scene.set_parameter(0.5),
            Err(SignalError::WidthExceedsPeriod {
                width: 1.0,
                period: 0.5
            })
        );
        assert_eq!(scene.parameter(), 6.0);
        assert_eq!(scene.plot(), &before);

        assert!(scene.set_parameter(-1.0).is_err());
        assert_eq!(scene.plot(), &before);
    }

    #[test]
    fn step_moves_along_range() {
        let mut scene = Scene::new(SeriesLesson::new(SeriesConfig::default()).unwrap()).unwrap();
        scene.step(3).unwrap();
        assert_eq!(scene.parameter(), 7.0);
        scene.step(-100).unwrap();
        assert_eq!(scene.parameter(), 2.0);
    }

    #[test]
    fn only_dirac_lesson_sweeps() {
        let dirac = Scene::new(DiracLesson::new(DiracConfig::default()).unwrap()).unwrap();
        let series = Scene::new(SeriesLesson::new(SeriesConfig::default()).unwrap()).unwrap();
        assert!(dirac.sweep().is_some());
        assert!(series.sweep().is_none());
    }
}
