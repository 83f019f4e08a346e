use super::{Lesson, Plot, SpectrumPlot, Sweep};
use crate::config::{DiracConfig, ParameterRange};
use crate::error::Result;
use crate::grid::SampleGrid;
use crate::signal::{PulseParameters, PulseSignalGenerator};
use crate::spectral::SpectralAnalyzer;

/// `δ(t) = lim_{ε→0} (1/ε)·Π(t/ε)` and `F{δ} = lim sinc(fε) = 1`.
///
/// The parameter is the pulse width ε. The pulse height is `1/ε`, so the
/// transform is `sinc(f·ε)` with a DC value of exactly 1 at every width.
pub struct DiracLesson {
    config: DiracConfig,
    time_grid: SampleGrid,
    freq_grid: SampleGrid,
}

impl DiracLesson {
    pub fn new(config: DiracConfig) -> Result<Self> {
        Ok(Self {
            time_grid: config.time_axis.grid()?,
            freq_grid: config.freq_axis.grid()?,
            config,
        })
    }

    /// Crossfade weight of the flat limit line: 0 above the threshold,
    /// rising linearly to 1 as ε → 0.
    pub fn limit_weight(&self, epsilon: f64) -> f64 {
        let below = self.config.limit_blend_below;
        if epsilon < below {
            (1.0 - epsilon / below).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl Lesson for DiracLesson {
    fn title(&self) -> &str {
        "Dirac delta"
    }

    fn parameter_label(&self) -> &str {
        "ε"
    }

    fn range(&self) -> ParameterRange {
        self.config.width
    }

    fn format_parameter(&self, epsilon: f64) -> String {
        format!("ε = {epsilon:.4e}")
    }

    fn compute(&self, epsilon: f64) -> Result<Plot> {
        let params = PulseParameters::unit_area(epsilon)?;
        let time = PulseSignalGenerator::new(params).generate(&self.time_grid)?;
        let transform = SpectralAnalyzer::new(params)
            .continuous_transform(&self.freq_grid)?
            .real();

        Ok(Plot {
            time,
            spectrum: SpectrumPlot::Continuous {
                transform,
                limit_weight: self.limit_weight(epsilon),
            },
        })
    }

    fn sweep(&self, current: f64) -> Option<Sweep> {
        Sweep::toward_min(current, &self.config.width, self.config.sweep.frames)
    }
}
