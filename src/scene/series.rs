use super::{Lesson, Plot, SpectrumPlot};
use crate::config::{ParameterRange, SeriesConfig};
use crate::error::Result;
use crate::grid::SampleGrid;
use crate::signal::{PulseParameters, PulseSignalGenerator};
use crate::spectral::{harmonic_limit, SpectralAnalyzer};

/// Pulse train of fixed width with a variable period T.
///
/// As T grows the lines `c_n` crowd together under the envelope `X(f)/T`,
/// which is how the Fourier transform arises from the series.
pub struct SeriesLesson {
    config: SeriesConfig,
    time_grid: SampleGrid,
    freq_grid: SampleGrid,
}

impl SeriesLesson {
    pub fn new(config: SeriesConfig) -> Result<Self> {
        Ok(Self {
            time_grid: config.time_axis.grid()?,
            freq_grid: config.envelope_grid()?,
            config,
        })
    }
}

impl Lesson for SeriesLesson {
    fn title(&self) -> &str {
        "Fourier series"
    }

    fn parameter_label(&self) -> &str {
        "T"
    }

    fn range(&self) -> ParameterRange {
        self.config.period
    }

    fn compute(&self, period: f64) -> Result<Plot> {
        let config = &self.config;
        let params = PulseParameters::periodic(config.pulse_width, config.amplitude, period)?;

        let time = PulseSignalGenerator::new(params)
            .with_alignment(config.alignment)
            .generate(&self.time_grid)?;

        let analyzer = SpectralAnalyzer::new(params).with_alignment(config.alignment);
        let coefficients = analyzer.series_coefficients(harmonic_limit(period, config.f_max))?;
        let envelope = analyzer.envelope(&self.freq_grid)?;

        Ok(Plot {
            time,
            spectrum: SpectrumPlot::Lines {
                coefficients,
                envelope,
            },
        })
    }
}
