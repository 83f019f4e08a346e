use log::debug;

use super::SpectralAnalyzer;
use crate::error::Result;
use crate::grid::SampleGrid;
use crate::signal::{PulseParameters, SignalSample};

/// `X(f) = A·w·sinc(w·f)` of the centred pulse, over `freq_grid`.
///
/// The value at `f = 0` is exactly `A·w`.
pub fn continuous_transform(
    width: f64,
    amplitude: f64,
    freq_grid: &SampleGrid,
) -> Result<SignalSample> {
    let params = PulseParameters::single(width, amplitude)?;
    debug!("continuous transform width={width} on {} points", freq_grid.len());
    Ok(SpectralAnalyzer::new(params)
        .continuous_transform(freq_grid)?
        .real())
}

/// Continuous transform scaled by `1/period`, overlaid on the line spectrum.
pub fn envelope(
    width: f64,
    amplitude: f64,
    period: f64,
    freq_grid: &SampleGrid,
) -> Result<SignalSample> {
    let params = PulseParameters::periodic(width, amplitude, period)?;
    Ok(SpectralAnalyzer::new(params).envelope(freq_grid)?.real())
}
