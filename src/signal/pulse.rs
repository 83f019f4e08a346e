/*
Rectangular Pulse Generation
============================

  amplitude ┐     ┌─────┐
            │     │     │
          0 └─────┘     └─────→ t
               -w/2  0  w/2

A single pulse is `amplitude` where |t| <= w/2 and zero elsewhere. Both
edges are included, so the sampled pulse is even on any grid that is
mirror-symmetric about zero.

A pulse train repeats the same box every T seconds. Sampling folds each
coordinate into one period with `rem_euclid` first:

  Centered   high when  tm <= w/2  or  tm >= T - w/2
  Leading    high when  tm < w

The Dirac approximation is the single centred pulse with height 1/ε, which
keeps the area at 1 as ε shrinks. Nothing here divides by the width except
that height, and the height is validated to stay finite.
*/

use log::debug;

use super::{Period, PulseAlignment, PulseParameters, SignalSample};
use crate::error::{Result, SignalError};
use crate::grid::SampleGrid;

/// Samples a rectangular pulse (or pulse train) onto a time grid.
#[derive(Debug, Clone, Copy)]
pub struct PulseSignalGenerator {
    params: PulseParameters,
    alignment: PulseAlignment,
}

impl PulseSignalGenerator {
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

    /// Pulse value at time `t`.
    pub fn value_at(&self, t: f64) -> f64 {
        let width = self.params.width();
        let high = match self.params.period() {
            Period::Aperiodic => match self.alignment {
                PulseAlignment::Centered => t.abs() <= width / 2.0,
                PulseAlignment::Leading => (0.0..width).contains(&t),
            },
            Period::Finite(period) => {
                let tm = t.rem_euclid(period);
                match self.alignment {
                    PulseAlignment::Centered => tm <= width / 2.0 || tm >= period - width / 2.0,
                    PulseAlignment::Leading => tm < width,
                }
            }
        };

        if high {
            self.params.amplitude()
        } else {
            0.0
        }
    }

    /// Sample the pulse on `grid`.
    ///
    /// A single pulse must lie entirely inside the grid; a periodic train
    /// accepts any grid.
    pub fn generate(&self, grid: &SampleGrid) -> Result<SignalSample> {
        if let Period::Aperiodic = self.params.period() {
            let (lo, hi) = self.support();
            if !grid.covers(lo, hi) {
                return Err(SignalError::GridTooNarrow {
                    start: grid.start(),
                    stop: grid.stop(),
                    width: self.params.width(),
                });
            }
        }

        debug!(
            "sampling pulse width={} amplitude={} period={:?} on {} points",
            self.params.width(),
            self.params.amplitude(),
            self.params.period(),
            grid.len()
        );

        Ok(SignalSample::from_fn(*grid, |t| self.value_at(t)))
    }

    // Interval occupied by a single pulse
    fn support(&self) -> (f64, f64) {
        let width = self.params.width();
        match self.alignment {
            PulseAlignment::Centered => (-width / 2.0, width / 2.0),
            PulseAlignment::Leading => (0.0, width),
        }
    }
}

/// Centred pulse of height `amplitude` and width `width`, sampled on `grid`.
pub fn generate(width: f64, amplitude: f64, grid: &SampleGrid) -> Result<SignalSample> {
    let params = PulseParameters::single(width, amplitude)?;
    PulseSignalGenerator::new(params).generate(grid)
}

/// Unit-area pulse `(1/ε)·Π(t/ε)`, the finite stand-in for δ(t).
pub fn dirac_approximation(epsilon: f64, grid: &SampleGrid) -> Result<SignalSample> {
    let params = PulseParameters::unit_area(epsilon)?;
    PulseSignalGenerator::new(params).generate(grid)
}
