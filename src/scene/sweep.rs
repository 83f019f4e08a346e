use log::trace;

use crate::config::ParameterRange;

/// Log-spaced run of parameter values, one per animation frame.
///
/// Geometric spacing keeps the visible change per frame roughly constant
/// while ε spans three decades.
#[derive(Debug, Clone)]
pub struct Sweep {
    frames: Vec<f64>,
    next: usize,
}

impl Sweep {
    /// `frames` values from `from` to `to`, both included, geometrically
    /// spaced. `None` unless both ends are positive and finite.
    pub fn logspace(from: f64, to: f64, frames: usize) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(from) || !valid(to) || frames == 0 {
            return None;
        }

        let frames = match frames {
            1 => vec![to],
            n => {
                let (lo, hi) = (from.log10(), to.log10());
                let step = (hi - lo) / (n - 1) as f64;
                let mut values: Vec<f64> = (0..n)
                    .map(|i| 10f64.powf(lo + i as f64 * step))
                    .collect();
                values[0] = from;
                values[n - 1] = to;
                values
            }
        };

        Some(Self { frames, next: 0 })
    }

    /// Sweep from `current` down to the range minimum. Starting at (or
    /// below) the minimum restarts from the maximum instead.
    pub fn toward_min(current: f64, range: &ParameterRange, frames: usize) -> Option<Self> {
        let from = if current <= range.min { range.max } else { current };
        Self::logspace(from, range.min, frames)
    }

    pub fn frames(&self) -> &[f64] {
        &self.frames
    }

    pub fn remaining(&self) -> usize {
        self.frames.len() - self.next
    }

    pub fn is_finished(&self) -> bool {
        self.remaining() == 0
    }
}

impl Iterator for Sweep {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let value = *self.frames.get(self.next)?;
        self.next += 1;
        trace!("sweep frame {}/{}: {value}", self.next, self.frames.len());
        Some(value)
    }
}
