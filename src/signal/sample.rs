#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{Result, SignalError};
use crate::grid::SampleGrid;
use crate::spectral::phase_of;
use crate::Complex64;

/// Values sampled on a grid, one value per grid point.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SignalSample<T = f64> {
    grid: SampleGrid,
    values: Vec<T>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct SampleFields<T> {
    grid: SampleGrid,
    values: Vec<T>,
}

#[cfg(feature = "serde")]
impl<'de, T: Deserialize<'de>> Deserialize<'de> for SignalSample<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let SampleFields { grid, values } = SampleFields::deserialize(deserializer)?;
        Self::new(grid, values).map_err(de::Error::custom)
    }
}

impl<T> SignalSample<T> {
    pub fn new(grid: SampleGrid, values: Vec<T>) -> Result<Self> {
        if values.len() != grid.len() {
            return Err(SignalError::LengthMismatch {
                expected: grid.len(),
                actual: values.len(),
            });
        }
        Ok(Self { grid, values })
    }

    /// Evaluate `f` at every grid coordinate.
    pub fn from_fn(grid: SampleGrid, f: impl FnMut(f64) -> T) -> Self {
        let values = grid.iter().map(f).collect();
        Self { grid, values }
    }

    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(coordinate, value)` pairs in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &T)> + '_ {
        self.grid.iter().zip(self.values.iter())
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> SignalSample<U> {
        SignalSample {
            grid: self.grid,
            values: self.values.iter().map(f).collect(),
        }
    }
}

impl SignalSample<f64> {
    /// Chart-ready `(x, y)` points.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.iter().map(|(x, &y)| (x, y)).collect()
    }

    pub fn scaled(&self, factor: f64) -> Self {
        self.map(|v| v * factor)
    }

    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn min_value(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

impl SignalSample<Complex64> {
    pub fn magnitude(&self) -> SignalSample<f64> {
        self.map(|c| c.norm())
    }

    /// Phase in radians; zero wherever the magnitude is zero.
    pub fn phase(&self) -> SignalSample<f64> {
        self.map(|&c| phase_of(c))
    }

    pub fn real(&self) -> SignalSample<f64> {
        self.map(|c| c.re)
    }

    pub fn scaled(&self, factor: f64) -> Self {
        self.map(|&c| c * factor)
    }
}
