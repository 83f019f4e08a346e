//! Evenly spaced sample axes.

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{Result, SignalError};

/// An increasing, evenly spaced axis of `count` points from `start` to `stop`
/// inclusive. Used for both time and frequency coordinates.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    start: f64,
    stop: f64,
    count: usize,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct GridBounds {
    start: f64,
    stop: f64,
    count: usize,
}

// Deserialized grids go through `linspace` like every other grid
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for SampleGrid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let GridBounds { start, stop, count } = GridBounds::deserialize(deserializer)?;
        Self::linspace(start, stop, count).map_err(de::Error::custom)
    }
}

impl SampleGrid {
    /// Same layout as numpy's `linspace(start, stop, count)`.
    ///
    /// The span `stop - start` must itself be finite, otherwise the spacing
    /// overflows and the coordinates turn into NaN.
    pub fn linspace(start: f64, stop: f64, count: usize) -> Result<Self> {
        let valid = start.is_finite()
            && stop.is_finite()
            && (stop - start).is_finite()
            && count >= 2
            && stop > start;
        if !valid {
            return Err(SignalError::InvalidGrid { start, stop, count });
        }
        Ok(Self { start, stop, count })
    }

    /// Grid centred on zero: `[-half_span, half_span]`.
    pub fn symmetric(half_span: f64, count: usize) -> Result<Self> {
        Self::linspace(-half_span, half_span, count)
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }

    pub fn len(&self) -> usize {
        self.count
    }

    /// Always false: `linspace` (and deserialization, which goes through it)
    /// only builds grids of at least two points.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn spacing(&self) -> f64 {
        (self.stop - self.start) / (self.count - 1) as f64
    }

    /// Coordinate of point `index`.
    ///
    /// The upper half is measured back from `stop`, so both end points are
    /// exact and a grid centred on zero is exactly mirror-symmetric.
    pub fn at(&self, index: usize) -> f64 {
        let index = index.min(self.count - 1);
        if index < self.count / 2 {
            self.start + index as f64 * self.spacing()
        } else {
            self.stop - (self.count - 1 - index) as f64 * self.spacing()
        }
    }

    /// True when `[lo, hi]` lies inside the grid bounds.
    pub fn covers(&self, lo: f64, hi: f64) -> bool {
        self.start <= lo && self.stop >= hi
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.count).map(move |i| self.at(i))
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }
}
