//! Error types for signal construction and spectral analysis

use thiserror::Error;

/// Result type for every fallible operation in the crate
pub type Result<T> = std::result::Result<T, SignalError>;

/// Rejected inputs.
///
/// Every variant is an input-validation failure: the numeric core has no
/// runtime failure modes once its parameters are accepted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    /// Pulse width is zero, negative or not finite
    #[error("pulse width must be positive and finite, got {0}")]
    InvalidWidth(f64),

    /// Period is zero, negative or not finite
    #[error("period must be positive and finite, got {0}")]
    InvalidPeriod(f64),

    /// Amplitude is NaN or infinite
    #[error("amplitude must be finite, got {0}")]
    InvalidAmplitude(f64),

    /// A periodic pulse must be strictly narrower than its period
    #[error("pulse width {width} must be smaller than period {period}")]
    WidthExceedsPeriod { width: f64, period: f64 },

    /// Grid bounds or point count do not describe an increasing axis
    #[error("invalid grid [{start}, {stop}] with {count} points")]
    InvalidGrid { start: f64, stop: f64, count: usize },

    /// Width times a grid frequency is too large to evaluate
    #[error("width {width} times frequency {frequency} overflows")]
    FrequencyOverflow { width: f64, frequency: f64 },

    /// Grid does not contain the whole pulse
    #[error("grid [{start}, {stop}] does not cover pulse of width {width}")]
    GridTooNarrow { start: f64, stop: f64, width: f64 },

    /// Values and grid have different lengths
    #[error("sample length mismatch: grid has {expected} points, got {actual} values")]
    LengthMismatch { expected: usize, actual: usize },

    /// Series operations need a periodic signal
    #[error("operation requires a periodic signal")]
    AperiodicSignal,

    /// Sampling too coarse to resolve the requested harmonics
    #[error("{samples} samples cannot resolve harmonics up to {max_harmonic}")]
    TooFewSamples { samples: usize, max_harmonic: u32 },
}
