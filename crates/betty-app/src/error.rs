//! Setup-time errors.

use thiserror::Error;

/// Configuration rejected by [`BettyConfig::validate`](crate::BettyConfig::validate).
///
/// Nothing on the audio path returns an error; these only surface from
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BettyError {
    /// Sample rate is not finite or lies outside the supported range.
    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(f32),

    /// A time constant is negative or not finite.
    #[error("invalid {name}: {value} ms")]
    InvalidTime {
        /// Config field name.
        name: &'static str,
        /// Offending value in milliseconds.
        value: f32,
    },

    /// DC blocker pole outside its stable, audible range.
    #[error("DC blocker coefficient {0} outside [0.9, 0.9999]")]
    InvalidCoefficient(f32),
}
