//! Graph configuration.

use betty_core::dc_blocker::{MAX_POLE, MIN_POLE};

use crate::BettyError;

/// Lowest sample rate the graph accepts.
pub const MIN_SAMPLE_RATE: f32 = 1000.0;
/// Highest sample rate the graph accepts. The delay line holds one second.
pub const MAX_SAMPLE_RATE: f32 = 768_000.0;

/// Timing and filter settings for an [`EffectGraph`](crate::EffectGraph).
///
/// Defaults reproduce the tuning the effect shipped with. A time of zero
/// disables the corresponding smoother.
///
/// # Example
///
/// ```rust
/// use betty_app::BettyConfig;
///
/// let config = BettyConfig {
///     sample_rate: 44100.0,
///     ..BettyConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BettyConfig {
    /// Audio sample rate in Hz.
    pub sample_rate: f32,
    /// Time constant of the parameter vector smoother.
    pub param_smoothing_ms: f32,
    /// Time constant of the bias smoother.
    pub bias_smoothing_ms: f32,
    /// Time constant of the mode switch input smoother.
    pub switch_smoothing_ms: f32,
    /// Time a new mode must persist before it is committed.
    pub switch_hysteresis_ms: f32,
    /// Pole of the DC blocker after the pitch shifters.
    pub dc_blocker_coeff: f32,
}

impl Default for BettyConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48000.0,
            param_smoothing_ms: 150.0,
            bias_smoothing_ms: 150.0,
            switch_smoothing_ms: 400.0,
            switch_hysteresis_ms: 150.0,
            dc_blocker_coeff: 0.995,
        }
    }
}

impl BettyConfig {
    /// Default configuration at the given sample rate.
    pub fn with_sample_rate(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            ..Self::default()
        }
    }

    /// Check every field, returning the first problem found.
    pub fn validate(&self) -> Result<(), BettyError> {
        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&self.sample_rate) {
            return Err(BettyError::InvalidSampleRate(self.sample_rate));
        }

        for (name, value) in [
            ("param_smoothing_ms", self.param_smoothing_ms),
            ("bias_smoothing_ms", self.bias_smoothing_ms),
            ("switch_smoothing_ms", self.switch_smoothing_ms),
            ("switch_hysteresis_ms", self.switch_hysteresis_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(BettyError::InvalidTime { name, value });
            }
        }

        if !(MIN_POLE..=MAX_POLE).contains(&self.dc_blocker_coeff) {
            return Err(BettyError::InvalidCoefficient(self.dc_blocker_coeff));
        }

        Ok(())
    }
}
