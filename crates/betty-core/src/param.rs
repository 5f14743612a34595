//! Single-channel one-pole control smoother.
//!
//! Knob and sensor readings land as steps. Feeding a step straight into a
//! gain or a filter cutoff clicks, so each reading is chased by a one-pole
//! lowpass instead and the audio path only ever sees the ramp.
//!
//! ```rust
//! use betty_core::SmoothedParam;
//!
//! let mut level = SmoothedParam::with_config(0.0, 48000.0, 10.0);
//! let first = level.process(1.0);
//! assert!(first > 0.0 && first < 0.01);
//!
//! // Five time constants later the ramp has all but arrived
//! for _ in 0..2400 {
//!     level.process(1.0);
//! }
//! assert!(level.get() > 0.99);
//! ```

use libm::expf;

/// Per-sample coefficient of a one-pole smoother.
///
/// For a time constant `tau = smoothing_time_ms / 1000`, the recurrence
/// `y += c * (x - y)` covers 63.2% of a step after `tau` seconds when
///
///   `c = 1 - exp(-1 / (tau * sample_rate))`
///
/// A non-positive time or sample rate yields 1.0, i.e. no smoothing.
#[inline]
pub fn smoothing_coeff(smoothing_time_ms: f32, sample_rate: f32) -> f32 {
    if smoothing_time_ms <= 0.0 || sample_rate <= 0.0 {
        return 1.0;
    }
    let samples_per_tau = smoothing_time_ms * 0.001 * sample_rate;
    1.0 - expf(-1.0 / samples_per_tau)
}

/// One control value chasing its most recent reading.
///
/// With `c` in `(0, 1]` every step moves toward the reading without passing
/// it. At `c == 1` the value is the reading, bit for bit.
#[derive(Debug, Clone)]
pub struct SmoothedParam {
    value: f32,
    coeff: f32,
    sample_rate: f32,
    smoothing_time_ms: f32,
}

impl SmoothedParam {
    /// Start at `initial`, smoothing with the given time constant.
    pub fn with_config(initial: f32, sample_rate: f32, smoothing_time_ms: f32) -> Self {
        Self {
            value: initial,
            coeff: smoothing_coeff(smoothing_time_ms, sample_rate),
            sample_rate,
            smoothing_time_ms,
        }
    }

    /// Jump straight to `value`.
    #[inline]
    pub fn set_immediate(&mut self, value: f32) {
        self.value = value;
    }

    /// Recompute the coefficient for a new sample rate.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.coeff = smoothing_coeff(self.smoothing_time_ms, sample_rate);
    }

    /// Move one sample toward `target` and return the new value.
    #[inline]
    pub fn process(&mut self, target: f32) -> f32 {
        if self.coeff >= 1.0 {
            self.value = target;
        } else {
            self.value += self.coeff * (target - self.value);
        }
        self.value
    }

    /// Value after the last [`process`](Self::process).
    #[inline]
    pub fn get(&self) -> f32 {
        self.value
    }
}
