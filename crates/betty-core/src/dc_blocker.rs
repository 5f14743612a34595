//! One-pole, one-zero DC trap.
//!
//! ```text
//! y[n] = x[n] - x[n-1] + R * y[n-1]        H(z) = (1 - z^-1) / (1 - R z^-1)
//! ```
//!
//! The zero sits on DC and the pole at `R` just inside the unit circle, so
//! the corner lands near `(1 - R) * fs / 2pi`. Betty runs it at `R = 0.995`
//! on the shifted tail, about 38 Hz at 48 kHz.

use crate::{Effect, flush_denormal};

/// Lowest accepted pole radius.
pub const MIN_POLE: f32 = 0.9;
/// Highest accepted pole radius.
pub const MAX_POLE: f32 = 0.9999;

/// First-order highpass that strips DC offset.
///
/// ```rust
/// use betty_core::{DcBlocker, Effect};
///
/// let mut trap = DcBlocker::with_coeff(0.995);
/// assert_eq!(trap.process(0.6), 0.6);
/// assert!(trap.process(0.6) < 0.6);
/// ```
#[derive(Debug, Clone)]
pub struct DcBlocker {
    pole: f32,
    last_in: f32,
    last_out: f32,
}

impl DcBlocker {
    /// Build with pole radius `coeff`, clamped to `[MIN_POLE, MAX_POLE]`.
    pub fn with_coeff(coeff: f32) -> Self {
        Self {
            pole: coeff.clamp(MIN_POLE, MAX_POLE),
            last_in: 0.0,
            last_out: 0.0,
        }
    }

    /// Pole radius in use.
    pub fn coeff(&self) -> f32 {
        self.pole
    }
}

impl Effect for DcBlocker {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let out = flush_denormal(input - self.last_in + self.pole * self.last_out);
        self.last_in = input;
        self.last_out = out;
        out
    }

    /// `R` is a pole radius, not a frequency, so it is left as is.
    fn set_sample_rate(&mut self, _sample_rate: f32) {}

    fn reset(&mut self) {
        self.last_in = 0.0;
        self.last_out = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::PI;

    const SR: f32 = 48000.0;

    #[test]
    fn constant_input_settles_to_zero() {
        let mut trap = DcBlocker::with_coeff(0.995);
        let mut out = 1.0;
        for _ in 0..48000 {
            out = trap.process(1.0);
        }
        assert!(out.abs() < 0.01, "offset left: {out}");
    }

    #[test]
    fn audio_band_passes() {
        let mut trap = DcBlocker::with_coeff(0.995);
        let tone = |n: usize| libm::sinf(2.0 * PI * 1000.0 * n as f32 / SR);
        for n in 0..48000 {
            trap.process(tone(n));
        }
        let peak = (48000..48048)
            .map(|n| trap.process(tone(n)).abs())
            .fold(0.0f32, f32::max);
        assert!(peak > 0.95, "1 kHz peak only {peak}");
    }

    #[test]
    fn reset_clears_history() {
        let mut trap = DcBlocker::with_coeff(0.995);
        for _ in 0..1000 {
            trap.process(1.0);
        }
        trap.reset();
        assert_eq!(trap.process(0.0), 0.0);
    }

    #[test]
    fn pole_is_clamped() {
        assert_eq!(DcBlocker::with_coeff(0.5).coeff(), MIN_POLE);
        assert_eq!(DcBlocker::with_coeff(1.0).coeff(), MAX_POLE);
        assert_eq!(DcBlocker::with_coeff(0.995).coeff(), 0.995);
    }

    #[test]
    fn impulse_tail_flushes_to_exact_zero() {
        let mut trap = DcBlocker::with_coeff(0.995);
        trap.process(1.0);
        let mut out = 1.0;
        for _ in 0..48000 {
            out = trap.process(0.0);
        }
        assert_eq!(out, 0.0);
    }
}
