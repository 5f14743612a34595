//! Rectify-and-smooth amplitude tracker behind the auto-wah sweep.

use crate::{flush_denormal, smoothing_coeff};

/// Peak follower: fast to rise, slower to fall.
///
/// ```rust
/// use betty_core::EnvelopeFollower;
///
/// let mut env = EnvelopeFollower::with_times(48000.0, 5.0, 50.0);
/// assert!(env.process(-0.5) > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct EnvelopeFollower {
    level: f32,
    attack_ms: f32,
    release_ms: f32,
    rise: f32,
    fall: f32,
}

impl EnvelopeFollower {
    /// Attack is floored at 0.1 ms and release at 1 ms.
    pub fn with_times(sample_rate: f32, attack_ms: f32, release_ms: f32) -> Self {
        let mut env = Self {
            level: 0.0,
            attack_ms: attack_ms.max(0.1),
            release_ms: release_ms.max(1.0),
            rise: 1.0,
            fall: 1.0,
        };
        env.set_sample_rate(sample_rate);
        env
    }

    /// Rescale both time constants to a new sample rate.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.rise = smoothing_coeff(self.attack_ms, sample_rate);
        self.fall = smoothing_coeff(self.release_ms, sample_rate);
    }

    /// Track `|input|` and return the updated level.
    #[inline]
    pub fn process(&mut self, input: f32) -> f32 {
        let rectified = input.abs();
        let c = if rectified > self.level {
            self.rise
        } else {
            self.fall
        };
        self.level = flush_denormal(self.level + c * (rectified - self.level));
        self.level
    }

    /// Level after the last sample.
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Drop back to silence.
    pub fn reset(&mut self) {
        self.level = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: f32 = 48000.0;

    #[test]
    fn rises_within_attack() {
        let mut env = EnvelopeFollower::with_times(SR, 1.0, 100.0);
        let mut level = 0.0;
        for _ in 0..500 {
            level = env.process(1.0);
        }
        assert!(level > 0.9, "level only reached {level}");
    }

    #[test]
    fn falls_over_release() {
        let mut env = EnvelopeFollower::with_times(SR, 1.0, 10.0);
        for _ in 0..500 {
            env.process(1.0);
        }
        let mut level = 1.0;
        for _ in 0..1000 {
            level = env.process(0.0);
        }
        // About two release time constants: e^-2 is 0.135
        assert!(level < 0.15, "level still {level}");
    }

    #[test]
    fn release_is_slower_than_attack() {
        let mut env = EnvelopeFollower::with_times(SR, 5.0, 50.0);
        let up = env.process(1.0);
        env.reset();
        env.process(1.0);
        for _ in 0..4800 {
            env.process(1.0);
        }
        let top = env.level();
        let down = top - env.process(0.0);
        assert!(up > down, "rise {up} should beat fall {down}");
    }

    #[test]
    fn sample_rate_change_keeps_times() {
        // 1 ms attack is 96 samples at 96 kHz
        let mut env = EnvelopeFollower::with_times(SR, 1.0, 100.0);
        env.set_sample_rate(96000.0);
        let mut level = 0.0;
        for _ in 0..96 {
            level = env.process(1.0);
        }
        assert!((level - 0.632).abs() < 0.01, "got {level}");
    }

    #[test]
    fn reset_silences() {
        let mut env = EnvelopeFollower::with_times(SR, 5.0, 50.0);
        for _ in 0..100 {
            env.process(1.0);
        }
        env.reset();
        assert_eq!(env.level(), 0.0);
    }
}
