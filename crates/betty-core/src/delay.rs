//! Ring-buffer delay line.
//!
//! One buffer type covers both delay uses in betty. The effect graph taps it
//! at a whole number of samples through [`TapDelay`], and the pitch shifter
//! sweeps fractional read heads across it with [`DelayLine::read`].
//!
//! Storage is sized once in [`DelayLine::new`]. Nothing here allocates after
//! that.

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use crate::TapDelay;

/// Fixed-length ring buffer with integer taps and linear fractional reads.
///
/// # Example
///
/// ```rust
/// use betty_core::DelayLine;
///
/// let mut line = DelayLine::new(8);
/// line.write(1.0);
/// line.write(0.0);
/// assert_eq!(line.read(1.0), 1.0);
/// assert_eq!(line.read(0.5), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct DelayLine {
    samples: Vec<f32>,
    /// Slot the next write lands in
    head: usize,
}

impl DelayLine {
    /// Allocate a line holding `len` samples.
    ///
    /// # Panics
    ///
    /// Panics if `len` is 0.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "delay line needs at least one sample");
        Self {
            samples: vec![0.0; len],
            head: 0,
        }
    }

    /// Slot holding the sample written `age` writes before the newest one.
    #[inline]
    fn slot(&self, age: usize) -> usize {
        let len = self.samples.len();
        (self.head + len - 1 - age) % len
    }

    /// Read `age` samples into the past, interpolating between neighbours.
    ///
    /// Age 0 is the newest sample. Ages outside `[0, len - 1]` are clamped.
    #[inline]
    pub fn read(&self, age: f32) -> f32 {
        let oldest = (self.samples.len() - 1) as f32;
        let age = age.max(0.0).min(oldest);
        let whole = age as usize;
        let frac = age - whole as f32;

        let newer = self.samples[self.slot(whole)];
        if frac == 0.0 {
            return newer;
        }
        let older = self.samples[self.slot(whole + 1)];
        newer + (older - newer) * frac
    }

    /// Push one sample, overwriting the oldest.
    #[inline]
    pub fn write(&mut self, sample: f32) {
        self.samples[self.head] = sample;
        self.head = (self.head + 1) % self.samples.len();
    }

    /// Zero every sample.
    pub fn clear(&mut self) {
        self.samples.fill(0.0);
        self.head = 0;
    }
}

impl TapDelay for DelayLine {
    #[inline]
    fn play(&mut self, input: f32, delay_samples: usize) -> f32 {
        self.write(input);
        self.samples[self.slot(delay_samples.min(self.max_delay()))]
    }

    fn max_delay(&self) -> usize {
        self.samples.len() - 1
    }

    fn clear(&mut self) {
        DelayLine::clear(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(len: usize, writes: usize) -> DelayLine {
        let mut line = DelayLine::new(len);
        for i in 1..=writes {
            line.write(i as f32);
        }
        line
    }

    #[test]
    fn whole_sample_read() {
        // Newest is 6, three writes back is 3
        assert_eq!(ramp(10, 6).read(3.0), 3.0);
    }

    #[test]
    fn fractional_read_interpolates() {
        let line = ramp(10, 4);
        assert!((line.read(1.5) - 2.5).abs() < 1e-6);
        assert!((line.read(0.25) - 3.75).abs() < 1e-6);
    }

    #[test]
    fn reads_across_the_wrap() {
        // Five writes into four slots: 2, 3, 4, 5 remain
        let line = ramp(4, 5);
        assert_eq!(line.read(0.0), 5.0);
        assert_eq!(line.read(3.0), 2.0);
    }

    #[test]
    fn read_age_is_clamped() {
        let line = ramp(4, 4);
        assert_eq!(line.read(-2.0), 4.0);
        assert_eq!(line.read(50.0), 1.0);
    }

    #[test]
    #[should_panic]
    fn zero_length_panics() {
        let _ = DelayLine::new(0);
    }

    #[test]
    fn tap_latency_is_exact() {
        let mut line = DelayLine::new(8);
        let mut out = Vec::new();
        out.push(line.play(1.0, 6));
        for _ in 0..7 {
            out.push(line.play(0.0, 6));
        }
        assert_eq!(out, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn zero_tap_is_passthrough() {
        let mut line = DelayLine::new(4);
        assert_eq!(line.play(0.75, 0), 0.75);
    }

    #[test]
    fn long_taps_clamp_to_oldest() {
        let mut line = DelayLine::new(4);
        assert_eq!(line.max_delay(), 3);
        line.play(1.0, 100);
        line.play(0.0, 100);
        line.play(0.0, 100);
        assert_eq!(line.play(0.0, 100), 1.0);
    }

    #[test]
    fn tap_clear_silences() {
        let mut line = DelayLine::new(4);
        line.play(1.0, 1);
        TapDelay::clear(&mut line);
        assert_eq!(line.play(0.0, 1), 0.0);
    }
}
