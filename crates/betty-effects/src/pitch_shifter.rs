//! Delay-line pitch shifter.
//!
//! Two read heads sweep through a short delay line at a rate set by the
//! transposition ratio. Each head is faded in and out with a `sin²` window and
//! the heads sit half a window apart, so their gains always sum to one and the
//! jump at each head's wrap point lands where its gain is zero.

use core::f32::consts::PI;

use betty_core::{DelayLine, Effect, PitchShift, semitones_to_ratio};
use libm::{ceilf, floorf, sinf};

/// Length of the read window in milliseconds.
const WINDOW_MS: f32 = 50.0;
/// Transposition limit in semitones (either direction).
const MAX_SEMITONES: f32 = 24.0;

/// Two-head granular pitch shifter.
///
/// Latency at zero transposition is half a window (25 ms).
///
/// # Example
///
/// ```rust
/// use betty_core::{Effect, PitchShift};
/// use betty_effects::PitchShifter;
///
/// let mut shifter = PitchShifter::new(48000.0);
/// shifter.set_transposition(7.0);
/// assert_eq!(shifter.transposition(), 7.0);
///
/// let output = shifter.process(0.25);
/// assert!(output.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct PitchShifter {
    delay: DelayLine,
    /// Window length in samples
    window: f32,
    /// Position of the first head within the window, in [0, 1)
    phase: f32,
    /// Per-sample phase increment, `(1 - ratio) / window`
    phase_inc: f32,
    semitones: f32,
}

impl Default for PitchShifter {
    fn default() -> Self {
        Self::new(48000.0)
    }
}

impl PitchShifter {
    /// Create a pitch shifter with no transposition.
    pub fn new(sample_rate: f32) -> Self {
        let window = WINDOW_MS * 0.001 * sample_rate;
        let delay = DelayLine::new(ceilf(window) as usize + 2);

        Self {
            delay,
            window,
            phase: 0.0,
            phase_inc: 0.0,
            semitones: 0.0,
        }
    }

    /// Window length in samples.
    pub fn window_samples(&self) -> f32 {
        self.window
    }

    fn update_increment(&mut self) {
        self.phase_inc = (1.0 - semitones_to_ratio(self.semitones)) / self.window;
    }
}

#[inline]
fn head_gain(phase: f32) -> f32 {
    let s = sinf(PI * phase);
    s * s
}

impl PitchShift for PitchShifter {
    fn set_transposition(&mut self, semitones: f32) {
        self.semitones = semitones.clamp(-MAX_SEMITONES, MAX_SEMITONES);
        self.update_increment();
    }

    fn transposition(&self) -> f32 {
        self.semitones
    }
}

impl Effect for PitchShifter {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        self.delay.write(input);

        let phase_a = self.phase;
        let mut phase_b = phase_a + 0.5;
        if phase_b >= 1.0 {
            phase_b -= 1.0;
        }

        let a = self.delay.read(phase_a * self.window);
        let b = self.delay.read(phase_b * self.window);
        let out = a * head_gain(phase_a) + b * head_gain(phase_b);

        let next = self.phase + self.phase_inc;
        self.phase = next - floorf(next);

        out
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        let semitones = self.semitones;
        *self = Self::new(sample_rate);
        self.set_transposition(semitones);
    }

    fn reset(&mut self) {
        self.delay.clear();
        self.phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: f32 = 48000.0;

    fn zero_crossings(signal: &[f32]) -> usize {
        signal
            .windows(2)
            .filter(|w| (w[0] < 0.0) != (w[1] < 0.0))
            .count()
    }

    #[test]
    fn unison_is_delayed_copy() {
        let mut shifter = PitchShifter::new(SR);
        let latency = (shifter.window_samples() * 0.5) as usize;

        let input: Vec<f32> = (0..4800).map(|i| libm::sinf(i as f32 * 0.01)).collect();
        let output: Vec<f32> = input.iter().map(|&x| shifter.process(x)).collect();

        for n in latency + 1..input.len() {
            assert!(
                (output[n] - input[n - latency]).abs() < 1e-4,
                "sample {n}: {} vs {}",
                output[n],
                input[n - latency]
            );
        }
    }

    #[test]
    fn octave_up_doubles_frequency() {
        let mut shifter = PitchShifter::new(SR);
        shifter.set_transposition(12.0);

        // 200 Hz puts the two heads a whole number of cycles apart
        let freq = 200.0;
        let output: Vec<f32> = (0..SR as usize)
            .map(|i| shifter.process(libm::sinf(2.0 * PI * freq * i as f32 / SR)))
            .collect();

        let tail = &output[SR as usize / 2..];
        let crossings = zero_crossings(tail);
        // 400 Hz over half a second
        assert!(
            (340..=460).contains(&crossings),
            "expected ~400 crossings, got {crossings}"
        );
    }

    #[test]
    fn fifth_down_lowers_frequency() {
        let mut shifter = PitchShifter::new(SR);
        shifter.set_transposition(-7.0);

        let freq = 400.0;
        let output: Vec<f32> = (0..SR as usize)
            .map(|i| shifter.process(libm::sinf(2.0 * PI * freq * i as f32 / SR)))
            .collect();
        // 400 Hz over half a second
        let input_crossings = 400;
        let crossings = zero_crossings(&output[SR as usize / 2..]);
        assert!(
            crossings < input_crossings,
            "shifted down should cross less than {input_crossings}, got {crossings}"
        );
    }

    #[test]
    fn head_gains_sum_to_one() {
        for i in 0..100 {
            let p = i as f32 / 100.0;
            let q = (p + 0.5) % 1.0;
            assert!((head_gain(p) + head_gain(q) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn transposition_clamped() {
        let mut shifter = PitchShifter::new(SR);
        shifter.set_transposition(48.0);
        assert_eq!(shifter.transposition(), MAX_SEMITONES);
        shifter.set_transposition(-48.0);
        assert_eq!(shifter.transposition(), -MAX_SEMITONES);
    }

    #[test]
    fn reset_silences() {
        let mut shifter = PitchShifter::new(SR);
        shifter.set_transposition(5.0);
        for _ in 0..2000 {
            shifter.process(1.0);
        }
        shifter.reset();
        assert_eq!(shifter.process(0.0), 0.0);
    }

    #[test]
    fn sample_rate_change_keeps_transposition() {
        let mut shifter = PitchShifter::new(SR);
        shifter.set_transposition(-9.0);
        shifter.set_sample_rate(96000.0);
        assert_eq!(shifter.transposition(), -9.0);
        assert!((shifter.window_samples() - 4800.0).abs() < 1e-3);
    }
}
