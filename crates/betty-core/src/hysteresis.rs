//! Hysteretic boolean gate for chatter-free mode switching.
//!
//! A continuous control is smoothed, thresholded at 0.5 and then debounced:
//! the output flips only after the thresholded value has disagreed with it
//! for a full dwell time. A control hovering around the threshold therefore
//! never makes the output chatter.
//!
//! # State machine
//!
//! Per sample, with `target = smoothed >= 0.5`:
//!
//! ```text
//! target == current            -> pending = current, counter = 0
//! target == pending            -> counter += 1, commit once counter >= dwell
//! otherwise (candidate moved)  -> pending = target, counter = 1
//! ```
//!
//! A commit sets `current = target` and clears the counter. Nothing in this
//! machine can fail; it only delays.

use crate::math::ms_to_samples;
use crate::param::SmoothedParam;

/// Decision threshold applied to the smoothed input.
pub const THRESHOLD: f32 = 0.5;

/// Smoothed, thresholded boolean with a minimum dwell time.
///
/// # Example
///
/// ```rust
/// use betty_core::HysteresisGate;
///
/// // No input smoothing, 1 ms dwell at 48 kHz = 48 samples
/// let mut gate = HysteresisGate::new(48000.0, 0.0, 1.0);
/// assert_eq!(gate.dwell_samples(), 48);
///
/// for _ in 0..47 {
///     assert!(!gate.process(1.0));
/// }
/// assert!(gate.process(1.0));
/// ```
#[derive(Debug, Clone)]
pub struct HysteresisGate {
    smoother: SmoothedParam,
    current: bool,
    pending: bool,
    counter: usize,
    dwell_samples: usize,
    dwell_ms: f32,
}

impl HysteresisGate {
    /// Create a gate.
    ///
    /// # Arguments
    /// * `sample_rate` - Sample rate in Hz
    /// * `smoothing_time_ms` - Time constant of the input smoother
    /// * `dwell_ms` - Time a new value must persist before it is committed
    pub fn new(sample_rate: f32, smoothing_time_ms: f32, dwell_ms: f32) -> Self {
        let dwell_samples = ms_to_samples(dwell_ms, sample_rate);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            smoothing_time_ms,
            dwell_ms,
            dwell_samples,
            "hysteresis gate configured"
        );

        Self {
            smoother: SmoothedParam::with_config(0.0, sample_rate, smoothing_time_ms),
            current: false,
            pending: false,
            counter: 0,
            dwell_samples,
            dwell_ms,
        }
    }

    /// Feed one raw sample and return the debounced state.
    #[inline]
    pub fn process(&mut self, input: f32) -> bool {
        let smoothed = self.smoother.process(input);
        self.step(smoothed >= THRESHOLD)
    }

    /// Advance the debounce machine with an already thresholded value.
    #[inline]
    fn step(&mut self, target: bool) -> bool {
        if target == self.current {
            // Stable: no drift accumulates
            self.pending = self.current;
            self.counter = 0;
        } else if target == self.pending {
            self.counter += 1;
            if self.counter >= self.dwell_samples {
                self.current = target;
                self.counter = 0;
            }
        } else {
            // Candidate changed before committing: restart the dwell
            self.pending = target;
            self.counter = 1;
        }
        self.current
    }

    /// The committed state.
    #[inline]
    pub fn state(&self) -> bool {
        self.current
    }

    /// The candidate state currently accumulating dwell time.
    #[inline]
    pub fn pending(&self) -> bool {
        self.pending
    }

    /// Samples the current candidate has persisted.
    #[inline]
    pub fn counter(&self) -> usize {
        self.counter
    }

    /// The smoothed input value from the last sample.
    #[inline]
    pub fn smoothed(&self) -> f32 {
        self.smoother.get()
    }

    /// Dwell time in samples.
    pub fn dwell_samples(&self) -> usize {
        self.dwell_samples
    }

    /// Dwell time in milliseconds.
    pub fn dwell_ms(&self) -> f32 {
        self.dwell_ms
    }

    /// Update the sample rate; recomputes the smoother and dwell length.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.smoother.set_sample_rate(sample_rate);
        self.dwell_samples = ms_to_samples(self.dwell_ms, sample_rate);
    }

    /// Return to the initial state (`false`, no pending change, input at rest).
    pub fn reset(&mut self) {
        self.smoother.set_immediate(0.0);
        self.current = false;
        self.pending = false;
        self.counter = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SR: f32 = 48000.0;

    #[test]
    fn initial_state_is_false() {
        let gate = HysteresisGate::new(SR, 400.0, 150.0);
        assert!(!gate.state());
        assert!(!gate.pending());
        assert_eq!(gate.counter(), 0);
        assert_eq!(gate.dwell_samples(), 7200);
    }

    #[test]
    fn commits_after_exact_dwell() {
        let mut gate = HysteresisGate::new(SR, 0.0, 2.0); // 96 samples
        for n in 1..96 {
            assert!(!gate.process(0.9), "flipped early at sample {n}");
        }
        assert!(gate.process(0.9));
        assert_eq!(gate.counter(), 0);
        assert!(gate.pending());
    }

    #[test]
    fn interrupted_candidate_restarts_count() {
        let mut gate = HysteresisGate::new(SR, 0.0, 1.0); // 48 samples
        for _ in 0..40 {
            gate.process(1.0);
        }
        assert_eq!(gate.counter(), 40);

        // One sample back at the committed value clears the candidate
        gate.process(0.0);
        assert_eq!(gate.counter(), 0);
        assert!(!gate.pending());

        for _ in 0..47 {
            assert!(!gate.process(1.0));
        }
        assert!(gate.process(1.0));
    }

    #[test]
    fn flips_back_with_same_dwell() {
        let mut gate = HysteresisGate::new(SR, 0.0, 1.0);
        for _ in 0..48 {
            gate.process(1.0);
        }
        assert!(gate.state());
        for _ in 0..47 {
            assert!(gate.process(0.0));
        }
        assert!(!gate.process(0.0));
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut gate = HysteresisGate::new(SR, 0.0, 0.0);
        gate.process(0.5);
        assert!(gate.process(0.5), "0.5 counts as true");
    }

    #[test]
    fn zero_dwell_commits_on_second_sample() {
        let mut gate = HysteresisGate::new(SR, 0.0, 0.0);
        assert!(!gate.process(1.0));
        assert!(gate.process(1.0));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut gate = HysteresisGate::new(SR, 0.0, 0.5);
        for _ in 0..100 {
            gate.process(1.0);
        }
        assert!(gate.state());
        gate.reset();
        assert!(!gate.state());
        assert_eq!(gate.smoothed(), 0.0);
    }

    #[test]
    fn sample_rate_change_rescales_dwell() {
        let mut gate = HysteresisGate::new(SR, 0.0, 150.0);
        gate.set_sample_rate(96000.0);
        assert_eq!(gate.dwell_ms(), 150.0);
        assert_eq!(gate.dwell_samples(), 14400);
    }
}
