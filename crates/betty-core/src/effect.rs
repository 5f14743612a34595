//! Core Effect trait and the stage capabilities the effect graph drives.
//!
//! The [`Effect`] trait is the common denominator of every processing stage:
//! initialise for a sample rate, process one sample, reset. The graph also
//! needs a handful of stage-specific setters, expressed as small extension
//! traits ([`PitchShift`], [`WahStage`], [`TapDelay`]) so the routing code
//! depends only on capabilities, never on a concrete algorithm.
//!
//! ## Design Decisions
//!
//! - **Mono processing**: Single `f32` input/output. The betty signal path
//!   sums its stereo input to mono before the first stage.
//!
//! - **Object-safe**: `dyn Effect` works, but the graph is generic over its
//!   stages so the per-sample path is statically dispatched.
//!
//! - **No allocations**: All methods are designed to be called in real-time
//!   audio contexts with zero heap allocations.

/// Core trait for all audio processing stages.
///
/// # Example
///
/// ```rust
/// use betty_core::Effect;
///
/// struct Gain {
///     gain: f32,
/// }
///
/// impl Effect for Gain {
///     fn process(&mut self, input: f32) -> f32 {
///         input * self.gain
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {
///         // Gain doesn't depend on sample rate
///     }
///
///     fn reset(&mut self) {
///         // Gain has no internal state to reset
///     }
/// }
/// ```
pub trait Effect {
    /// Process a single sample.
    ///
    /// For stages with internal state (filters, delays, etc.), this advances
    /// the state by one sample.
    fn process(&mut self, input: f32) -> f32;

    /// Process a block of samples.
    ///
    /// Default implementation calls `process()` for each sample.
    ///
    /// # Panics
    /// Debug builds panic if `input.len() != output.len()`
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Update the sample rate.
    ///
    /// Stages recalculate any sample-rate-dependent coefficients here. This
    /// is a setup-time operation and must not be called from the audio path.
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Reset internal state.
    ///
    /// Clears delay lines and filter history without changing parameters
    /// and without reallocating.
    fn reset(&mut self);
}

/// A pitch shifting stage.
pub trait PitchShift: Effect {
    /// Set the transposition in semitones (negative shifts down).
    fn set_transposition(&mut self, semitones: f32);

    /// Current transposition in semitones.
    fn transposition(&self) -> f32;
}

/// An envelope-controlled wah stage.
///
/// Ranges follow the convention the graph feeds: level and wah in `[0, 1]`,
/// dry/wet in percent `[0, 100]`. Implementations clamp.
pub trait WahStage: Effect {
    /// Output level of the wet path (0–1).
    fn set_level(&mut self, level: f32);

    /// Dry/wet balance in percent (0 = dry, 100 = wet).
    fn set_dry_wet(&mut self, percent: f32);

    /// Sweep depth of the envelope-driven filter (0–1).
    fn set_wah(&mut self, amount: f32);
}

/// A delay line read at an integer tap.
pub trait TapDelay {
    /// Write `input` and return the sample written `delay_samples` calls ago.
    ///
    /// `delay_samples == 0` returns `input` itself. Taps beyond the line's
    /// capacity are clamped to the longest available delay.
    fn play(&mut self, input: f32, delay_samples: usize) -> f32;

    /// Longest tap the line can serve, in samples.
    fn max_delay(&self) -> usize;

    /// Clear the stored history.
    fn clear(&mut self);
}
