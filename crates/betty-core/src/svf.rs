//! Resonant bandpass for the auto-wah.
//!
//! Zavalishin's topology-preserving state variable filter ("The Art of VA
//! Filter Design", ch. 3), tapped at its bandpass node. Trapezoidal
//! integration keeps it stable when the centre moves every sample.

use core::f32::consts::PI;
use libm::tanf;

use crate::{Effect, flush_denormal};

/// Lowest centre frequency in Hz.
const MIN_CENTRE: f32 = 20.0;
/// Centre frequency ceiling as a fraction of the sample rate.
const MAX_CENTRE_RATIO: f32 = 0.49;

/// Two-pole TPT bandpass with a sweepable centre.
///
/// ```rust
/// use betty_core::{BandpassFilter, Effect};
///
/// let mut bp = BandpassFilter::new(48000.0, 800.0, 5.0);
/// bp.set_centre(1200.0);
/// assert_eq!(bp.centre(), 1200.0);
/// assert!(bp.process(0.5).is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct BandpassFilter {
    s1: f32,
    s2: f32,
    /// Prewarped integrator gain
    g: f32,
    /// Damping, 1 / Q
    damping: f32,
    centre: f32,
    sample_rate: f32,
}

impl BandpassFilter {
    /// Q is clamped to `[0.5, 20]`.
    pub fn new(sample_rate: f32, centre_hz: f32, q: f32) -> Self {
        let mut bp = Self {
            s1: 0.0,
            s2: 0.0,
            g: 0.0,
            damping: 1.0 / q.clamp(0.5, 20.0),
            centre: centre_hz,
            sample_rate,
        };
        bp.set_centre(centre_hz);
        bp
    }

    /// Move the centre frequency, clamped to `[20 Hz, 0.49 * fs]`.
    #[inline]
    pub fn set_centre(&mut self, hz: f32) {
        self.centre = hz.clamp(MIN_CENTRE, self.sample_rate * MAX_CENTRE_RATIO);
        self.g = tanf(PI * self.centre / self.sample_rate);
    }

    /// Centre frequency in Hz.
    pub fn centre(&self) -> f32 {
        self.centre
    }
}

impl Effect for BandpassFilter {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let g = self.g;
        let band = (g * (input - self.s2) + self.s1) / (1.0 + g * (g + self.damping));
        let low = self.s2 + g * band;
        self.s1 = flush_denormal(2.0 * band - self.s1);
        self.s2 = flush_denormal(2.0 * low - self.s2);
        band
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.set_centre(self.centre);
    }

    fn reset(&mut self) {
        self.s1 = 0.0;
        self.s2 = 0.0;
    }
}
