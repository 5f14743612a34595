//! Envelope-controlled auto-wah.
//!
//! A resonant bandpass whose centre frequency follows
//! the input envelope. The graph drives three controls:
//!
//! | Control | Range | Meaning |
//! |---------|-------|---------|
//! | level   | 0–1   | gain of the filtered (wet) path |
//! | dry/wet | 0–100 | percent of wet signal in the output |
//! | wah     | 0–1   | how far the envelope sweeps the filter |

use betty_core::{BandpassFilter, Effect, EnvelopeFollower, WahStage, wet_dry_mix};

/// Lowest centre frequency of the sweep in Hz.
const MIN_FREQ: f32 = 200.0;
/// Highest centre frequency of the sweep in Hz.
const MAX_FREQ: f32 = 2500.0;
/// Envelope gain before clamping, so line-level input reaches the top.
const ENVELOPE_GAIN: f32 = 4.0;
/// Filter Q.
const RESONANCE: f32 = 5.0;

/// Auto-wah stage.
///
/// # Example
///
/// ```rust
/// use betty_core::{Effect, WahStage};
/// use betty_effects::AutoWah;
///
/// let mut wah = AutoWah::new(48000.0);
/// wah.set_level(0.8);
/// wah.set_dry_wet(50.0);
/// wah.set_wah(0.7);
///
/// let output = wah.process(0.5);
/// assert!(output.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct AutoWah {
    filter: BandpassFilter,
    envelope: EnvelopeFollower,
    /// Wet path gain (0–1)
    level: f32,
    /// Wet fraction (0–1), stored from the 0–100 setter
    mix: f32,
    /// Sweep depth (0–1)
    wah: f32,
}

impl Default for AutoWah {
    fn default() -> Self {
        Self::new(48000.0)
    }
}

impl AutoWah {
    /// Create an auto-wah: full level, fully dry, no sweep.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            filter: BandpassFilter::new(sample_rate, MIN_FREQ, RESONANCE),
            envelope: EnvelopeFollower::with_times(sample_rate, 5.0, 50.0),
            level: 1.0,
            mix: 0.0,
            wah: 0.0,
        }
    }

    /// Wet path gain.
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Dry/wet in percent.
    pub fn dry_wet(&self) -> f32 {
        self.mix * 100.0
    }

    /// Sweep depth.
    pub fn wah(&self) -> f32 {
        self.wah
    }

    /// Current filter centre frequency in Hz.
    pub fn centre_frequency(&self) -> f32 {
        self.filter.centre()
    }
}

impl WahStage for AutoWah {
    fn set_level(&mut self, level: f32) {
        self.level = level.clamp(0.0, 1.0);
    }

    fn set_dry_wet(&mut self, percent: f32) {
        self.mix = percent.clamp(0.0, 100.0) / 100.0;
    }

    fn set_wah(&mut self, amount: f32) {
        self.wah = amount.clamp(0.0, 1.0);
    }
}

impl Effect for AutoWah {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let env = self.envelope.process(input);
        let sweep = (env * ENVELOPE_GAIN * self.wah).min(1.0);
        self.filter.set_centre(MIN_FREQ + (MAX_FREQ - MIN_FREQ) * sweep);

        let wet = self.filter.process(input) * self.level;
        wet_dry_mix(input, wet, self.mix)
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.filter.set_sample_rate(sample_rate);
        self.envelope.set_sample_rate(sample_rate);
    }

    fn reset(&mut self) {
        self.filter.reset();
        self.envelope.reset();
        self.filter.set_centre(MIN_FREQ);
    }
}
