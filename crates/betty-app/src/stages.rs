//! Stage selection for the effect graph.
//!
//! The graph only talks to stages through the capability traits in
//! `betty-core`. A [`StageSet`] names one concrete type per slot and knows
//! how to build it for a sample rate, so alternative implementations (or
//! test doubles) drop in without touching the routing.

use betty_core::{DcBlocker, DelayLine, Effect, PitchShift, TapDelay, WahStage};
use betty_effects::{AutoWah, PitchShifter};

/// Factory for every stage the graph owns.
pub trait StageSet {
    /// Tapped delay line.
    type Delay: TapDelay;
    /// Auto-wah.
    type Wah: WahStage;
    /// Pitch shifter (two instances).
    type Shifter: PitchShift;
    /// DC blocker on the shifted tail.
    type DcBlock: Effect;

    /// Delay line able to hold `len` samples.
    fn delay(sample_rate: f32, len: usize) -> Self::Delay;

    /// Auto-wah at the given sample rate.
    fn wah(sample_rate: f32) -> Self::Wah;

    /// Pitch shifter at the given sample rate.
    fn shifter(sample_rate: f32) -> Self::Shifter;

    /// DC blocker with pole `coeff`.
    fn dc_blocker(sample_rate: f32, coeff: f32) -> Self::DcBlock;
}

/// The stages betty ships with.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStages;

impl StageSet for DefaultStages {
    type Delay = DelayLine;
    type Wah = AutoWah;
    type Shifter = PitchShifter;
    type DcBlock = DcBlocker;

    fn delay(_sample_rate: f32, len: usize) -> DelayLine {
        DelayLine::new(len)
    }

    fn wah(sample_rate: f32) -> AutoWah {
        AutoWah::new(sample_rate)
    }

    fn shifter(sample_rate: f32) -> PitchShifter {
        PitchShifter::new(sample_rate)
    }

    fn dc_blocker(_sample_rate: f32, coeff: f32) -> DcBlocker {
        DcBlocker::with_coeff(coeff)
    }
}
