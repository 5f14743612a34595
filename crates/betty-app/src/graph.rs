//! The betty effect graph.
//!
//! One call to [`EffectGraph::process`] runs the whole per-sample pipeline:
//!
//! ```text
//! bias ───smooth─┐
//! params ─smooth─┼─ biased_scale ─▶ gate ─▶ Mode ─▶ transpositions, mix
//!                └─ wah level, dry/wet, amount ─▶ wah
//!
//! L+R ─┬─▶ delay ─▶ wah ─┬─▶ shifter 1 × m1 ─┐
//!      │                 └─▶ shifter 2 × m2 ─┴─▶ dc ─▶ ×0.5 ─┐
//!      └─────────────────────────────────────────────────────(+)─▶ tanh ─▶ (y, y)
//! ```
//!
//! Everything is sized in the constructor; `process` never allocates.

use betty_core::{
    Effect, ExpSmoother, HysteresisGate, PitchShift, TapDelay, WahStage, biased_scale, clamp_unit,
    soft_clip,
};
use betty_platform::StereoSample;

use crate::{BettyConfig, BettyError, DefaultStages, Mode, N_PARAMS, Param, Params, StageSet};

/// Length of the delay line in seconds.
pub const DELAY_SECONDS: f32 = 1.0;
/// Level of the processed tail added back to the dry sum.
pub const MIX_BACK: f32 = 0.5;

/// Smoothed control plus the stage chain.
pub struct EffectGraph<S: StageSet = DefaultStages> {
    params: ExpSmoother<N_PARAMS>,
    bias: ExpSmoother<1>,
    gate: HysteresisGate,
    mode: Mode,
    delay: S::Delay,
    tap: usize,
    wah: S::Wah,
    shifter1: S::Shifter,
    shifter2: S::Shifter,
    dc: S::DcBlock,
}

impl EffectGraph<DefaultStages> {
    /// Build a graph with the default stages.
    ///
    /// # Example
    ///
    /// ```rust
    /// use betty_app::{BettyConfig, EffectGraph};
    /// use betty_platform::StereoSample;
    ///
    /// let mut graph = EffectGraph::new(&BettyConfig::default()).unwrap();
    /// let out = graph.process(StereoSample::new(0.1, 0.1), &[0.0; 7], 0.5);
    /// assert_eq!(out.left, out.right);
    /// ```
    pub fn new(config: &BettyConfig) -> Result<Self, BettyError> {
        Self::with_stages(config)
    }
}

impl<S: StageSet> EffectGraph<S> {
    /// Build a graph with the stages chosen by `S`.
    pub fn with_stages(config: &BettyConfig) -> Result<Self, BettyError> {
        config.validate()?;

        let sr = config.sample_rate;
        let len = (DELAY_SECONDS * sr) as usize;
        let tap = len - 2;

        #[cfg(feature = "tracing")]
        tracing::info!(
            sample_rate = sr,
            delay_len = len,
            tap,
            param_smoothing_ms = config.param_smoothing_ms,
            bias_smoothing_ms = config.bias_smoothing_ms,
            "effect graph ready"
        );

        let mut graph = Self {
            params: ExpSmoother::new(config.param_smoothing_ms, sr),
            bias: ExpSmoother::new(config.bias_smoothing_ms, sr),
            gate: HysteresisGate::new(sr, config.switch_smoothing_ms, config.switch_hysteresis_ms),
            mode: Mode::default(),
            delay: S::delay(sr, len),
            tap,
            wah: S::wah(sr),
            shifter1: S::shifter(sr),
            shifter2: S::shifter(sr),
            dc: S::dc_blocker(sr, config.dc_blocker_coeff),
        };
        graph.apply_mode();
        Ok(graph)
    }

    /// Process one frame.
    ///
    /// `raw` is the latest parameter vector and `raw_bias` the latest bias,
    /// both as published; smoothing happens here. Controls are pinned to
    /// `[0, 1]` first, NaN counting as 0, so no published value can push a
    /// smoother off the finite range.
    #[inline]
    pub fn process(
        &mut self,
        input: StereoSample,
        raw: &[f32; N_PARAMS],
        raw_bias: f32,
    ) -> StereoSample {
        let [bias] = self.bias.process(&[clamp_unit(raw_bias)]);
        let params = Params::new(self.params.process(&raw.map(clamp_unit)));

        let switch = biased_scale(params[Param::WhichShift], bias);
        let gate = self.gate.process(switch);
        let mode = Mode::select(gate, &params);

        #[cfg(feature = "tracing")]
        if mode.is_single() != self.mode.is_single() {
            tracing::trace!(?mode, "mode switch");
        }

        self.mode = mode;
        self.apply_mode();

        self.wah.set_level(params[Param::WahLevel]);
        self.wah.set_dry_wet(params[Param::WahDryWet] * 100.0);
        self.wah.set_wah(params[Param::WahAmount]);

        let (m1, m2) = self.mode.mix();

        let mut y = input.left + input.right;
        let mut tail = self.delay.play(y, self.tap);
        tail = self.wah.process(tail);
        let shifted = self.shifter1.process(tail) * m1 + self.shifter2.process(tail) * m2;
        tail = self.dc.process(shifted);
        y += tail * MIX_BACK;
        y = soft_clip(y);

        StereoSample::mono(y)
    }

    /// Process a block of frames. `input` and `output` must be the same length.
    pub fn process_block(
        &mut self,
        input: &[StereoSample],
        output: &mut [StereoSample],
        raw: &[f32; N_PARAMS],
        raw_bias: f32,
    ) {
        debug_assert_eq!(input.len(), output.len());
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp, raw, raw_bias);
        }
    }

    fn apply_mode(&mut self) {
        match self.mode {
            Mode::Single { transposition } => self.shifter1.set_transposition(transposition),
            Mode::Dual { first, second } => {
                self.shifter1.set_transposition(first);
                self.shifter2.set_transposition(second);
            }
        }
    }

    /// The mode chosen on the last processed sample.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The gate driving mode selection.
    pub fn gate(&self) -> &HysteresisGate {
        &self.gate
    }

    /// Current smoothed parameters.
    pub fn smoothed_params(&self) -> Params {
        Params::new(self.params.current())
    }

    /// Current smoothed bias.
    pub fn smoothed_bias(&self) -> f32 {
        self.bias.current()[0]
    }

    /// Delay tap in samples.
    pub fn tap(&self) -> usize {
        self.tap
    }

    /// Clear all stage and control state. Allocates nothing.
    pub fn reset(&mut self) {
        self.params.reset();
        self.bias.reset();
        self.gate.reset();
        self.mode = Mode::default();
        self.delay.clear();
        self.wah.reset();
        self.shifter1.reset();
        self.shifter2.reset();
        self.dc.reset();
        self.apply_mode();
    }
}

impl<S: StageSet> core::fmt::Debug for EffectGraph<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EffectGraph")
            .field("mode", &self.mode)
            .field("tap", &self.tap)
            .field("gate", &self.gate)
            .finish_non_exhaustive()
    }
}
