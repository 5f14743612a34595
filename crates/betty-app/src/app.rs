//! Driver-facing application: the effect graph fed from a [`ControlIntake`].

use core::ops::Deref;

use betty_platform::{AudioApp, CodecConfig, ControlIntake, IntakeError, StereoSample};

use crate::{BettyConfig, BettyError, DefaultStages, EffectGraph, Mode, N_PARAMS, StageSet};

/// The betty effect as an [`AudioApp`].
///
/// `H` is any handle to the shared intake: `&'static ControlIntake`, an
/// `Arc`, and so on. The producer keeps its own handle and publishes into it;
/// every call to [`process`](AudioApp::process) reads the latest snapshot.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use betty_app::{BettyApp, BettyConfig, N_PARAMS};
/// use betty_platform::{AudioApp, ControlIntake, StereoSample};
///
/// let intake = Arc::new(ControlIntake::<N_PARAMS>::new());
/// let mut app = BettyApp::setup(&BettyConfig::default(), Arc::clone(&intake)).unwrap();
///
/// // Producer side, typically another thread or core
/// intake.publish_params(&[0.0, 0.3, 0.0, 0.0, 0.5, 0.5, 0.5]).unwrap();
/// intake.publish_bias(0.5);
///
/// let out = app.process(StereoSample::new(0.2, 0.2));
/// assert!(out.left.abs() <= 1.0);
/// ```
pub struct BettyApp<H, S: StageSet = DefaultStages>
where
    H: Deref<Target = ControlIntake<N_PARAMS>>,
{
    graph: EffectGraph<S>,
    intake: H,
    codec: CodecConfig,
}

impl<H> BettyApp<H, DefaultStages>
where
    H: Deref<Target = ControlIntake<N_PARAMS>>,
{
    /// Size every stage for `config.sample_rate` and attach the intake.
    pub fn setup(config: &BettyConfig, intake: H) -> Result<Self, BettyError> {
        Self::with_stages(config, intake)
    }
}

impl<H, S> BettyApp<H, S>
where
    H: Deref<Target = ControlIntake<N_PARAMS>>,
    S: StageSet,
{
    /// [`setup`](BettyApp::setup) with a custom stage set.
    pub fn with_stages(config: &BettyConfig, intake: H) -> Result<Self, BettyError> {
        let graph = EffectGraph::with_stages(config)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(sample_rate = config.sample_rate, "betty app set up");

        Ok(Self {
            graph,
            intake,
            codec: CodecConfig::default(),
        })
    }

    /// Process a block of frames against a single control snapshot.
    pub fn process_block(&mut self, input: &[StereoSample], output: &mut [StereoSample]) {
        let raw = self.intake.snapshot();
        let bias = self.intake.bias();
        self.graph.process_block(input, output, &raw, bias);
    }

    /// The mode chosen on the last processed frame.
    pub fn mode(&self) -> Mode {
        self.graph.mode()
    }

    /// The underlying graph.
    pub fn graph(&self) -> &EffectGraph<S> {
        &self.graph
    }

    /// The shared intake.
    pub fn intake(&self) -> &ControlIntake<N_PARAMS> {
        &self.intake
    }

    /// Clear all audio and control state.
    pub fn reset(&mut self) {
        self.graph.reset();
    }
}

impl<H, S> AudioApp for BettyApp<H, S>
where
    H: Deref<Target = ControlIntake<N_PARAMS>>,
    S: StageSet,
{
    fn driver_config(&self) -> CodecConfig {
        self.codec
    }

    #[inline]
    fn process(&mut self, input: StereoSample) -> StereoSample {
        let raw = self.intake.snapshot();
        let bias = self.intake.bias();
        self.graph.process(input, &raw, bias)
    }

    fn process_params(&mut self, params: &[f32]) -> Result<(), IntakeError> {
        self.intake.publish_params(params)
    }
}

impl<H, S> core::fmt::Debug for BettyApp<H, S>
where
    H: Deref<Target = ControlIntake<N_PARAMS>>,
    S: StageSet,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BettyApp")
            .field("graph", &self.graph)
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}
