//! Property-based tests for the effect graph.
//!
//! Arbitrary control vectors, including values far outside [0, 1], and
//! arbitrary audio must never produce a sample outside [-1, 1].

use betty_app::{BettyConfig, EffectGraph, Mode, N_PARAMS, Params};
use betty_platform::StereoSample;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn output_bounded_for_any_controls(
        params in prop::array::uniform7(-2.0f32..3.0f32),
        bias in -1.0f32..2.0f32,
        input in prop::collection::vec((-4.0f32..4.0f32, -4.0f32..4.0f32), 1..2048),
    ) {
        let mut graph = EffectGraph::new(&BettyConfig::default()).unwrap();
        for (l, r) in input {
            let out = graph.process(StereoSample::new(l, r), &params, bias);
            prop_assert!(out.left.is_finite());
            prop_assert!(out.left.abs() <= 1.0, "{}", out.left);
            prop_assert_eq!(out.left, out.right);
        }
    }

    /// The selected mode depends only on the gate and the smoothed shift
    /// parameters.
    #[test]
    fn mode_selection_is_total(shift in -1.0f32..2.0f32, shift2 in -1.0f32..2.0f32, gate in any::<bool>()) {
        let mut raw = [0.0; N_PARAMS];
        raw[1] = shift;
        raw[2] = shift2;
        match Mode::select(gate, &Params::new(raw)) {
            Mode::Single { transposition } => {
                prop_assert!(gate);
                prop_assert!(betty_app::INTERVALS.contains(&transposition));
            }
            Mode::Dual { first, second } => {
                prop_assert!(!gate);
                prop_assert!(first == -8.0 || first == -9.0);
                prop_assert_eq!(second, -7.0);
            }
        }
    }
}
