//! Mathematical utility functions for DSP.
//!
//! All functions are allocation-free and suitable for `no_std`.

use libm::{exp2f, tanhf};

/// Soft clip using hyperbolic tangent.
///
/// Smooth saturation that approaches ±1 asymptotically, so the output of
/// the betty signal path is bounded regardless of how hot the input is.
///
/// # Example
/// ```rust
/// use betty_core::soft_clip;
///
/// assert_eq!(soft_clip(0.0), 0.0);
/// assert!(soft_clip(100.0) <= 1.0);
/// ```
#[inline]
pub fn soft_clip(x: f32) -> f32 {
    tanhf(x)
}

/// Flush values in the denormal range to zero.
///
/// Recursive filters decaying toward silence otherwise spend their tail in
/// subnormal arithmetic, which is very slow on most FPUs.
#[inline]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}

/// Crossfade between dry and wet signals.
///
/// Equivalent to `dry * (1 - mix) + wet * mix` with one fewer multiply.
#[inline]
pub fn wet_dry_mix(dry: f32, wet: f32, mix: f32) -> f32 {
    dry + (wet - dry) * mix
}

/// Convert a duration in milliseconds to a whole number of samples (truncated).
#[inline]
pub fn ms_to_samples(ms: f32, sample_rate: f32) -> usize {
    (ms * 0.001 * sample_rate).max(0.0) as usize
}

/// Playback-rate ratio for a transposition in semitones.
///
/// `+12` doubles the rate, `-12` halves it.
#[inline]
pub fn semitones_to_ratio(semitones: f32) -> f32 {
    exp2f(semitones / 12.0)
}
