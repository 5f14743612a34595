//! Stateless value mapping for control parameters.
//!
//! - [`clamp_unit`] pins any `f32`, NaN and infinities included, into `[0, 1]`.
//! - [`map_to_series`] quantizes a `[0, 1]` control onto a discrete set of
//!   values, e.g. musical intervals.
//! - [`biased_scale`] squeezes a `[0, 1]` control into a sub-window of
//!   `[0, 1]` whose position follows a bias signal, shifting the effective decision
//!   point of a downstream `>= 0.5` switch without changing its slope.
//!
//! The mapping functions clamp their inputs, so out-of-range or NaN control data
//! saturates at the range edges instead of indexing out of bounds.

/// Clamp to `[0, 1]`, mapping NaN to 0.
///
/// ```rust
/// use betty_core::clamp_unit;
///
/// assert_eq!(clamp_unit(0.25), 0.25);
/// assert_eq!(clamp_unit(f32::MAX), 1.0);
/// assert_eq!(clamp_unit(f32::NEG_INFINITY), 0.0);
/// assert_eq!(clamp_unit(f32::NAN), 0.0);
/// ```
#[inline]
pub fn clamp_unit(x: f32) -> f32 {
    x.max(0.0).min(1.0)
}

/// Pick the entry of `series` whose bucket contains `value`.
///
/// `[0, 1]` is split into `series.len()` equal buckets, closed at 0 and
/// half-open above, with `value == 1.0` landing in the last bucket.
///
/// - empty `series` returns 0.0
/// - a single-entry `series` returns that entry for any `value`
///
/// # Example
///
/// ```rust
/// use betty_core::map_to_series;
///
/// let intervals = [2.0, 5.0, 7.0, 10.0, 12.0];
/// assert_eq!(map_to_series(0.0, &intervals), 2.0);
/// assert_eq!(map_to_series(0.5, &intervals), 7.0);
/// assert_eq!(map_to_series(1.0, &intervals), 12.0);
/// assert_eq!(map_to_series(0.3, &[]), 0.0);
/// ```
#[inline]
pub fn map_to_series(value: f32, series: &[f32]) -> f32 {
    match series {
        [] => 0.0,
        [only] => *only,
        _ => {
            let segment_size = 1.0 / series.len() as f32;
            let index = (clamp_unit(value) / segment_size) as usize;
            series[index.min(series.len() - 1)]
        }
    }
}

/// Remap `value` into a sub-window of `[0, 1]` positioned by `bias`.
///
/// Both inputs are clamped to `[0, 1]`.
///
/// | bias | output range |
/// |------|--------------|
/// | 0.0  | [0.0, 0.5]   |
/// | 0.25 | [0.0, 0.75]  |
/// | 0.5  | [0.0, 1.0]   |
/// | 0.75 | [0.25, 1.0]  |
/// | 1.0  | [0.5, 1.0]   |
///
/// The map is affine in `value`: `value = 0` gives the lower bound and
/// `value = 1` the upper bound. Each bound moves 1:1 with bias on its side of
/// 0.5, so the window is never narrower than 0.5.
///
/// # Example
///
/// ```rust
/// use betty_core::biased_scale;
///
/// assert_eq!(biased_scale(1.0, 0.0), 0.5);
/// assert_eq!(biased_scale(0.0, 1.0), 0.5);
/// assert_eq!(biased_scale(0.5, 0.5), 0.5);
/// ```
#[inline]
pub fn biased_scale(value: f32, bias: f32) -> f32 {
    let value = clamp_unit(value);
    let bias = clamp_unit(bias);

    let (range_min, range_max) = if bias <= 0.5 {
        (0.0, bias + 0.5)
    } else {
        (bias - 0.5, 1.0)
    };

    range_min + value * (range_max - range_min)
}
