//! Multi-channel exponential smoother for control vectors.
//!
//! [`ExpSmoother`] runs `N` independent one-pole lowpass channels, one per
//! entry of a raw control vector. The raw vector may change at any cadence
//! slower than the sample rate; each call to [`process`](ExpSmoother::process)
//! simply tracks whatever values are passed in, turning step changes into
//! click-free exponential ramps.
//!
//! There is no cross-channel coupling: channel `i` of the output depends only
//! on channel `i` of the inputs seen so far.

use crate::param::SmoothedParam;

/// `N`-channel exponential smoother with a shared time constant.
///
/// Each channel starts at 0.0. The state is just one `f32` per channel, so
/// runs of any length are numerically stable.
///
/// # Example
///
/// ```rust
/// use betty_core::ExpSmoother;
///
/// let mut smoother = ExpSmoother::<2>::new(150.0, 48000.0);
/// let out = smoother.process(&[1.0, -1.0]);
/// assert!(out[0] > 0.0 && out[0] < 1.0);
/// assert!(out[1] < 0.0 && out[1] > -1.0);
/// ```
#[derive(Debug, Clone)]
pub struct ExpSmoother<const N: usize> {
    channels: [SmoothedParam; N],
}

impl<const N: usize> ExpSmoother<N> {
    /// Create a smoother with the given time constant (ms) and sample rate.
    ///
    /// The time constant is the time for any channel to cover ~63% of a
    /// step change. A non-positive time constant disables smoothing.
    pub fn new(smoothing_time_ms: f32, sample_rate: f32) -> Self {
        Self {
            channels: core::array::from_fn(|_| {
                SmoothedParam::with_config(0.0, sample_rate, smoothing_time_ms)
            }),
        }
    }

    /// Advance every channel one sample toward `raw` and return the result.
    #[inline]
    pub fn process(&mut self, raw: &[f32; N]) -> [f32; N] {
        let mut out = [0.0; N];
        for ((channel, &target), y) in self.channels.iter_mut().zip(raw).zip(out.iter_mut()) {
            *y = channel.process(target);
        }
        out
    }

    /// Current smoothed values without advancing.
    pub fn current(&self) -> [f32; N] {
        core::array::from_fn(|i| self.channels[i].get())
    }

    /// Force every channel to `values` with no ramp.
    ///
    /// Used at startup so the first audio block doesn't sweep in from zero.
    pub fn snap_to(&mut self, values: &[f32; N]) {
        for (channel, &v) in self.channels.iter_mut().zip(values) {
            channel.set_immediate(v);
        }
    }

    /// Reset every channel to 0.0.
    pub fn reset(&mut self) {
        for channel in &mut self.channels {
            channel.set_immediate(0.0);
        }
    }

    /// Update the sample rate, keeping the time constant.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        for channel in &mut self.channels {
            channel.set_sample_rate(sample_rate);
        }
    }
}
