//! Audio-driver facing types: codec setup and the per-sample app interface.

use crate::IntakeError;

/// Codec configuration an application hands to the audio driver at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodecConfig {
    /// Use the microphone input instead of line in.
    pub mic_input: bool,
    /// Line input level step (codec register units).
    pub line_level: u8,
    /// Microphone preamp gain in dB.
    pub mic_gain_db: u8,
    /// Output volume, 0.0 to 1.0.
    pub output_volume: f32,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            mic_input: false,
            line_level: 7,
            mic_gain_db: 0,
            output_volume: 0.95,
        }
    }
}

/// One stereo frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StereoSample {
    /// Left channel.
    pub left: f32,
    /// Right channel.
    pub right: f32,
}

impl StereoSample {
    /// Frame from two channel values.
    #[inline]
    pub const fn new(left: f32, right: f32) -> Self {
        Self { left, right }
    }

    /// Frame with the same value on both channels.
    #[inline]
    pub const fn mono(value: f32) -> Self {
        Self {
            left: value,
            right: value,
        }
    }
}

impl From<(f32, f32)> for StereoSample {
    fn from((left, right): (f32, f32)) -> Self {
        Self { left, right }
    }
}

impl From<StereoSample> for (f32, f32) {
    fn from(frame: StereoSample) -> Self {
        (frame.left, frame.right)
    }
}

/// An audio application driven one frame at a time from the driver callback.
pub trait AudioApp {
    /// Codec settings to apply before audio starts.
    fn driver_config(&self) -> CodecConfig;

    /// Process one frame. Called from the real-time callback.
    fn process(&mut self, input: StereoSample) -> StereoSample;

    /// Accept a parameter vector from the same context as the app.
    fn process_params(&mut self, params: &[f32]) -> Result<(), IntakeError>;
}
