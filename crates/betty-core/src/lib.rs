//! Betty Core - control-rate smoothing and DSP primitives
//!
//! This crate provides the building blocks that turn raw, asynchronously
//! updated control values into audio-rate-safe parameters, plus the small set
//! of DSP primitives the betty effect graph is wired from. Everything here is
//! designed for a hard real-time audio callback: no allocation, no locking and
//! no fallible operation once constructed.
//!
//! # Core Abstractions
//!
//! ## Stage Interfaces
//!
//! - [`Effect`] - Object-safe mono processing trait (`process`, `set_sample_rate`, `reset`)
//! - [`PitchShift`], [`WahStage`], [`TapDelay`] - Stage-specific capabilities
//!   the effect graph drives
//!
//! ## Control Conditioning
//!
//! - [`SmoothedParam`] - Single exponential (RC-like) parameter smoother
//! - [`ExpSmoother`] - N independent smoothing channels over a parameter vector
//! - [`HysteresisGate`] - Smoothed, thresholded boolean with a minimum dwell time
//! - [`clamp_unit`], [`map_to_series`], [`biased_scale`] - Stateless value mapping
//!
//! ## DSP Primitives
//!
//! - [`DelayLine`] - Ring buffer with integer taps and linear fractional reads
//! - [`DcBlocker`] - First-order DC blocking highpass
//! - [`BandpassFilter`] - TPT state variable bandpass
//! - [`EnvelopeFollower`] - Peak amplitude envelope
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! betty-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use betty_core::{ExpSmoother, HysteresisGate, biased_scale};
//!
//! let mut params = ExpSmoother::<3>::new(150.0, 48000.0);
//! let mut gate = HysteresisGate::new(48000.0, 400.0, 150.0);
//!
//! let raw = [1.0, 0.25, 0.5];
//! let smoothed = params.process(&raw);
//! let mode = gate.process(biased_scale(smoothed[0], 0.5));
//! assert!(!mode); // far too early to commit a switch
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod dc_blocker;
pub mod delay;
pub mod effect;
pub mod envelope;
pub mod hysteresis;
pub mod mapping;
pub mod math;
pub mod param;
pub mod smoother;
pub mod svf;

// Re-export main types at crate root
pub use dc_blocker::DcBlocker;
pub use delay::DelayLine;
pub use effect::{Effect, PitchShift, TapDelay, WahStage};
pub use envelope::EnvelopeFollower;
pub use hysteresis::HysteresisGate;
pub use mapping::{biased_scale, clamp_unit, map_to_series};
pub use math::{flush_denormal, ms_to_samples, semitones_to_ratio, soft_clip, wet_dry_mix};
pub use param::{SmoothedParam, smoothing_coeff};
pub use smoother::ExpSmoother;
pub use svf::BandpassFilter;
