//! Betty Platform - the seam between the effect and its host
//!
//! This crate holds everything that crosses an execution-context or driver
//! boundary:
//!
//! - [`ControlIntake`] - Lock-free latest-value store for the parameter
//!   vector and bias, written by the control producer and read by the audio
//!   callback
//! - [`CodecConfig`] - Codec settings handed to the audio driver
//! - [`AudioApp`] - Per-frame application interface the driver calls
//! - [`StereoSample`] - One stereo frame
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! betty-platform = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod driver;
pub mod error;
pub mod intake;

// Re-export main types at crate root
pub use driver::{AudioApp, CodecConfig, StereoSample};
pub use error::IntakeError;
pub use intake::ControlIntake;
