//! Betty Effects - default stage implementations
//!
//! The effect graph is generic over its stages; this crate provides the
//! implementations it uses out of the box:
//!
//! - [`AutoWah`] - Envelope-swept bandpass wah ([`WahStage`](betty_core::WahStage))
//! - [`PitchShifter`] - Two-head delay-line transposer ([`PitchShift`](betty_core::PitchShift))
//!
//! The tapped delay and DC blocker come straight from `betty-core`
//! ([`DelayLine`](betty_core::DelayLine),
//! [`DcBlocker`](betty_core::DcBlocker)).
//!
//! ## Example
//!
//! ```rust
//! use betty_core::{Effect, PitchShift, WahStage};
//! use betty_effects::{AutoWah, PitchShifter};
//!
//! let mut wah = AutoWah::new(48000.0);
//! wah.set_wah(0.6);
//! wah.set_dry_wet(80.0);
//!
//! let mut shifter = PitchShifter::new(48000.0);
//! shifter.set_transposition(-9.0);
//!
//! let output = shifter.process(wah.process(0.3));
//! assert!(output.is_finite());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod autowah;
pub mod pitch_shifter;

// Re-export main types at crate root
pub use autowah::AutoWah;
pub use pitch_shifter::PitchShifter;
