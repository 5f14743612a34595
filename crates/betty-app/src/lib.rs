//! Betty App - smoothed control, hysteretic mode switching and routing
//!
//! Betty is a real-time effect whose parameters arrive asynchronously from a
//! control-rate producer (an inference process on another core, say). This
//! crate turns those raw, jumpy values into click-free per-sample control and
//! runs the signal graph they drive.
//!
//! # Core Abstractions
//!
//! - [`EffectGraph`] - Per-sample pipeline: smoothers, gate, mode, stage chain
//! - [`BettyApp`] - [`AudioApp`](betty_platform::AudioApp) wrapping the graph
//!   and reading a shared [`ControlIntake`](betty_platform::ControlIntake)
//! - [`Mode`] - Single (one shifter up) or Dual (two shifters down)
//! - [`StageSet`] - Chooses the concrete stages; [`DefaultStages`] ships
//! - [`BettyConfig`] - Timing and filter settings, validated at setup
//!
//! # Features
//!
//! - `std` (default) - build against the standard library
//! - `tracing` - setup and mode-switch events through `tracing`
//! - `serde` - `Serialize`/`Deserialize` for [`BettyConfig`] and `CodecConfig`
//!
//! # Example
//!
//! ```rust
//! use betty_app::{BettyConfig, EffectGraph, Mode};
//! use betty_platform::StereoSample;
//!
//! let mut graph = EffectGraph::new(&BettyConfig::default()).unwrap();
//! let params = [0.0, 0.6, 0.2, 0.0, 0.8, 0.5, 0.4];
//!
//! for _ in 0..64 {
//!     let out = graph.process(StereoSample::new(0.1, 0.1), &params, 0.5);
//!     assert!(out.left.abs() <= 1.0);
//! }
//! assert!(matches!(graph.mode(), Mode::Dual { .. }));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod app;
pub mod config;
pub mod error;
pub mod graph;
pub mod mode;
pub mod params;
pub mod stages;

// Re-export main types at crate root
pub use app::BettyApp;
pub use config::BettyConfig;
pub use error::BettyError;
pub use graph::EffectGraph;
pub use mode::{INTERVALS, Mode};
pub use params::{N_PARAMS, Param, Params};
pub use stages::{DefaultStages, StageSet};
