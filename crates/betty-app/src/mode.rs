//! Pitch-shift routing modes.

use betty_core::map_to_series;

use crate::{Param, Params};

/// Intervals, in semitones, selectable in [`Mode::Single`].
pub const INTERVALS: [f32; 5] = [2.0, 5.0, 7.0, 10.0, 12.0];

/// Which shifters sound and at what transposition.
///
/// The gate output picks the variant; the smoothed parameters fill in the
/// intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// One shifter up by an interval from [`INTERVALS`].
    Single {
        /// Shifter 1 transposition in semitones.
        transposition: f32,
    },
    /// Both shifters down, mixed equally.
    Dual {
        /// Shifter 1: a minor or major third below the octave.
        first: f32,
        /// Shifter 2: a fifth down.
        second: f32,
    },
}

impl Default for Mode {
    fn default() -> Self {
        Self::Dual {
            first: -8.0,
            second: -7.0,
        }
    }
}

impl Mode {
    /// Build the mode for a gate state and parameter set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use betty_app::{Mode, Params};
    ///
    /// let params = Params::new([1.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0]);
    /// assert_eq!(Mode::select(true, &params), Mode::Single { transposition: 7.0 });
    /// assert_eq!(
    ///     Mode::select(false, &params),
    ///     Mode::Dual { first: -8.0, second: -7.0 }
    /// );
    /// ```
    #[inline]
    pub fn select(gate: bool, params: &Params) -> Self {
        if gate {
            Self::Single {
                transposition: map_to_series(params[Param::Shift], &INTERVALS),
            }
        } else {
            let first = if params[Param::Shift] > 0.5 { -9.0 } else { -8.0 };
            // Both branches are a fifth down; shift2 is read but has no audible
            // effect in this mode.
            #[allow(clippy::if_same_then_else)]
            let second = if params[Param::Shift2] > 0.5 { -7.0 } else { -7.0 };
            Self::Dual { first, second }
        }
    }

    /// Output weights for shifter 1 and shifter 2.
    #[inline]
    pub fn mix(&self) -> (f32, f32) {
        match self {
            Self::Single { .. } => (1.0, 0.0),
            Self::Dual { .. } => (0.5, 0.5),
        }
    }

    /// True for [`Mode::Single`].
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single { .. })
    }
}
