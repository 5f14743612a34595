//! Parameter vector layout.
//!
//! | Index | Name | Use |
//! |-------|------|-----|
//! | 0 | `which_shift` | mode switch, biased then gated |
//! | 1 | `shift` | Single: interval lookup; Dual: third-down choice |
//! | 2 | `shift2` | Dual: fifth-down choice |
//! | 3 | `delay_feedback` | reserved, smoothed but not routed |
//! | 4 | `wah_level` | auto-wah wet level |
//! | 5 | `wah_dry_wet` | auto-wah dry/wet (scaled ×100) |
//! | 6 | `wah_amount` | auto-wah sweep depth |

use core::ops::Index;

/// Number of control parameters.
pub const N_PARAMS: usize = 7;

/// A named slot in the parameter vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    /// Mode switch.
    WhichShift = 0,
    /// Primary shift control.
    Shift = 1,
    /// Secondary shift control.
    Shift2 = 2,
    /// Reserved delay feedback.
    DelayFeedback = 3,
    /// Wah wet level.
    WahLevel = 4,
    /// Wah dry/wet.
    WahDryWet = 5,
    /// Wah sweep depth.
    WahAmount = 6,
}

impl Param {
    /// Every parameter in vector order.
    pub const ALL: [Param; N_PARAMS] = [
        Param::WhichShift,
        Param::Shift,
        Param::Shift2,
        Param::DelayFeedback,
        Param::WahLevel,
        Param::WahDryWet,
        Param::WahAmount,
    ];

    /// Position in the parameter vector.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Snake-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Param::WhichShift => "which_shift",
            Param::Shift => "shift",
            Param::Shift2 => "shift2",
            Param::DelayFeedback => "delay_feedback",
            Param::WahLevel => "wah_level",
            Param::WahDryWet => "wah_dry_wet",
            Param::WahAmount => "wah_amount",
        }
    }
}

/// Smoothed parameter vector with named access.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Params([f32; N_PARAMS]);

impl Params {
    /// Wrap a raw vector.
    pub const fn new(values: [f32; N_PARAMS]) -> Self {
        Self(values)
    }

    /// Value of one parameter.
    #[inline]
    pub fn get(&self, param: Param) -> f32 {
        self.0[param.index()]
    }

    /// Underlying vector.
    pub fn as_array(&self) -> &[f32; N_PARAMS] {
        &self.0
    }
}

impl Index<Param> for Params {
    type Output = f32;

    fn index(&self, param: Param) -> &f32 {
        &self.0[param.index()]
    }
}

impl From<[f32; N_PARAMS]> for Params {
    fn from(values: [f32; N_PARAMS]) -> Self {
        Self(values)
    }
}
