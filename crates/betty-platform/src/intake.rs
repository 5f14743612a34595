//! Lock-free latest-value handoff between the control producer and the
//! audio callback.
//!
//! Each parameter lives in its own `AtomicU32` holding the `f32` bit
//! pattern. The producer overwrites, the callback reads; neither side ever
//! waits. A snapshot taken while a publish is in flight may mix old and new
//! values. The smoothers downstream absorb that, so no wider synchronization
//! is used.
//!
//! ```text
//! producer (control rate)            audio callback (sample rate)
//!   publish_params(&[f32]) ──store──▶ [AtomicU32; N] ──load──▶ snapshot()
//!   publish_bias(f32)      ──store──▶  AtomicU32     ──load──▶ bias()
//! ```

use core::sync::atomic::{AtomicU32, Ordering};

use crate::IntakeError;

/// Latest-value store for an N-parameter vector plus one bias scalar.
///
/// All values start at `0.0`. Shared between contexts through a `&'static`,
/// an `Arc`, or any other handle that derefs to the intake.
///
/// # Example
///
/// ```rust
/// use betty_platform::ControlIntake;
///
/// static INTAKE: ControlIntake<3> = ControlIntake::new();
///
/// INTAKE.publish_params(&[0.1, 0.2, 0.3]).unwrap();
/// INTAKE.publish_bias(0.75);
///
/// assert_eq!(INTAKE.snapshot(), [0.1, 0.2, 0.3]);
/// assert_eq!(INTAKE.bias(), 0.75);
/// ```
#[derive(Debug)]
pub struct ControlIntake<const N: usize> {
    params: [AtomicU32; N],
    bias: AtomicU32,
}

impl<const N: usize> Default for ControlIntake<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ControlIntake<N> {
    /// Create an intake with every value at zero.
    pub const fn new() -> Self {
        Self {
            params: [const { AtomicU32::new(0) }; N],
            bias: AtomicU32::new(0),
        }
    }

    /// Number of parameters.
    pub const fn len(&self) -> usize {
        N
    }

    /// True for a zero-parameter intake.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Overwrite the parameter vector.
    ///
    /// The whole slice is validated before anything is stored, so a rejected
    /// vector never partially lands.
    pub fn publish_params(&self, values: &[f32]) -> Result<(), IntakeError> {
        if values.len() != N {
            return Err(IntakeError::LengthMismatch {
                expected: N,
                actual: values.len(),
            });
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(IntakeError::NonFinite { index, value });
        }

        for (slot, value) in self.params.iter().zip(values) {
            slot.store(value.to_bits(), Ordering::Relaxed);
        }
        Ok(())
    }

    /// Overwrite the bias. Non-finite values are ignored.
    pub fn publish_bias(&self, bias: f32) {
        if bias.is_finite() {
            self.bias.store(bias.to_bits(), Ordering::Relaxed);
        }
    }

    /// Latest parameter vector.
    #[inline]
    pub fn snapshot(&self) -> [f32; N] {
        core::array::from_fn(|i| f32::from_bits(self.params[i].load(Ordering::Relaxed)))
    }

    /// Latest bias.
    #[inline]
    pub fn bias(&self) -> f32 {
        f32::from_bits(self.bias.load(Ordering::Relaxed))
    }
}
