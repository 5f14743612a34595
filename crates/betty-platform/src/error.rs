//! Producer-side errors.

use thiserror::Error;

/// Reasons a parameter vector is rejected by [`ControlIntake`](crate::ControlIntake).
///
/// A rejected publish leaves the previous snapshot in place.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IntakeError {
    /// The vector does not have exactly one value per parameter.
    #[error("expected {expected} parameters, got {actual}")]
    LengthMismatch {
        /// Number of parameters the intake holds.
        expected: usize,
        /// Length of the rejected slice.
        actual: usize,
    },
    /// A value is NaN or infinite.
    #[error("parameter {index} is not finite ({value})")]
    NonFinite {
        /// Position of the offending value.
        index: usize,
        /// The offending value.
        value: f32,
    },
}
