//! Error types for sequence differencing, integration and extrema detection.
//!
//! ## Purpose
//!
//! This module defines the single error type shared by every public
//! operation in the crate. All failures are input-validation failures and
//! are reported before any output is produced.
//!
//! ## Design notes
//!
//! * **Typed**: Each failure mode has its own variant carrying the offending value.
//! * **no_std**: `Display` is implemented through `core::fmt`; the
//!   `std::error::Error` impl is only available with the `std` feature.
//!
//! ## Invariants
//!
//! * No variant is retryable; the caller has to fix its input.
//!
//! ## Non-goals
//!
//! * This module does not recover from or correct invalid inputs.

use core::fmt;

/// Errors returned by the differencing, integration and extrema operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SeqError {
    /// Differential order was zero (must be at least 1).
    InvalidOrder(usize),

    /// Sequence is too short for the requested operation.
    InsufficientLength {
        /// Number of samples supplied.
        got: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// Two consecutive coordinates are equal, so the spacing used as a divisor is zero.
    DegenerateSpacing {
        /// Index `k` such that `x[k + 1] == x[k]`.
        index: usize,
    },

    /// Tolerance was not strictly positive and finite.
    InvalidTolerance(f64),

    /// Coordinate and value sequences differ in length.
    LengthMismatch {
        /// Length of the coordinate sequence.
        x_len: usize,
        /// Length of the value sequence.
        y_len: usize,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqError::InvalidOrder(order) => {
                write!(f, "Invalid order: {} (must be at least 1)", order)
            }
            SeqError::InsufficientLength { got, min } => {
                write!(f, "Insufficient length: got {}, need at least {}", got, min)
            }
            SeqError::DegenerateSpacing { index } => write!(
                f,
                "Degenerate spacing: x[{}] == x[{}] (zero step)",
                index,
                index + 1
            ),
            SeqError::InvalidTolerance(eps) => {
                write!(f, "Invalid tolerance: {} (must be > 0 and finite)", eps)
            }
            SeqError::LengthMismatch { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} points, y has {}", x_len, y_len)
            }
            SeqError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SeqError {}
