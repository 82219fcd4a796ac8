//! Input validation for operation parameters and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions run before every
//! differencing, integration or extrema call. It checks orders, tolerances,
//! sequence lengths and coordinate spacing.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or correct invalid inputs.
//! * This module does not check values for finiteness.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::spacing::Spacing;
use crate::primitives::errors::SeqError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for operation parameters and input data.
///
/// All methods return `Result<(), SeqError>` and fail fast upon the first
/// violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the differential order (must be at least 1).
    pub fn validate_order(order: usize) -> Result<(), SeqError> {
        if order < 1 {
            return Err(SeqError::InvalidOrder(order));
        }
        Ok(())
    }

    /// Validate the extrema tolerance (must be > 0 and finite).
    pub fn validate_tolerance<T: Float>(eps: T) -> Result<(), SeqError> {
        if !eps.is_finite() || eps <= T::zero() {
            return Err(SeqError::InvalidTolerance(
                eps.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in a builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), SeqError> {
        if let Some(param) = duplicate_param {
            return Err(SeqError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    // ========================================================================
    // Data Validation
    // ========================================================================

    /// Validate that coordinate and value sequences have equal length.
    pub fn validate_lengths(x_len: usize, y_len: usize) -> Result<(), SeqError> {
        if x_len != y_len {
            return Err(SeqError::LengthMismatch { x_len, y_len });
        }
        Ok(())
    }

    /// Validate that a sequence holds at least `min` samples.
    pub fn validate_min_len(got: usize, min: usize) -> Result<(), SeqError> {
        if got < min {
            return Err(SeqError::InsufficientLength { got, min });
        }
        Ok(())
    }

    /// Validate that no two consecutive coordinates coincide.
    pub fn validate_spacing<T: Float>(spacing: &Spacing<'_, T>) -> Result<(), SeqError> {
        if let Some(index) = spacing.first_degenerate() {
            return Err(SeqError::DegenerateSpacing { index });
        }
        Ok(())
    }

    /// Validate an explicit coordinate slice against its value sequence.
    ///
    /// Unit spacing always matches.
    pub fn validate_coordinates<T: Float>(
        spacing: &Spacing<'_, T>,
        y_len: usize,
    ) -> Result<(), SeqError> {
        match spacing.explicit_len() {
            Some(x_len) => Self::validate_lengths(x_len, y_len),
            None => Ok(()),
        }
    }
}
