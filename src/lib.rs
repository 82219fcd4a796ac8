//! # seqcalc — differences, integrals and extrema of 1-D sequences
//!
//! Three small, composable operations over ordered numeric sequences,
//! optionally paired with x-coordinates:
//!
//! - **Differencing**: n-th order forward differences, i.e. discrete
//!   derivative approximations `(y[k+1] - y[k]) / (x[k+1] - x[k])`.
//! - **Integration**: spacing-weighted reverse cumulative sums. Integrating a
//!   differenced sequence gives back the original curve shifted by a
//!   constant (the *translation* property), not the original values.
//! - **Extrema**: a single linear-time scan that brackets every local
//!   minimum and maximum of noisy data inside an interval, following
//!   Villaverde & Kreinovich (Interval Computations, 1993).
//!
//! All operations borrow their inputs immutably and return freshly
//! allocated results.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqcalc::prelude::*;
//!
//! let y = vec![0.0, 1.0, 4.0, 9.0, 16.0];
//!
//! // First and second differences
//! let d1 = diff(&y, 1)?;
//! let d2 = diff(&y, 2)?;
//! assert_eq!(d1, vec![1.0, 3.0, 5.0, 7.0]);
//! assert_eq!(d2, vec![2.0, 2.0, 2.0]);
//!
//! // Integrating the differences recovers y up to a constant
//! let back = integral(&d1, 1)?;
//! let offset = back[0] - y[0];
//! for (b, v) in back.iter().zip(&y) {
//!     assert_eq!(b - v, offset);
//! }
//! # Result::<(), SeqError>::Ok(())
//! ```
//!
//! ## Extrema
//!
//! The tolerance `epsilon` is the half-width of the band inside which
//! fluctuations are treated as noise. It must be chosen for the data: small
//! values find turning points reliably but may mistake noise for extrema.
//!
//! ```rust
//! use seqcalc::prelude::*;
//!
//! let y = vec![5.0, 1.0, 1.0, 1.0, 5.0, 1.0, 1.0, 1.0, 5.0];
//!
//! // Representative positions
//! let points = extrema(&y, 0.1)?;
//! assert_eq!(points.minima, vec![2, 6]);
//! assert_eq!(points.maxima, vec![4]);
//!
//! // Bracketing intervals in coordinate units
//! let x: Vec<f64> = (0..y.len()).map(|i| i as f64 * 0.5).collect();
//! let intervals = extrema_xy(&x, &y, 0.1)?;
//! assert_eq!(intervals.minima[0], Interval::new(0.0, 2.0));
//! # Result::<(), SeqError>::Ok(())
//! ```
//!
//! ## Builder
//!
//! Every operation is also available through a fluent builder that
//! validates its parameters once and can be reused:
//!
//! ```rust
//! use seqcalc::prelude::*;
//!
//! let finder = Extrema::new().epsilon(0.25).build()?;
//! let second = Diff::new().order(2).build()?;
//!
//! let y = vec![0.0, 2.0, 0.0, 2.0, 0.0];
//! assert_eq!(finder.locate(&y).maxima, vec![1, 3]);
//! assert_eq!(second.apply(&y)?, vec![-4.0, 4.0, -4.0]);
//! # Result::<(), SeqError>::Ok(())
//! ```
//!
//! | Parameter   | Default | Range        | Builder                  |
//! |-------------|---------|--------------|--------------------------|
//! | **order**   | 1       | [1, ∞)       | `Diff`, `Integral`       |
//! | **epsilon** | 0.1     | (0, ∞)       | `Extrema`                |
//!
//! ## Keyed input
//!
//! Samples indexed by something other than a dense position can be wrapped
//! in a [`Series`](prelude::Series); extrema are then reported as keys.
//!
//! ```rust
//! use seqcalc::prelude::*;
//!
//! let series: Series<&str, f64> = vec![
//!     ("mon", 1.0), ("tue", 1.0), ("wed", 3.0), ("thu", 1.0), ("fri", 1.0),
//! ].into_iter().collect();
//!
//! let points = extrema_series(&series, 0.5)?;
//! assert_eq!(points.maxima, vec!["wed"]);
//! # Result::<(), SeqError>::Ok(())
//! ```
//!
//! ## Errors
//!
//! Every operation returns `Result<_, SeqError>`. Failures are input
//! validation errors, reported before any output is produced:
//!
//! - `InvalidOrder`: order is zero.
//! - `InsufficientLength`: fewer than `order + 1` samples (differencing) or
//!   fewer than 2 (integration).
//! - `DegenerateSpacing`: two consecutive x-coordinates are equal.
//! - `InvalidTolerance`: `epsilon` is not strictly positive and finite.
//! - `LengthMismatch`: `x` and `y` differ in length.
//! - `DuplicateParameter`: a builder parameter was set twice.
//!
//! Extrema detection on fewer than two samples is not an error; it returns
//! empty lists.
//!
//! ## no_std
//!
//! Disable default features to build without the standard library (an
//! allocator is still required):
//!
//! ```toml
//! [dependencies]
//! seqcalc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error type and keyed sequences.
mod primitives;

// Layer 2: Math - coordinate spacing shared by differencing and integration.
mod math;

// Layer 3: Algorithms - differencing, integration, extrema scan.
mod algorithms;

// Layer 4: Engine - validation and result containers.
mod engine;

// High-level API: builders and one-shot functions.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types and functions:
///
/// ```
/// use seqcalc::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        DEFAULT_EPSILON, DEFAULT_ORDER, DiffBuilder as Diff, Differencer,
        ExtremaBuilder as Extrema, ExtremaFinder, ExtremaIntervals, ExtremaPoints, ExtremumKind,
        IntegralBuilder as Integral, Integrator, Interval, SeqError, Series, diff, diff_xy,
        extrema, extrema_series, extrema_xy, integral, integral_xy,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math helpers.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal validation and output types.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
