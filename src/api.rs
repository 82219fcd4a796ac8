//! High-level API for differencing, integration and extrema detection.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points. Each operation is
//! available as a one-shot free function ([`diff`], [`integral`],
//! [`extrema`], and their `_xy` variants) and as a fluent builder that
//! produces a reusable, validated model.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Builders have defaults for every parameter (order 1, epsilon 0.1).
//! * **Validated**: Parameters are validated when `.build()` is called; data is
//!   validated on every call, before any output is produced.
//! * **Pure**: Inputs are borrowed immutably and results are freshly allocated.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Diff::new()`, `Integral::new()` or `Extrema::new()`.
//! 2. Chain configuration methods (`.order()`, `.epsilon()`).
//! 3. Call `.build()` to get a [`Differencer`], [`Integrator`] or [`ExtremaFinder`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::difference::difference;
use crate::algorithms::extrema::locate;
use crate::algorithms::integration::integrate;
use crate::engine::validator::Validator;
use crate::math::spacing::Spacing;

// Publicly re-exported types
pub use crate::algorithms::extrema::DEFAULT_EPSILON;
pub use crate::engine::output::{ExtremaIntervals, ExtremaPoints, ExtremumKind, Interval};
pub use crate::primitives::errors::SeqError;
pub use crate::primitives::series::Series;

/// Differential order used when none is configured.
pub const DEFAULT_ORDER: usize = 1;

// ============================================================================
// Differencer
// ============================================================================

/// Fluent builder for the differencer.
#[derive(Debug, Clone, Default)]
pub struct DiffBuilder {
    /// Differential order (default: 1).
    pub order: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl DiffBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the differential order.
    pub fn order(mut self, order: usize) -> Self {
        if self.order.is_some() {
            self.duplicate_param = Some("order");
        }
        self.order = Some(order);
        self
    }

    /// Validate the configuration and build a [`Differencer`].
    pub fn build(self) -> Result<Differencer, SeqError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let order = self.order.unwrap_or(DEFAULT_ORDER);
        Validator::validate_order(order)?;
        Ok(Differencer { order })
    }
}

/// Computes n-th order differences (discrete derivatives).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Differencer {
    order: usize,
}

impl Differencer {
    /// Configured differential order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Difference `values` assuming unit spacing.
    ///
    /// Returns a sequence of length `m - order`.
    pub fn apply<T: Float>(&self, values: &[T]) -> Result<Vec<T>, SeqError> {
        self.run(Spacing::Unit, values)
    }

    /// Differentiate `y` sampled at coordinates `x`.
    pub fn apply_xy<T: Float>(&self, x: &[T], y: &[T]) -> Result<Vec<T>, SeqError> {
        self.run(Spacing::Explicit(x), y)
    }

    fn run<T: Float>(&self, spacing: Spacing<'_, T>, y: &[T]) -> Result<Vec<T>, SeqError> {
        Validator::validate_coordinates(&spacing, y.len())?;
        Validator::validate_min_len(y.len(), self.order.saturating_add(1))?;
        Validator::validate_spacing(&spacing)?;

        Ok(difference(y, spacing, self.order))
    }
}

// ============================================================================
// Integrator
// ============================================================================

/// Fluent builder for the integrator.
#[derive(Debug, Clone, Default)]
pub struct IntegralBuilder {
    /// Integration order (default: 1).
    pub order: Option<usize>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl IntegralBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the integration order.
    pub fn order(mut self, order: usize) -> Self {
        if self.order.is_some() {
            self.duplicate_param = Some("order");
        }
        self.order = Some(order);
        self
    }

    /// Validate the configuration and build an [`Integrator`].
    pub fn build(self) -> Result<Integrator, SeqError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let order = self.order.unwrap_or(DEFAULT_ORDER);
        Validator::validate_order(order)?;
        Ok(Integrator { order })
    }
}

/// Computes n-th order reverse-accumulated integrals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integrator {
    order: usize,
}

impl Integrator {
    /// Configured integration order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Integrate `values` assuming unit spacing.
    ///
    /// Returns a sequence of the same length as `values`.
    pub fn apply<T: Float>(&self, values: &[T]) -> Result<Vec<T>, SeqError> {
        self.run(Spacing::Unit, values)
    }

    /// Integrate `y` sampled at coordinates `x`.
    pub fn apply_xy<T: Float>(&self, x: &[T], y: &[T]) -> Result<Vec<T>, SeqError> {
        self.run(Spacing::Explicit(x), y)
    }

    fn run<T: Float>(&self, spacing: Spacing<'_, T>, y: &[T]) -> Result<Vec<T>, SeqError> {
        Validator::validate_coordinates(&spacing, y.len())?;
        Validator::validate_min_len(y.len(), 2)?;

        Ok(integrate(y, spacing, self.order))
    }
}

// ============================================================================
// Extrema
// ============================================================================

/// Fluent builder for the extrema finder.
#[derive(Debug, Clone)]
pub struct ExtremaBuilder<T: Float> {
    /// Tolerance band half-width (default: 0.1).
    pub epsilon: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for ExtremaBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ExtremaBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            epsilon: None,
            duplicate_param: None,
        }
    }

    /// Set the tolerance band half-width.
    ///
    /// Smaller values find extrema more reliably but are more likely to
    /// mistake noise for a turning point.
    pub fn epsilon(mut self, epsilon: T) -> Self {
        if self.epsilon.is_some() {
            self.duplicate_param = Some("epsilon");
        }
        self.epsilon = Some(epsilon);
        self
    }

    /// Validate the configuration and build an [`ExtremaFinder`].
    pub fn build(self) -> Result<ExtremaFinder<T>, SeqError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let epsilon = self
            .epsilon
            .unwrap_or_else(|| T::from(DEFAULT_EPSILON).unwrap_or_else(T::nan));
        Validator::validate_tolerance(epsilon)?;
        Ok(ExtremaFinder { epsilon })
    }
}

/// Locates local minima and maxima with a single linear-time scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtremaFinder<T: Float> {
    epsilon: T,
}

impl<T: Float> ExtremaFinder<T> {
    /// Configured tolerance.
    pub fn epsilon(&self) -> T {
        self.epsilon
    }

    /// Representative positions of the extrema of `values`.
    ///
    /// Each bracketing interval `[a, b]` is collapsed to `floor((a + b) / 2)`.
    pub fn locate(&self, values: &[T]) -> ExtremaPoints<usize> {
        let scan = locate(values, self.epsilon);
        ExtremaPoints::from_scan(&scan, |pos| pos)
    }

    /// Intervals, in coordinate units, bracketing the extrema of `y` sampled at `x`.
    pub fn locate_xy<X: Clone>(
        &self,
        x: &[X],
        y: &[T],
    ) -> Result<ExtremaIntervals<X>, SeqError> {
        Validator::validate_lengths(x.len(), y.len())?;

        let scan = locate(y, self.epsilon);
        Ok(ExtremaIntervals::from_scan(&scan, |pos| x[pos].clone()))
    }

    /// Keys of the extrema of a keyed series.
    ///
    /// Positions are collapsed as in [`locate`](Self::locate) and mapped back
    /// through the series' key order.
    pub fn locate_series<K: Clone>(&self, series: &Series<K, T>) -> ExtremaPoints<K> {
        let scan = locate(series.values(), self.epsilon);
        let keys = series.keys();
        ExtremaPoints::from_scan(&scan, |pos| keys[pos].clone())
    }
}

// ============================================================================
// One-shot functions
// ============================================================================

/// `order`-th difference of `values` under unit spacing.
///
/// ```
/// use seqcalc::prelude::*;
///
/// let d = diff(&[1.0, 4.0, 9.0, 16.0], 1)?;
/// assert_eq!(d, vec![3.0, 5.0, 7.0]);
/// # Ok::<(), SeqError>(())
/// ```
pub fn diff<T: Float>(values: &[T], order: usize) -> Result<Vec<T>, SeqError> {
    DiffBuilder::new().order(order).build()?.apply(values)
}

/// `order`-th derivative approximation of `y` sampled at `x`.
pub fn diff_xy<T: Float>(x: &[T], y: &[T], order: usize) -> Result<Vec<T>, SeqError> {
    DiffBuilder::new().order(order).build()?.apply_xy(x, y)
}

/// `order`-th reverse-accumulated integral of `values` under unit spacing.
///
/// ```
/// use seqcalc::prelude::*;
///
/// let r = integral(&[1.0, 2.0, 3.0], 1)?;
/// assert_eq!(r, vec![-6.0, -5.0, -3.0]);
/// # Ok::<(), SeqError>(())
/// ```
pub fn integral<T: Float>(values: &[T], order: usize) -> Result<Vec<T>, SeqError> {
    IntegralBuilder::new().order(order).build()?.apply(values)
}

/// `order`-th reverse-accumulated integral of `y` sampled at `x`.
pub fn integral_xy<T: Float>(x: &[T], y: &[T], order: usize) -> Result<Vec<T>, SeqError> {
    IntegralBuilder::new().order(order).build()?.apply_xy(x, y)
}

/// Positions of the local extrema of `values` at tolerance `epsilon`.
///
/// ```
/// use seqcalc::prelude::*;
///
/// let found = extrema(&[1.0, 1.0, 1.0, 5.0, 1.0, 1.0, 1.0], 0.1)?;
/// assert_eq!(found.maxima, vec![3]);
/// assert!(found.minima.is_empty());
/// # Ok::<(), SeqError>(())
/// ```
pub fn extrema<T: Float>(values: &[T], epsilon: T) -> Result<ExtremaPoints<usize>, SeqError> {
    Ok(ExtremaBuilder::new()
        .epsilon(epsilon)
        .build()?
        .locate(values))
}

/// Intervals bracketing the local extrema of `y` sampled at `x`.
pub fn extrema_xy<X: Clone, T: Float>(
    x: &[X],
    y: &[T],
    epsilon: T,
) -> Result<ExtremaIntervals<X>, SeqError> {
    ExtremaBuilder::new()
        .epsilon(epsilon)
        .build()?
        .locate_xy(x, y)
}

/// Keys of the local extrema of a keyed series.
pub fn extrema_series<K: Clone, T: Float>(
    series: &Series<K, T>,
    epsilon: T,
) -> Result<ExtremaPoints<K>, SeqError> {
    Ok(ExtremaBuilder::new()
        .epsilon(epsilon)
        .build()?
        .locate_series(series))
}
