//! Coordinate spacing for differencing and integration.
//!
//! ## Purpose
//!
//! Both the differencer and the integrator only ever need the step
//! `x[k + 1] - x[k]` between consecutive samples. This module normalizes the
//! two ways a caller can describe sample positions (implicit unit positions
//! or an explicit coordinate slice) behind one type.
//!
//! ## Design notes
//!
//! * **Zero-copy**: `Spacing::Unit` never materializes `0, 1, 2, ...`, so
//!   large `f32` inputs do not lose distinct positions to rounding.
//! * **Explicit truncation**: repeated differencing shrinks the coordinate
//!   sequence along with the values through [`Spacing::truncated`].
//!
//! ## Invariants
//!
//! * For `Unit`, every step is exactly one.
//! * For `Explicit`, `step(k)` requires `k + 1 < len`.

use num_traits::Float;

/// Sample positions of a sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spacing<'a, T> {
    /// Implicit positions `0, 1, ..., m - 1`.
    Unit,

    /// Explicit coordinates, one per sample.
    Explicit(&'a [T]),
}

impl<'a, T: Float> Spacing<'a, T> {
    /// Step between sample `k` and sample `k + 1`.
    #[inline]
    pub fn step(&self, k: usize) -> T {
        match self {
            Spacing::Unit => T::one(),
            Spacing::Explicit(x) => x[k + 1] - x[k],
        }
    }

    /// Keep only the first `len` coordinates.
    ///
    /// Unit spacing has no storage and is returned unchanged.
    pub fn truncated(self, len: usize) -> Self {
        match self {
            Spacing::Unit => Spacing::Unit,
            Spacing::Explicit(x) => Spacing::Explicit(&x[..len.min(x.len())]),
        }
    }

    /// Number of explicit coordinates, or `None` for unit spacing.
    pub fn explicit_len(&self) -> Option<usize> {
        match self {
            Spacing::Unit => None,
            Spacing::Explicit(x) => Some(x.len()),
        }
    }

    /// First index `k` whose step `x[k + 1] - x[k]` is zero.
    pub fn first_degenerate(&self) -> Option<usize> {
        match self {
            Spacing::Unit => None,
            Spacing::Explicit(x) => x.windows(2).position(|w| w[1] == w[0]),
        }
    }
}
