//! Reverse-accumulated discrete integration.
//!
//! ## Purpose
//!
//! This module computes the spacing-weighted reverse cumulative sum that
//! serves as the counterpart of [`difference`](super::difference).
//!
//! ## Key concepts
//!
//! Working right to left over a sequence of length `m`:
//!
//! ```text
//! r[m-1] = -y[m-1] * (x[m-1] - x[m-2])
//! r[k]   = -y[k]   * (x[k+1] - x[k]) + r[k+1]      k = m-2 .. 0
//! ```
//!
//! The boundary term reuses the last known step and treats `y[m]` as zero.
//!
//! * **Translation**: integrating a differenced sequence reproduces the
//!   original up to one additive constant; it is not an exact inverse.
//!
//! ## Invariants
//!
//! * Output length equals input length for every order.
//! * The caller's slices are never modified.
//!
//! ## Non-goals
//!
//! * This module does not validate order or lengths (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::spacing::Spacing;

/// Compute the `order`-th reverse-accumulated integral of `y` over `spacing`.
///
/// Sequences shorter than two samples are returned unchanged.
pub fn integrate<T: Float>(y: &[T], spacing: Spacing<'_, T>, order: usize) -> Vec<T> {
    let mut buf = y.to_vec();
    if buf.len() < 2 {
        return buf;
    }

    for _ in 0..order {
        integrate_step(&mut buf, spacing);
    }

    buf
}

fn integrate_step<T: Float>(buf: &mut [T], spacing: Spacing<'_, T>) {
    let last = buf.len() - 1;
    buf[last] = -buf[last] * spacing.step(last - 1);
    for k in (0..last).rev() {
        buf[k] = -buf[k] * spacing.step(k) + buf[k + 1];
    }
}
