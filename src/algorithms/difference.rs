//! Finite differences and discrete derivative approximation.
//!
//! ## Purpose
//!
//! This module computes the n-th order forward difference of a sequence,
//! divided by the coordinate step, which approximates the n-th derivative
//! of the sampled function.
//!
//! ## Key concepts
//!
//! * **Order 1**: `d[k] = (y[k + 1] - y[k]) / (x[k + 1] - x[k])`, length `m - 1`.
//! * **Order n**: the order-1 step applied n times. The coordinates drop
//!   their last element at every level, so level `L` uses `x[0..m - L + 1]`.
//!
//! ## Invariants
//!
//! * The caller's slices are never modified; the result is a fresh vector.
//! * Output length is `m - n` (saturating at zero).
//!
//! ## Non-goals
//!
//! * This module does not validate order, lengths or spacing (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::spacing::Spacing;

/// Compute the `order`-th difference of `y` over `spacing`.
pub fn difference<T: Float>(y: &[T], spacing: Spacing<'_, T>, order: usize) -> Vec<T> {
    let mut buf = y.to_vec();

    for _ in 0..order {
        if buf.len() < 2 {
            buf.clear();
            break;
        }
        let coords = spacing.truncated(buf.len());
        difference_step(&mut buf, coords);
    }

    buf
}

/// One order-1 differencing pass over an owned scratch buffer.
fn difference_step<T: Float>(buf: &mut Vec<T>, spacing: Spacing<'_, T>) {
    let last = buf.len() - 1;
    for k in 0..last {
        buf[k] = (buf[k + 1] - buf[k]) / spacing.step(k);
    }
    buf.truncate(last);
}
