//! Interval-based local extrema localization.
//!
//! ## Purpose
//!
//! This module locates local minima and maxima of a noisy sequence in a
//! single left-to-right pass, following Villaverde & Kreinovich, "A
//! Linear-Time Algorithm That Locates Local Extrema of a Function of One
//! Variable From Interval Measurement Results" (Interval Computations, 1993).
//! Each extremum is reported as a pair of sample positions that brackets it.
//!
//! ## Key concepts
//!
//! * **Tolerance band**: samples within `eps` of the running maximum (while
//!   rising) or running minimum (while falling) are treated as noise.
//! * **Direction**: the scan starts [`Direction::Undetermined`] and commits to
//!   rising or falling once a sample leaves the band around the first samples.
//! * **Backward scan**: when the band is broken, the scan walks back over the
//!   plateau of samples still within tolerance of the extremum and stops on
//!   the first sample outside it. That sample opens the reported interval and
//!   the breaking sample closes it, so both ends lie just off the plateau.
//!
//! ## Invariants
//!
//! * Minima and maxima alternate and are reported in discovery order.
//! * A backward scan never goes past the end of the previously reported
//!   interval, so intervals do not overlap and total work is O(n). When the
//!   scan is cut short there, the shared sample opens the new interval.
//! * Sequences with fewer than two samples produce no intervals.
//!
//! ## Non-goals
//!
//! * This module does not validate the tolerance (see `engine::validator`).
//! * This module does not map positions to coordinates (see `engine::output`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Default tolerance band half-width.
pub const DEFAULT_EPSILON: f64 = 0.1;

/// Current trend of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// No sample has left the tolerance band yet.
    #[default]
    Undetermined,

    /// Tracking a running maximum.
    Rising,

    /// Tracking a running minimum.
    Falling,
}

/// Position intervals `[start, end]` found by [`locate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtremaScan {
    /// Intervals bracketing local minima.
    pub minima: Vec<(usize, usize)>,

    /// Intervals bracketing local maxima.
    pub maxima: Vec<(usize, usize)>,
}

/// Scan `y` once and bracket every local extremum at tolerance `eps`.
pub fn locate<T: Float>(y: &[T], eps: T) -> ExtremaScan {
    let mut scan = ExtremaScan::default();
    if y.len() < 2 {
        return scan;
    }

    let mut direction = Direction::Undetermined;
    let mut hi = y[0];
    let mut lo = y[0];
    // End of the last reported interval; backward scans stop here.
    let mut floor = 0;

    for (i, &v) in y.iter().enumerate().skip(1) {
        match direction {
            Direction::Undetermined => {
                if v < hi - eps {
                    direction = Direction::Falling;
                }
                // Evaluated second: rising wins when both fire.
                if v > lo + eps {
                    direction = Direction::Rising;
                }
                hi = hi.max(v);
                lo = lo.min(v);
            }
            Direction::Rising => {
                if v >= hi - eps {
                    hi = hi.max(v);
                } else {
                    let start = scan_back(y, i, floor, |s| s >= hi - eps);
                    scan.maxima.push((start, i));
                    floor = i;
                    direction = Direction::Falling;
                    lo = v;
                }
            }
            Direction::Falling => {
                if v <= lo + eps {
                    lo = lo.min(v);
                } else {
                    let start = scan_back(y, i, floor, |s| s <= lo + eps);
                    scan.minima.push((start, i));
                    floor = i;
                    direction = Direction::Rising;
                    hi = v;
                }
            }
        }
    }

    scan
}

/// Walk back from `i - 1` over the run accepted by `within`, stopping on the
/// first sample outside it or at `floor`.
#[inline]
fn scan_back<T: Copy>(y: &[T], i: usize, floor: usize, within: impl Fn(T) -> bool) -> usize {
    let mut j = i - 1;
    while j > floor && within(y[j]) {
        j -= 1;
    }
    j
}
