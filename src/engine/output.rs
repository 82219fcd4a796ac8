//! Output types for extrema detection.
//!
//! ## Purpose
//!
//! This module defines the result containers returned by the extrema
//! operations: [`ExtremaIntervals`] (brackets in coordinate units) and
//! [`ExtremaPoints`] (one representative key per extremum). Both implement
//! `Display` for human-readable output.
//!
//! ## Design notes
//!
//! * Results are built from the position intervals produced by the scan,
//!   mapping each position through a caller-supplied coordinate or key.
//! * Minima and maxima are kept in separate lists, each in discovery order;
//!   [`ExtremaIntervals::events`] merges them by start position.
//!
//! ## Invariants
//!
//! * `start <= end` for every interval when coordinates are increasing.
//! * Consecutive intervals never overlap (they may share an endpoint).
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond midpoints.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::extrema::ExtremaScan;

// ============================================================================
// Interval
// ============================================================================

/// A closed interval `[start, end]` bracketing one local extremum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<X> {
    /// Coordinate of the last sample before the extremum's plateau.
    pub start: X,

    /// Coordinate of the sample that broke the tolerance band.
    pub end: X,
}

impl<X> Interval<X> {
    /// Create an interval from its endpoints.
    pub fn new(start: X, end: X) -> Self {
        Self { start, end }
    }
}

impl<X: PartialOrd> Interval<X> {
    /// `true` when `value` lies within `[start, end]`.
    pub fn contains(&self, value: &X) -> bool {
        self.start <= *value && *value <= self.end
    }
}

impl<T: Float> Interval<T> {
    /// Center of the interval.
    pub fn midpoint(&self) -> T {
        (self.start + self.end) / (T::one() + T::one())
    }

    /// Length of the interval.
    pub fn width(&self) -> T {
        self.end - self.start
    }
}

/// Kind of a local extremum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtremumKind {
    /// Local minimum.
    Minimum,

    /// Local maximum.
    Maximum,
}

impl Display for ExtremumKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ExtremumKind::Minimum => f.pad("Minimum"),
            ExtremumKind::Maximum => f.pad("Maximum"),
        }
    }
}

// ============================================================================
// Interval Results
// ============================================================================

/// Intervals bracketing the local minima and maxima of a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtremaIntervals<X> {
    /// Minimum brackets in discovery order.
    pub minima: Vec<Interval<X>>,

    /// Maximum brackets in discovery order.
    pub maxima: Vec<Interval<X>>,
}

impl<X> ExtremaIntervals<X> {
    /// Map scan positions to coordinates.
    pub(crate) fn from_scan<F>(scan: &ExtremaScan, coord: F) -> Self
    where
        F: Fn(usize) -> X,
    {
        let convert = |&(a, b): &(usize, usize)| Interval::new(coord(a), coord(b));
        Self {
            minima: scan.minima.iter().map(convert).collect(),
            maxima: scan.maxima.iter().map(convert).collect(),
        }
    }

    /// Total number of extrema found.
    pub fn len(&self) -> usize {
        self.minima.len() + self.maxima.len()
    }

    /// `true` when no extremum was found.
    pub fn is_empty(&self) -> bool {
        self.minima.is_empty() && self.maxima.is_empty()
    }
}

impl<X: PartialOrd> ExtremaIntervals<X> {
    /// All intervals tagged with their kind, ordered by start coordinate.
    pub fn events(&self) -> Vec<(ExtremumKind, &Interval<X>)> {
        let mut out = Vec::with_capacity(self.len());
        let mut mins = self.minima.iter().peekable();
        let mut maxs = self.maxima.iter().peekable();

        loop {
            let take_min = match (mins.peek(), maxs.peek()) {
                (Some(a), Some(b)) => a.start <= b.start,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            if take_min {
                if let Some(iv) = mins.next() {
                    out.push((ExtremumKind::Minimum, iv));
                }
            } else if let Some(iv) = maxs.next() {
                out.push((ExtremumKind::Maximum, iv));
            }
        }

        out
    }
}

impl<T: Float> ExtremaIntervals<T> {
    /// Collapse every interval to its center.
    pub fn midpoints(&self) -> ExtremaPoints<T> {
        ExtremaPoints {
            minima: self.minima.iter().map(Interval::midpoint).collect(),
            maxima: self.maxima.iter().map(Interval::midpoint).collect(),
        }
    }
}

impl<X: PartialOrd + Display> Display for ExtremaIntervals<X> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Minima: {}", self.minima.len())?;
        writeln!(f, "  Maxima: {}", self.maxima.len())?;
        writeln!(f)?;

        writeln!(f, "Extrema:")?;
        writeln!(f, "{:>10} {:>12} {:>12}", "Kind", "Start", "End")?;
        writeln!(f, "  ----------------------------------")?;
        for (kind, iv) in self.events() {
            writeln!(f, "{:>10} {:>12} {:>12}", kind, iv.start, iv.end)?;
        }
        Ok(())
    }
}

// ============================================================================
// Point Results
// ============================================================================

/// One representative key per local minimum and maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtremaPoints<K> {
    /// Minimum keys in discovery order.
    pub minima: Vec<K>,

    /// Maximum keys in discovery order.
    pub maxima: Vec<K>,
}

impl<K> ExtremaPoints<K> {
    /// Collapse each scan interval `[a, b]` to position `floor((a + b) / 2)` and map it to a key.
    pub(crate) fn from_scan<F>(scan: &ExtremaScan, key: F) -> Self
    where
        F: Fn(usize) -> K,
    {
        let convert = |&(a, b): &(usize, usize)| key(a + (b - a) / 2);
        Self {
            minima: scan.minima.iter().map(convert).collect(),
            maxima: scan.maxima.iter().map(convert).collect(),
        }
    }

    /// Total number of extrema found.
    pub fn len(&self) -> usize {
        self.minima.len() + self.maxima.len()
    }

    /// `true` when no extremum was found.
    pub fn is_empty(&self) -> bool {
        self.minima.is_empty() && self.maxima.is_empty()
    }
}

impl<K: Display> Display for ExtremaPoints<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_list(f, "Minima", &self.minima)?;
        write_list(f, "Maxima", &self.maxima)
    }
}

fn write_list<K: Display>(f: &mut Formatter<'_>, label: &str, items: &[K]) -> fmt::Result {
    write!(f, "{}: [", label)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    writeln!(f, "]")
}
