//! Keyed sequences normalized to dense positional storage.
//!
//! ## Purpose
//!
//! Callers often hold samples indexed by something other than a dense
//! position: timestamps, labels, sparse integer keys. [`Series`] is the
//! single normalization step at the boundary of the public operations. It
//! stores the values densely (position `0..m`) and keeps the original keys,
//! in order, so that position-based results can be mapped back to keys.
//!
//! ## Invariants
//!
//! * `keys.len() == values.len()` at all times.
//! * Key order is the insertion order (or map order for `BTreeMap` sources).
//!
//! ## Non-goals
//!
//! * This module does not sort, deduplicate or validate keys.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::collections::BTreeMap;
#[cfg(feature = "std")]
use std::vec::Vec;

/// An ordered sequence of values, each tagged with a key.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<K, T> {
    keys: Vec<K>,
    values: Vec<T>,
}

impl<T: Copy> Series<usize, T> {
    /// Build a series whose keys are the positions `0..values.len()`.
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            keys: (0..values.len()).collect(),
            values: values.to_vec(),
        }
    }
}

impl<K, T> Series<K, T> {
    /// Build a series from `(key, value)` pairs, preserving their order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
    {
        let (keys, values): (Vec<K>, Vec<T>) = pairs.into_iter().unzip();
        Self { keys, values }
    }

    /// Keys in sequence order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Dense values in sequence order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Key at `position`, if any.
    pub fn key(&self, position: usize) -> Option<&K> {
        self.keys.get(position)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` when the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Split into `(keys, values)`.
    pub fn into_parts(self) -> (Vec<K>, Vec<T>) {
        (self.keys, self.values)
    }
}

impl<K, T> FromIterator<(K, T)> for Series<K, T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<K: Clone, T: Copy> From<&BTreeMap<K, T>> for Series<K, T> {
    fn from(map: &BTreeMap<K, T>) -> Self {
        map.iter().map(|(k, v)| (k.clone(), *v)).collect()
    }
}

impl<K, T> From<BTreeMap<K, T>> for Series<K, T> {
    fn from(map: BTreeMap<K, T>) -> Self {
        map.into_iter().collect()
    }
}
