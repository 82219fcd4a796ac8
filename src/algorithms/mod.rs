//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer holds the three numeric algorithms of the crate:
//! - Forward differencing (discrete derivative)
//! - Reverse-accumulated integration
//! - Linear-time interval extrema localization
//!
//! The algorithms assume validated input and never touch caller data in place.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// n-th order finite differences.
pub mod difference;

/// n-th order reverse-accumulated integrals.
pub mod integration;

/// Local extrema localization.
pub mod extrema;
