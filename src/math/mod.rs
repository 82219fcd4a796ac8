//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the coordinate handling shared by the differencing
//! and integration algorithms. It contains no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unit and explicit coordinate spacing.
pub mod spacing;
