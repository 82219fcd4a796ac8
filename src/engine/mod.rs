//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer sits between the public API and the algorithms:
//! - Fail-fast validation of parameters and input data
//! - Result containers and their human-readable formatting
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Input validation.
pub mod validator;

/// Extrema result types.
pub mod output;
