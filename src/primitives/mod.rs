//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the shared error type and the keyed-sequence
//! container. It has zero internal dependencies within the crate.
//!
//! # Module Organization
//!
//! - **errors**: Shared error type (`SeqError`)
//! - **series**: Keyed sequences normalized to dense storage
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine (validator, output)
//!   ↓
//! Layer 3: Algorithms (difference, integration, extrema)
//!   ↓
//! Layer 2: Math (spacing)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
///
/// Provides:
/// - Unified `SeqError` enum
/// - Human-readable messages via `Display`
pub mod errors;

/// Keyed sequences.
///
/// Provides:
/// - `Series` container with dense values and original keys
/// - Conversions from slices, pairs and ordered maps
pub mod series;
