//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the element traits, lane scratch arrays, the backend
//! contract and the shared error type used throughout the crate. It has zero
//! internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: Kernels
//!   ↓
//! Layer 6: Math
//!   ↓
//! Layer 5: Masking
//!   ↓
//! Layer 4: Algebra
//!   ↓
//! Layer 3: Types
//!   ↓
//! Layer 2: Backends
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Element and scalar-operand traits.
pub mod element;

/// Fixed-size lane scratch arrays.
pub mod lanes;

/// Backend contract implemented per (element, target) pair.
pub mod abi;

/// Shared error types.
pub mod errors;
