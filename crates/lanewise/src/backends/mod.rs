//! Layer 2: Backends
//!
//! # Purpose
//!
//! This layer provides portable execution-target tags implementing the
//! `SimdAbi` contract. Target-specific dispatch (choosing a tag per build
//! target) is left to downstream crates; these tags are always available.
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
//! Layer 2: Backends ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Single-lane tag where masks degenerate to `bool`.
pub mod scalar;

/// Array-backed tag with a const-generic lane count.
pub mod fixed;

/// Register-backed tags built on the `wide` crate.
pub mod packed;
