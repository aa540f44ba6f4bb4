//! Layer 3: Types
//!
//! # Purpose
//!
//! This layer provides the two value types of the crate: the lane vector
//! `Simd<T, A>` and its boolean companion `SimdMask<T, A>`, both keyed by the
//! same (element, tag) pair.
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
//! Layer 3: Types ← You are here
//!   ↓
//! Layer 2: Backends
//!   ↓
//! Layer 1: Primitives
//! ```

/// Lane vector value.
pub mod simd;

/// Boolean lane mask.
pub mod mask;
