//! Layer 6: Math
//!
//! # Purpose
//!
//! This layer provides elementwise transcendental functions on `Simd<T, A>`
//! for floating-point lanes:
//! - Generic fallbacks that round-trip through a lane array and call the
//!   scalar reference function once per lane
//! - The `SimdMath` trait, whose default methods are those fallbacks and which
//!   a backend may override with faster kernels
//! - Backend opt-ins and overrides
//!
//! # Architecture
//!
//! ```text
//! Layer 7: Kernels
//!   ↓
//! Layer 6: Math ← You are here
//!   ↓
//! Layer 5: Masking
//!   ↓
//! Layer 4: Algebra
//!   ↓
//! Layer 3: Types
//!   ↓
//! Layer 2: Backends
//!   ↓
//! Layer 1: Primitives
//! ```

/// Lane-array fallbacks available for every backend.
pub mod fallback;

/// Overridable math trait and dispatching functions.
pub mod transcendental;

/// Backend opt-ins and specialized kernels.
pub mod specialized;
