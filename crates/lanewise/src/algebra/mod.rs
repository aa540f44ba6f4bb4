//! Layer 4: Algebra
//!
//! # Purpose
//!
//! This layer synthesizes the complete operator algebra of `Simd<T, A>` from
//! the backend's four arithmetic primitives and its broadcast constructor:
//! - Vector/vector operators and compound assignment
//! - Mixed scalar/vector operators for every primitive arithmetic scalar
//! - Reduction predicates over masks, with a `bool` degenerate case
//!
//! Nothing in this layer is backend specific, so the algebraic identities
//! (`a += b` is `a = a + b`, `s + v` is `splat(s) + v`) hold by construction
//! for every backend.
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
//! Layer 4: Algebra ← You are here
//!   ↓
//! Layer 3: Types
//!   ↓
//! Layer 2: Backends
//!   ↓
//! Layer 1: Primitives
//! ```

/// Vector/vector operators, compound assignment and horizontal reductions.
pub mod arithmetic;

/// Mixed scalar/vector operators.
pub mod mixed;

/// Mask reduction predicates.
pub mod reduce;
