//! Layer 5: Masking
//!
//! # Purpose
//!
//! This layer provides lane-selective reads and writes: `where_(&mask, value)`
//! binds a mask to a vector (or, degenerately, a `bool` to a scalar) and
//! returns a short-lived view through which only the selected lanes are
//! touched.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: Kernels
//!   ↓
//! Layer 6: Math
//!   ↓
//! Layer 5: Masking ← You are here
//!   ↓
//! Layer 4: Algebra
//!   ↓
//! Layer 3: Types
//!   ↓
//! Layer 2: Backends
//!   ↓
//! Layer 1: Primitives
//! ```

/// Masked-assignment expressions and the `where_` entry point.
pub mod where_expr;
