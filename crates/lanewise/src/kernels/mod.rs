//! Layer 7: Kernels
//!
//! # Purpose
//!
//! This layer streams scalar buffers through vector functions. A kernel walks
//! its inputs `LANES` elements at a time, applies a `Simd -> Simd` function to
//! each full chunk and finishes the tail with a masked load and store, so a
//! buffer of any length is processed without scalar cleanup code.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: Kernels ← You are here
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
//! Layer 1: Primitives
//! ```

/// Chunked map and zip over slices.
pub mod slice;
