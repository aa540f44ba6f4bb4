//! Error types for lane transfers and slice kernels.
//!
//! ## Purpose
//!
//! This module defines the runtime error conditions of the crate. Type
//! mismatches between vectors, masks and scalar operands are rejected at
//! compile time, and scalar domain errors propagate lane by lane as NaN, so
//! the only fallible operations are transfers between vectors and slices.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the expected and actual lengths.
//! * **No-std**: Only `core::fmt` is required; `std::error::Error` is
//!   implemented when the `std` feature is enabled.
//!
//! ## Invariants
//!
//! * Lengths in errors are element counts, never byte counts.
//!
//! ## Non-goals
//!
//! * This module does not perform the length checks itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for lane transfers and slice kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneError {
    /// A slice transfer needs at least one element per lane.
    SliceTooShort {
        /// Number of elements the transfer needs.
        needed: usize,
        /// Number of elements the slice holds.
        got: usize,
    },

    /// Buffers passed to a slice kernel must have the same length.
    LengthMismatch {
        /// Length of the first input buffer.
        expected: usize,
        /// Length of the offending buffer.
        got: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for LaneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::SliceTooShort { needed, got } => {
                write!(f, "Slice too short: got {got} elements, need at least {needed}")
            }
            Self::LengthMismatch { expected, got } => {
                write!(f, "Length mismatch: expected {expected} elements, got {got}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for LaneError {}
