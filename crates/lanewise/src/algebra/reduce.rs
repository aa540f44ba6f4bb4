//! Mask reduction predicates.
//!
//! ## Purpose
//!
//! `all_of`, `any_of` and `none_of` collapse a mask to a single `bool`. They
//! accept a plain `bool` as well, returning it unchanged (`none_of` negates
//! it), so generic code written against masks also compiles when the lane
//! count degenerates to one and the "mask" is an ordinary condition.
//!
//! ## Invariants
//!
//! * `all_of(b) == b`, `any_of(b) == b`, `none_of(b) == !b` for `b: bool`.

// Internal dependencies
use crate::primitives::abi::SimdAbi;
use crate::primitives::element::SimdElement;
use crate::types::mask::SimdMask;

// ============================================================================
// Reducible Masks
// ============================================================================

/// A mask-like value that can be collapsed to a single `bool`.
pub trait MaskReduce {
    /// Returns `true` if every lane is set.
    fn reduce_all(&self) -> bool;

    /// Returns `true` if at least one lane is set.
    fn reduce_any(&self) -> bool;
}

impl MaskReduce for bool {
    #[inline]
    fn reduce_all(&self) -> bool {
        *self
    }

    #[inline]
    fn reduce_any(&self) -> bool {
        *self
    }
}

impl<T: SimdElement, A: SimdAbi<T>> MaskReduce for SimdMask<T, A> {
    #[inline]
    fn reduce_all(&self) -> bool {
        self.all()
    }

    #[inline]
    fn reduce_any(&self) -> bool {
        self.any()
    }
}

impl<M: MaskReduce + ?Sized> MaskReduce for &M {
    #[inline]
    fn reduce_all(&self) -> bool {
        (**self).reduce_all()
    }

    #[inline]
    fn reduce_any(&self) -> bool {
        (**self).reduce_any()
    }
}

// ============================================================================
// Predicates
// ============================================================================

/// Returns `true` if every lane of `mask` is set.
#[must_use]
#[inline]
pub fn all_of<M: MaskReduce>(mask: M) -> bool {
    mask.reduce_all()
}

/// Returns `true` if at least one lane of `mask` is set.
#[must_use]
#[inline]
pub fn any_of<M: MaskReduce>(mask: M) -> bool {
    mask.reduce_any()
}

/// Returns `true` if no lane of `mask` is set.
#[must_use]
#[inline]
pub fn none_of<M: MaskReduce>(mask: M) -> bool {
    !mask.reduce_any()
}
