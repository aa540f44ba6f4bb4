//! Lane vector value.
//!
//! ## Purpose
//!
//! `Simd<T, A>` holds `A::LANES` elements of type `T` in the storage chosen by
//! the execution-target tag `A`. It is constructed by broadcasting a scalar,
//! from backend storage, or from a lane array, slice or closure.
//!
//! ## Design notes
//!
//! * **Zero-cost wrapper**: The value is exactly `A::Storage`; the element and
//!   tag types are phantom.
//! * **Element-aligned transfers**: `copy_from` / `copy_to` move `LANES`
//!   elements between the vector and a scalar slice with no alignment
//!   requirement beyond the element's own.
//! * **Comparisons return masks**: `simd_gt`, `simd_ge` and `simd_ne` are
//!   derived from the backend's `lanes_lt`, `lanes_le` and `lanes_eq`.
//!
//! ## Invariants
//!
//! * Every `Simd<T, A>` has exactly `A::LANES` lanes.
//! * `Default` is the broadcast of `T::default()` (zero).
//!
//! ## Non-goals
//!
//! * Operator overloading (see the algebra layer).
//! * Transcendental functions (see the math layer).

// External dependencies
use core::fmt::{Debug, Formatter, Result};
use core::marker::PhantomData;
use num_traits::AsPrimitive;

// Internal dependencies
use crate::primitives::abi::SimdAbi;
use crate::primitives::element::{Arithmetic, SimdElement};
use crate::primitives::errors::LaneError;
use crate::primitives::lanes::LaneArray;
use crate::types::mask::SimdMask;

// ============================================================================
// Vector Type
// ============================================================================

/// `A::LANES` elements of type `T` laid out by the execution-target tag `A`.
pub struct Simd<T: SimdElement, A: SimdAbi<T>> {
    storage: A::Storage,
    _lanes: PhantomData<(T, A)>,
}

impl<T: SimdElement, A: SimdAbi<T>> Simd<T, A> {
    /// Number of lanes.
    pub const LANES: usize = A::LANES;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Number of lanes.
    #[inline]
    pub const fn lanes() -> usize {
        A::LANES
    }

    /// Wrap backend storage.
    #[inline]
    pub fn from_storage(storage: A::Storage) -> Self {
        Self {
            storage,
            _lanes: PhantomData,
        }
    }

    /// Backend storage.
    #[inline]
    pub fn storage(self) -> A::Storage {
        self.storage
    }

    /// Broadcast `value` to every lane.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self::from_storage(A::splat(value))
    }

    /// Broadcast an arithmetic scalar of any primitive type, converted with
    /// `as` semantics.
    #[inline]
    pub fn broadcast<U>(value: U) -> Self
    where
        U: Arithmetic + AsPrimitive<T>,
    {
        Self::splat(value.to_lane())
    }

    /// Vector from one element per lane.
    #[inline]
    pub fn from_array(lanes: A::Array) -> Self {
        Self::from_storage(A::load(lanes.as_ref()))
    }

    /// Vector whose lane `i` is `f(i)`.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize) -> T) -> Self {
        let mut lanes = A::Array::splat(T::default());
        for (i, lane) in lanes.as_mut().iter_mut().enumerate() {
            *lane = f(i);
        }
        Self::from_array(lanes)
    }

    /// Vector from the first `LANES` elements of `src`.
    ///
    /// # Panics
    ///
    /// Panics if `src` holds fewer than `LANES` elements.
    #[inline]
    pub fn from_slice(src: &[T]) -> Self {
        Self::from_storage(A::load(&src[..A::LANES]))
    }

    // ========================================================================
    // Element-Aligned Transfers
    // ========================================================================

    /// Load the first `LANES` elements of `src`, one per lane.
    ///
    /// # Panics
    ///
    /// Panics if `src` holds fewer than `LANES` elements.
    #[inline]
    pub fn copy_from(&mut self, src: &[T]) {
        self.storage = A::load(&src[..A::LANES]);
    }

    /// Store every lane into the first `LANES` elements of `dst`.
    ///
    /// # Panics
    ///
    /// Panics if `dst` holds fewer than `LANES` elements.
    #[inline]
    pub fn copy_to(&self, dst: &mut [T]) {
        A::store(self.storage, &mut dst[..A::LANES]);
    }

    /// Fallible [`copy_from`](Self::copy_from).
    #[inline]
    pub fn try_copy_from(&mut self, src: &[T]) -> core::result::Result<(), LaneError> {
        check_len(src.len(), A::LANES)?;
        self.copy_from(src);
        Ok(())
    }

    /// Fallible [`copy_to`](Self::copy_to).
    #[inline]
    pub fn try_copy_to(&self, dst: &mut [T]) -> core::result::Result<(), LaneError> {
        check_len(dst.len(), A::LANES)?;
        self.copy_to(dst);
        Ok(())
    }

    /// Copy the lanes out.
    #[inline]
    pub fn to_array(self) -> A::Array {
        A::to_lanes(self.storage)
    }

    /// Value of lane `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= LANES`.
    #[inline]
    pub fn lane(self, index: usize) -> T {
        self.to_array().as_ref()[index]
    }

    // ========================================================================
    // Comparisons
    // ========================================================================

    /// Lanewise `self == other`.
    #[inline]
    pub fn simd_eq(self, other: Self) -> SimdMask<T, A> {
        SimdMask::from_storage(A::lanes_eq(self.storage, other.storage))
    }

    /// Lanewise `self != other`.
    #[inline]
    pub fn simd_ne(self, other: Self) -> SimdMask<T, A> {
        !self.simd_eq(other)
    }

    /// Lanewise `self < other`.
    #[inline]
    pub fn simd_lt(self, other: Self) -> SimdMask<T, A> {
        SimdMask::from_storage(A::lanes_lt(self.storage, other.storage))
    }

    /// Lanewise `self <= other`.
    #[inline]
    pub fn simd_le(self, other: Self) -> SimdMask<T, A> {
        SimdMask::from_storage(A::lanes_le(self.storage, other.storage))
    }

    /// Lanewise `self > other`.
    #[inline]
    pub fn simd_gt(self, other: Self) -> SimdMask<T, A> {
        other.simd_lt(self)
    }

    /// Lanewise `self >= other`.
    #[inline]
    pub fn simd_ge(self, other: Self) -> SimdMask<T, A> {
        other.simd_le(self)
    }

    // ========================================================================
    // Blend
    // ========================================================================

    /// Lanewise `mask ? if_true : if_false`.
    #[inline]
    pub fn select(mask: SimdMask<T, A>, if_true: Self, if_false: Self) -> Self {
        Self::from_storage(A::select(mask.storage(), if_true.storage, if_false.storage))
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Reject slices shorter than one element per lane.
#[inline]
fn check_len(got: usize, needed: usize) -> core::result::Result<(), LaneError> {
    if got < needed {
        return Err(LaneError::SliceTooShort { needed, got });
    }
    Ok(())
}

// ============================================================================
// Standard Traits
// ============================================================================

impl<T: SimdElement, A: SimdAbi<T>> Clone for Simd<T, A> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: SimdElement, A: SimdAbi<T>> Copy for Simd<T, A> {}

impl<T: SimdElement, A: SimdAbi<T>> Default for Simd<T, A> {
    #[inline]
    fn default() -> Self {
        Self::splat(T::default())
    }
}

impl<T: SimdElement, A: SimdAbi<T>> From<T> for Simd<T, A> {
    #[inline]
    fn from(value: T) -> Self {
        Self::splat(value)
    }
}

impl<T: SimdElement, A: SimdAbi<T>> PartialEq for Simd<T, A> {
    /// Returns `true` when every lane compares equal.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array().as_ref() == other.to_array().as_ref()
    }
}

impl<T: SimdElement, A: SimdAbi<T>> Debug for Simd<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let lanes = self.to_array();
        f.debug_tuple("Simd").field(&lanes.as_ref()).finish()
    }
}
