//! Boolean lane mask.
//!
//! ## Purpose
//!
//! `SimdMask<T, A>` holds one boolean per lane of `Simd<T, A>`. Masks are
//! produced by lanewise comparisons and consumed by `where_`, `select` and the
//! reduction predicates.
//!
//! ## Design notes
//!
//! * **Keyed by (T, A)**: A mask for `f32` lanes is a different type from a
//!   mask for `f64` lanes even under the same tag, so pairing a mask with the
//!   wrong vector is a type error rather than a reinterpretation.
//! * **Logic operators**: `& | ^ !` forward to the backend's mask primitives.
//!
//! ## Invariants
//!
//! * A mask has exactly `A::LANES` lanes.

// External dependencies
use core::fmt::{Debug, Formatter, Result};
use core::marker::PhantomData;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

// Internal dependencies
use crate::primitives::abi::SimdAbi;
use crate::primitives::element::SimdElement;
use crate::primitives::lanes::LaneArray;

// ============================================================================
// Mask Type
// ============================================================================

/// One boolean per lane of `Simd<T, A>`.
pub struct SimdMask<T: SimdElement, A: SimdAbi<T>> {
    storage: A::MaskStorage,
    _lanes: PhantomData<(T, A)>,
}

impl<T: SimdElement, A: SimdAbi<T>> SimdMask<T, A> {
    /// Number of lanes.
    pub const LANES: usize = A::LANES;

    /// Number of lanes.
    #[inline]
    pub const fn lanes() -> usize {
        A::LANES
    }

    /// Wrap backend mask storage.
    #[inline]
    pub fn from_storage(storage: A::MaskStorage) -> Self {
        Self {
            storage,
            _lanes: PhantomData,
        }
    }

    /// Backend mask storage.
    #[inline]
    pub fn storage(self) -> A::MaskStorage {
        self.storage
    }

    /// Mask with every lane set to `value`.
    #[inline]
    pub fn splat(value: bool) -> Self {
        Self::from_storage(A::mask_splat(value))
    }

    /// Mask from one boolean per lane.
    #[inline]
    pub fn from_array(lanes: A::MaskArray) -> Self {
        Self::from_storage(A::mask_load(lanes.as_ref()))
    }

    /// Mask whose lane `i` is `f(i)`.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize) -> bool) -> Self {
        let mut lanes = A::MaskArray::splat(false);
        for (i, lane) in lanes.as_mut().iter_mut().enumerate() {
            *lane = f(i);
        }
        Self::from_array(lanes)
    }

    /// Mask selecting the first `n` lanes (all lanes when `n >= LANES`).
    #[inline]
    pub fn first_n(n: usize) -> Self {
        Self::from_fn(|i| i < n)
    }

    /// Copy the lanes out.
    #[inline]
    pub fn to_array(self) -> A::MaskArray {
        A::mask_to_lanes(self.storage)
    }

    /// Value of lane `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= LANES`.
    #[inline]
    pub fn test(self, index: usize) -> bool {
        self.to_array().as_ref()[index]
    }

    /// Number of lanes set to `true`.
    #[inline]
    pub fn count_true(self) -> usize {
        self.to_array().as_ref().iter().filter(|&&lane| lane).count()
    }

    /// Returns `true` if every lane is set.
    #[inline]
    pub fn all(self) -> bool {
        self.to_array().as_ref().iter().all(|&lane| lane)
    }

    /// Returns `true` if at least one lane is set.
    #[inline]
    pub fn any(self) -> bool {
        self.to_array().as_ref().iter().any(|&lane| lane)
    }

    /// Returns `true` if no lane is set.
    #[inline]
    pub fn none(self) -> bool {
        !self.any()
    }
}

// ============================================================================
// Standard Traits
// ============================================================================

impl<T: SimdElement, A: SimdAbi<T>> Clone for SimdMask<T, A> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: SimdElement, A: SimdAbi<T>> Copy for SimdMask<T, A> {}

impl<T: SimdElement, A: SimdAbi<T>> Default for SimdMask<T, A> {
    #[inline]
    fn default() -> Self {
        Self::splat(false)
    }
}

impl<T: SimdElement, A: SimdAbi<T>> From<bool> for SimdMask<T, A> {
    #[inline]
    fn from(value: bool) -> Self {
        Self::splat(value)
    }
}

impl<T: SimdElement, A: SimdAbi<T>> PartialEq for SimdMask<T, A> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array().as_ref() == other.to_array().as_ref()
    }
}

impl<T: SimdElement, A: SimdAbi<T>> Eq for SimdMask<T, A> {}

impl<T: SimdElement, A: SimdAbi<T>> Debug for SimdMask<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let lanes = self.to_array();
        f.debug_tuple("SimdMask").field(&lanes.as_ref()).finish()
    }
}

// ============================================================================
// Mask Logic
// ============================================================================

impl<T: SimdElement, A: SimdAbi<T>> BitAnd for SimdMask<T, A> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self::from_storage(A::mask_and(self.storage, rhs.storage))
    }
}

impl<T: SimdElement, A: SimdAbi<T>> BitOr for SimdMask<T, A> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self::from_storage(A::mask_or(self.storage, rhs.storage))
    }
}

impl<T: SimdElement, A: SimdAbi<T>> BitXor for SimdMask<T, A> {
    type Output = Self;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Self::from_storage(A::mask_xor(self.storage, rhs.storage))
    }
}

impl<T: SimdElement, A: SimdAbi<T>> Not for SimdMask<T, A> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self::from_storage(A::mask_not(self.storage))
    }
}

impl<T: SimdElement, A: SimdAbi<T>> BitAndAssign for SimdMask<T, A> {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl<T: SimdElement, A: SimdAbi<T>> BitOrAssign for SimdMask<T, A> {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl<T: SimdElement, A: SimdAbi<T>> BitXorAssign for SimdMask<T, A> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}
