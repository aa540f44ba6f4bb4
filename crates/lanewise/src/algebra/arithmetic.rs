//! Vector/vector operators, compound assignment and horizontal reductions.
//!
//! ## Purpose
//!
//! This module implements `+ - * /` between two vectors of the same
//! (element, tag) pair by forwarding to the backend, and derives everything
//! else from those four operators.
//!
//! ## Design notes
//!
//! * **Derived compound assignment**: `a op= b` is exactly `a = a op b`.
//!   The impls live here, so a backend cannot give compound assignment a
//!   separate code path.
//! * **Derived min/max**: Lanewise `min` / `max` are a comparison plus a
//!   blend.
//!
//! ## Invariants
//!
//! * Lane `i` of every result depends only on lane `i` of the operands.
//!
//! ## Non-goals
//!
//! * Mixed scalar/vector operands (see `mixed`).

// External dependencies
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

// Internal dependencies
use crate::primitives::abi::SimdAbi;
use crate::primitives::element::SimdElement;
use crate::types::simd::Simd;

// ============================================================================
// Binary Operators
// ============================================================================

impl<T: SimdElement, A: SimdAbi<T>> Add for Simd<T, A> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_storage(A::add(self.storage(), rhs.storage()))
    }
}

impl<T: SimdElement, A: SimdAbi<T>> Sub for Simd<T, A> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_storage(A::sub(self.storage(), rhs.storage()))
    }
}

impl<T: SimdElement, A: SimdAbi<T>> Mul for Simd<T, A> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_storage(A::mul(self.storage(), rhs.storage()))
    }
}

impl<T: SimdElement, A: SimdAbi<T>> Div for Simd<T, A> {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::from_storage(A::div(self.storage(), rhs.storage()))
    }
}

// ============================================================================
// Compound Assignment
// ============================================================================

impl<T: SimdElement, A: SimdAbi<T>> AddAssign for Simd<T, A> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: SimdElement, A: SimdAbi<T>> SubAssign for Simd<T, A> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: SimdElement, A: SimdAbi<T>> MulAssign for Simd<T, A> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: SimdElement, A: SimdAbi<T>> DivAssign for Simd<T, A> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// ============================================================================
// Derived Lanewise Operations
// ============================================================================

impl<T: SimdElement, A: SimdAbi<T>> Simd<T, A> {
    /// Lanewise minimum; `self` wins ties and unordered lanes.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::select(other.simd_lt(self), other, self)
    }

    /// Lanewise maximum; `self` wins ties and unordered lanes.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::select(self.simd_lt(other), other, self)
    }

    /// Clamp every lane into `[lo, hi]`.
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    // ========================================================================
    // Horizontal Reductions
    // ========================================================================

    /// Sum of all lanes, accumulated in lane order.
    #[inline]
    pub fn reduce_sum(self) -> T {
        self.to_array()
            .as_ref()
            .iter()
            .fold(T::default(), |acc, &lane| acc + lane)
    }

    /// Smallest lane.
    #[inline]
    pub fn reduce_min(self) -> T {
        fold_first(self, |acc, lane| if lane < acc { lane } else { acc })
    }

    /// Largest lane.
    #[inline]
    pub fn reduce_max(self) -> T {
        fold_first(self, |acc, lane| if lane > acc { lane } else { acc })
    }
}

/// Fold every lane after the first into the first.
#[inline]
fn fold_first<T: SimdElement, A: SimdAbi<T>>(value: Simd<T, A>, f: impl Fn(T, T) -> T) -> T {
    let lanes = value.to_array();
    let lanes = lanes.as_ref();
    lanes[1..].iter().fold(lanes[0], |acc, &lane| f(acc, lane))
}
