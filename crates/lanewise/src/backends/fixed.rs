//! Array-backed execution target with a const-generic lane count.
//!
//! ## Purpose
//!
//! `Fixed<N>` stores `N` elements in a plain `[T; N]` and `N` mask lanes in a
//! `[bool; N]`. It supports every element type and every lane count, and it
//! is the reference against which the register-backed tags are tested.
//!
//! ## Design notes
//!
//! * **Portable**: Operations are written as per-lane loops over arrays; the
//!   optimizer is free to vectorize them, nothing here relies on it.
//! * **Provided defaults**: Comparisons, mask logic and `select` use the
//!   contract's lane-array implementations, which are already array loops.
//!
//! ## Invariants
//!
//! * `LANES == N`.
//! * `N > 0`: a zero-lane tag fails to compile as soon as it is used.

// External dependencies
use core::array;

// Internal dependencies
use crate::primitives::abi::SimdAbi;
use crate::primitives::element::SimdElement;

// ============================================================================
// Tag
// ============================================================================

/// `N` lanes stored as a plain array.
///
/// `N` must be at least one:
///
/// ```compile_fail
/// use lanewise::prelude::*;
///
/// let v = Simd::<f32, Fixed<0>>::splat(1.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fixed<const N: usize>;

impl<const N: usize> Fixed<N> {
    const NON_EMPTY: () = assert!(N > 0, "Fixed<N> requires at least one lane");
}

impl<T: SimdElement, const N: usize> SimdAbi<T> for Fixed<N> {
    const LANES: usize = {
        let () = Self::NON_EMPTY;
        N
    };

    type Storage = [T; N];
    type MaskStorage = [bool; N];
    type Array = [T; N];
    type MaskArray = [bool; N];

    #[inline]
    fn splat(value: T) -> [T; N] {
        let () = Self::NON_EMPTY;
        [value; N]
    }

    #[inline]
    fn load(src: &[T]) -> [T; N] {
        let () = Self::NON_EMPTY;
        let mut out = [T::default(); N];
        out.copy_from_slice(src);
        out
    }

    #[inline]
    fn store(value: [T; N], dst: &mut [T]) {
        dst.copy_from_slice(&value);
    }

    #[inline]
    fn add(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| a[i] + b[i])
    }

    #[inline]
    fn sub(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| a[i] - b[i])
    }

    #[inline]
    fn mul(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| a[i] * b[i])
    }

    #[inline]
    fn div(a: [T; N], b: [T; N]) -> [T; N] {
        array::from_fn(|i| a[i] / b[i])
    }

    #[inline]
    fn mask_splat(value: bool) -> [bool; N] {
        let () = Self::NON_EMPTY;
        [value; N]
    }

    #[inline]
    fn mask_load(src: &[bool]) -> [bool; N] {
        let () = Self::NON_EMPTY;
        let mut out = [false; N];
        out.copy_from_slice(src);
        out
    }

    #[inline]
    fn mask_store(mask: [bool; N], dst: &mut [bool]) {
        dst.copy_from_slice(&mask);
    }
}
