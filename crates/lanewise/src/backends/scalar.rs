//! Single-lane execution target.
//!
//! ## Purpose
//!
//! `Scalar` stores one element in the element type itself and one mask lane
//! in a plain `bool`. Generic vector code instantiated on this tag behaves
//! exactly like the equivalent scalar code.
//!
//! ## Invariants
//!
//! * `LANES == 1` for every element type.

// Internal dependencies
use crate::primitives::abi::SimdAbi;
use crate::primitives::element::SimdElement;

// ============================================================================
// Tag
// ============================================================================

/// One lane per vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scalar;

impl<T: SimdElement> SimdAbi<T> for Scalar {
    const LANES: usize = 1;

    type Storage = T;
    type MaskStorage = bool;
    type Array = [T; 1];
    type MaskArray = [bool; 1];

    #[inline]
    fn splat(value: T) -> T {
        value
    }

    #[inline]
    fn load(src: &[T]) -> T {
        src[0]
    }

    #[inline]
    fn store(value: T, dst: &mut [T]) {
        dst[0] = value;
    }

    #[inline]
    fn add(a: T, b: T) -> T {
        a + b
    }

    #[inline]
    fn sub(a: T, b: T) -> T {
        a - b
    }

    #[inline]
    fn mul(a: T, b: T) -> T {
        a * b
    }

    #[inline]
    fn div(a: T, b: T) -> T {
        a / b
    }

    #[inline]
    fn mask_splat(value: bool) -> bool {
        value
    }

    #[inline]
    fn mask_load(src: &[bool]) -> bool {
        src[0]
    }

    #[inline]
    fn mask_store(mask: bool, dst: &mut [bool]) {
        dst[0] = mask;
    }

    #[inline]
    fn lanes_eq(a: T, b: T) -> bool {
        a == b
    }

    #[inline]
    fn lanes_lt(a: T, b: T) -> bool {
        a < b
    }

    #[inline]
    fn lanes_le(a: T, b: T) -> bool {
        a <= b
    }

    #[inline]
    fn mask_and(a: bool, b: bool) -> bool {
        a & b
    }

    #[inline]
    fn mask_or(a: bool, b: bool) -> bool {
        a | b
    }

    #[inline]
    fn mask_xor(a: bool, b: bool) -> bool {
        a ^ b
    }

    #[inline]
    fn mask_not(mask: bool) -> bool {
        !mask
    }

    #[inline]
    fn select(mask: bool, if_true: T, if_false: T) -> T {
        if mask { if_true } else { if_false }
    }
}
