//! Backend contract for vector storage and primitive lane operations.
//!
//! ## Purpose
//!
//! This module defines `SimdAbi<T>`, the capability set every execution-target
//! tag must provide for an element type `T`. Everything above the backend
//! layer (operators, masking, math fallbacks, kernels) is written purely in
//! terms of this trait.
//!
//! ## Design notes
//!
//! * **Per-pair implementation**: A tag type implements `SimdAbi<T>` once per
//!   supported element, so the lane count and physical storage are resolved at
//!   compile time with no runtime dispatch.
//! * **Minimal required set**: Construction from a scalar, element-aligned
//!   load/store and the four arithmetic operators are required. Comparisons,
//!   mask logic and `select` have portable provided implementations that go
//!   through lane arrays; a backend overrides them when it has a native form.
//!
//! ## Key concepts
//!
//! * **Storage**: The backend's opaque register representation.
//! * **Lane array**: `[T; LANES]` scratch used for element-aligned transfers.
//! * **Select**: Lanewise blend `mask ? if_true : if_false`.
//!
//! ## Invariants
//!
//! * `Self::Array` and `Self::MaskArray` hold exactly `Self::LANES` lanes.
//! * `load` and `mask_load` receive slices of exactly `Self::LANES` elements.
//! * Lane `i` of every binary operation depends only on lane `i` of its inputs.
//!
//! ## Non-goals
//!
//! * This module does not choose a tag for the current target.
//! * This module does not impose any alignment beyond the element's own.

// External dependencies
use core::fmt::Debug;

// Internal dependencies
use crate::primitives::element::SimdElement;
use crate::primitives::lanes::LaneArray;

// ============================================================================
// Backend Contract
// ============================================================================

/// Execution-target tag implementing vector storage for element type `T`.
pub trait SimdAbi<T: SimdElement>: Copy + Debug + Default + Send + Sync + 'static {
    /// Number of lanes for `T` under this tag.
    const LANES: usize;

    /// Physical register representation.
    type Storage: Copy;

    /// Physical mask representation.
    type MaskStorage: Copy;

    /// Scalar scratch holding `LANES` elements.
    type Array: LaneArray<T>;

    /// Scalar scratch holding `LANES` booleans.
    type MaskArray: LaneArray<bool>;

    // ========================================================================
    // Required Primitives
    // ========================================================================

    /// Broadcast `value` to every lane.
    fn splat(value: T) -> Self::Storage;

    /// Element-aligned load of exactly `LANES` elements.
    fn load(src: &[T]) -> Self::Storage;

    /// Element-aligned store of exactly `LANES` elements.
    fn store(value: Self::Storage, dst: &mut [T]);

    /// Lanewise addition.
    fn add(a: Self::Storage, b: Self::Storage) -> Self::Storage;

    /// Lanewise subtraction.
    fn sub(a: Self::Storage, b: Self::Storage) -> Self::Storage;

    /// Lanewise multiplication.
    fn mul(a: Self::Storage, b: Self::Storage) -> Self::Storage;

    /// Lanewise division.
    fn div(a: Self::Storage, b: Self::Storage) -> Self::Storage;

    /// Broadcast `value` to every mask lane.
    fn mask_splat(value: bool) -> Self::MaskStorage;

    /// Load exactly `LANES` booleans.
    fn mask_load(src: &[bool]) -> Self::MaskStorage;

    /// Store exactly `LANES` booleans.
    fn mask_store(mask: Self::MaskStorage, dst: &mut [bool]);

    // ========================================================================
    // Lane Array Transfers
    // ========================================================================

    /// Copy a register into its lane array.
    #[inline]
    fn to_lanes(value: Self::Storage) -> Self::Array {
        let mut lanes = Self::Array::splat(T::default());
        debug_assert_eq!(lanes.len(), Self::LANES, "lane array must hold LANES elements");
        Self::store(value, lanes.as_mut());
        lanes
    }

    /// Copy a mask into its lane array.
    #[inline]
    fn mask_to_lanes(mask: Self::MaskStorage) -> Self::MaskArray {
        let mut lanes = Self::MaskArray::splat(false);
        debug_assert_eq!(lanes.len(), Self::LANES, "mask array must hold LANES elements");
        Self::mask_store(mask, lanes.as_mut());
        lanes
    }

    // ========================================================================
    // Comparisons
    // ========================================================================

    /// Lanewise `a == b`.
    #[inline]
    fn lanes_eq(a: Self::Storage, b: Self::Storage) -> Self::MaskStorage {
        compare_lanes::<T, Self>(a, b, |x, y| x == y)
    }

    /// Lanewise `a < b`.
    #[inline]
    fn lanes_lt(a: Self::Storage, b: Self::Storage) -> Self::MaskStorage {
        compare_lanes::<T, Self>(a, b, |x, y| x < y)
    }

    /// Lanewise `a <= b`.
    #[inline]
    fn lanes_le(a: Self::Storage, b: Self::Storage) -> Self::MaskStorage {
        compare_lanes::<T, Self>(a, b, |x, y| x <= y)
    }

    // ========================================================================
    // Mask Logic
    // ========================================================================

    /// Lanewise `a && b`.
    #[inline]
    fn mask_and(a: Self::MaskStorage, b: Self::MaskStorage) -> Self::MaskStorage {
        combine_masks::<T, Self>(a, b, |x, y| x & y)
    }

    /// Lanewise `a || b`.
    #[inline]
    fn mask_or(a: Self::MaskStorage, b: Self::MaskStorage) -> Self::MaskStorage {
        combine_masks::<T, Self>(a, b, |x, y| x | y)
    }

    /// Lanewise `a != b`.
    #[inline]
    fn mask_xor(a: Self::MaskStorage, b: Self::MaskStorage) -> Self::MaskStorage {
        combine_masks::<T, Self>(a, b, |x, y| x ^ y)
    }

    /// Lanewise negation.
    #[inline]
    fn mask_not(mask: Self::MaskStorage) -> Self::MaskStorage {
        combine_masks::<T, Self>(mask, mask, |x, _| !x)
    }

    // ========================================================================
    // Blend
    // ========================================================================

    /// Lanewise `mask ? if_true : if_false`.
    #[inline]
    fn select(
        mask: Self::MaskStorage,
        if_true: Self::Storage,
        if_false: Self::Storage,
    ) -> Self::Storage {
        let selected = Self::mask_to_lanes(mask);
        let taken = Self::to_lanes(if_true);
        let mut out = Self::to_lanes(if_false);

        for ((lane, &value), &keep) in out
            .as_mut()
            .iter_mut()
            .zip(taken.as_ref())
            .zip(selected.as_ref())
        {
            if keep {
                *lane = value;
            }
        }

        Self::load(out.as_ref())
    }
}

// ============================================================================
// Lane Array Helpers
// ============================================================================

/// Compare two registers lane by lane through their lane arrays.
#[inline]
fn compare_lanes<T, A>(
    a: A::Storage,
    b: A::Storage,
    cmp: impl Fn(T, T) -> bool,
) -> A::MaskStorage
where
    T: SimdElement,
    A: SimdAbi<T>,
{
    let lhs = A::to_lanes(a);
    let rhs = A::to_lanes(b);
    let mut out = A::MaskArray::splat(false);

    for ((lane, &x), &y) in out.as_mut().iter_mut().zip(lhs.as_ref()).zip(rhs.as_ref()) {
        *lane = cmp(x, y);
    }

    A::mask_load(out.as_ref())
}

/// Combine two masks lane by lane through their lane arrays.
#[inline]
fn combine_masks<T, A>(
    a: A::MaskStorage,
    b: A::MaskStorage,
    op: impl Fn(bool, bool) -> bool,
) -> A::MaskStorage
where
    T: SimdElement,
    A: SimdAbi<T>,
{
    let lhs = A::mask_to_lanes(a);
    let rhs = A::mask_to_lanes(b);
    let mut out = A::MaskArray::splat(false);

    for ((lane, &x), &y) in out.as_mut().iter_mut().zip(lhs.as_ref()).zip(rhs.as_ref()) {
        *lane = op(x, y);
    }

    A::mask_load(out.as_ref())
}
