//! Masked-assignment expressions.
//!
//! ## Purpose
//!
//! This module provides `where_`, the single entry point for lane-selective
//! access, and the two views it returns:
//!
//! * `where_(&mask, &mut value)` → [`WhereExpression`]: writes through it
//!   update only the lanes where `mask` is set.
//! * `where_(&mask, &value)` → [`ConstWhereExpression`]: masked reads and
//!   reductions; it has no write path.
//!
//! ## Design notes
//!
//! * **Overloaded on mutability**: `where_` dispatches on the reference kind
//!   of `value` through [`WhereTarget`].
//! * **Mask type follows the value**: The mask parameter is typed as
//!   `V::Mask`, a projection of the value type, so the mask is never deduced
//!   on its own and a mask for another (element, tag) pair is rejected.
//! * **Non-owning**: Both views borrow the mask and the value; the borrow
//!   checker ties their lifetime to the enclosing scope.
//! * **Scalar degenerate case**: A `bool` condition paired with a primitive
//!   scalar yields the same view types, so code written against masks also
//!   compiles for single-lane scalars.
//!
//! ## Invariants
//!
//! * After any write through a `WhereExpression`, unselected lanes hold
//!   exactly their previous contents.
//! * No view allocates or dispatches dynamically.
//!
//! ## Non-goals
//!
//! * Storing expressions beyond the statement that creates them.

// External dependencies
use core::ops::{Add, Div, Mul, Sub};

// Internal dependencies
use crate::primitives::abi::SimdAbi;
use crate::primitives::element::SimdElement;
use crate::types::mask::SimdMask;
use crate::types::simd::Simd;

// ============================================================================
// Expression Types
// ============================================================================

/// Read-only view binding a mask to a value.
#[derive(Debug)]
pub struct ConstWhereExpression<'a, M, V> {
    mask: &'a M,
    value: &'a V,
}

/// Mutable view binding a mask to a value; writes touch selected lanes only.
#[derive(Debug)]
pub struct WhereExpression<'a, M, V> {
    mask: &'a M,
    value: &'a mut V,
}

impl<M, V> Clone for ConstWhereExpression<'_, M, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, V> Copy for ConstWhereExpression<'_, M, V> {}

impl<'a, M, V> ConstWhereExpression<'a, M, V> {
    /// The bound mask.
    #[inline]
    pub fn mask(&self) -> &'a M {
        self.mask
    }

    /// The bound value.
    #[inline]
    pub fn value(&self) -> &'a V {
        self.value
    }
}

impl<M, V> WhereExpression<'_, M, V> {
    /// The bound mask.
    #[inline]
    pub fn mask(&self) -> &M {
        self.mask
    }

    /// The bound value.
    #[inline]
    pub fn value(&self) -> &V {
        self.value
    }

    /// Reborrow as a read-only view.
    #[inline]
    pub fn as_const(&self) -> ConstWhereExpression<'_, M, V> {
        ConstWhereExpression {
            mask: self.mask,
            value: &*self.value,
        }
    }
}

// ============================================================================
// Entry Point
// ============================================================================

/// A value that `where_` can bind a mask to.
///
/// Implemented for shared and mutable references to vectors and primitive
/// scalars; the reference kind selects the view.
pub trait WhereTarget<'a>: Sized {
    /// Mask type paired with the value.
    type Mask: 'a;

    /// View returned by `where_`.
    type Expression;

    /// Bind `mask` to `value`.
    fn bind(mask: &'a Self::Mask, value: Self) -> Self::Expression;
}

/// Bind `mask` to `value` for lane-selective access.
///
/// ```
/// use lanewise::prelude::*;
///
/// let mut a = Simd::<f32, Fixed<4>>::from_array([0.0, 1.0, 2.0, 3.0]);
/// let mask = SimdMask::<f32, Fixed<4>>::from_array([true, false, true, false]);
///
/// where_(&mask, &mut a).assign(10.0_f32);
/// assert_eq!(a.to_array(), [10.0, 1.0, 10.0, 3.0]);
/// ```
#[must_use]
#[inline]
pub fn where_<'a, V: WhereTarget<'a>>(mask: &'a V::Mask, value: V) -> V::Expression {
    V::bind(mask, value)
}

impl<'a, T: SimdElement, A: SimdAbi<T>> WhereTarget<'a> for &'a mut Simd<T, A> {
    type Mask = SimdMask<T, A>;
    type Expression = WhereExpression<'a, SimdMask<T, A>, Simd<T, A>>;

    #[inline]
    fn bind(mask: &'a SimdMask<T, A>, value: Self) -> Self::Expression {
        WhereExpression { mask, value }
    }
}

impl<'a, T: SimdElement, A: SimdAbi<T>> WhereTarget<'a> for &'a Simd<T, A> {
    type Mask = SimdMask<T, A>;
    type Expression = ConstWhereExpression<'a, SimdMask<T, A>, Simd<T, A>>;

    #[inline]
    fn bind(mask: &'a SimdMask<T, A>, value: Self) -> Self::Expression {
        ConstWhereExpression { mask, value }
    }
}

// ============================================================================
// Vector Views
// ============================================================================

impl<T: SimdElement, A: SimdAbi<T>> ConstWhereExpression<'_, SimdMask<T, A>, Simd<T, A>> {
    /// Number of selected lanes.
    #[inline]
    pub fn count(&self) -> usize {
        self.mask.count_true()
    }

    /// Store the selected lanes into `dst`; other elements of `dst` are left
    /// untouched.
    ///
    /// # Panics
    ///
    /// Panics if a selected lane index is out of bounds for `dst`.
    #[inline]
    pub fn copy_to(&self, dst: &mut [T]) {
        let selected = self.mask.to_array();
        let lanes = self.value.to_array();

        for (i, (&keep, &lane)) in selected.as_ref().iter().zip(lanes.as_ref()).enumerate() {
            if keep {
                dst[i] = lane;
            }
        }
    }

    /// Fold the selected lanes into `identity` with `op`, in lane order.
    #[inline]
    pub fn reduce(&self, identity: T, op: impl Fn(T, T) -> T) -> T {
        let selected = self.mask.to_array();
        let lanes = self.value.to_array();

        selected
            .as_ref()
            .iter()
            .zip(lanes.as_ref())
            .filter(|&(&keep, _)| keep)
            .fold(identity, |acc, (_, &lane)| op(acc, lane))
    }

    /// Sum of the selected lanes (zero when none is selected).
    #[inline]
    pub fn reduce_sum(&self) -> T {
        self.reduce(T::default(), |acc, lane| acc + lane)
    }

    /// Smallest selected lane, or `None` when no lane is selected.
    #[inline]
    pub fn reduce_min(&self) -> Option<T> {
        self.reduce_selected(|acc, lane| if lane < acc { lane } else { acc })
    }

    /// Largest selected lane, or `None` when no lane is selected.
    #[inline]
    pub fn reduce_max(&self) -> Option<T> {
        self.reduce_selected(|acc, lane| if lane > acc { lane } else { acc })
    }

    /// Fold the selected lanes without an identity.
    fn reduce_selected(&self, op: impl Fn(T, T) -> T) -> Option<T> {
        let selected = self.mask.to_array();
        let lanes = self.value.to_array();

        selected
            .as_ref()
            .iter()
            .zip(lanes.as_ref())
            .filter(|&(&keep, _)| keep)
            .map(|(_, &lane)| lane)
            .reduce(op)
    }
}

impl<T: SimdElement, A: SimdAbi<T>> WhereExpression<'_, SimdMask<T, A>, Simd<T, A>> {
    /// Write `source` into the selected lanes.
    ///
    /// Accepts a vector or a scalar, which is broadcast first.
    #[inline]
    pub fn assign(&mut self, source: impl Into<Simd<T, A>>) {
        *self.value = Simd::select(*self.mask, source.into(), *self.value);
    }

    /// Replace the selected lanes with `f(value)`.
    #[inline]
    pub fn map(&mut self, f: impl FnOnce(Simd<T, A>) -> Simd<T, A>) {
        let mapped = f(*self.value);
        self.assign(mapped);
    }

    /// Selected lanes `+= rhs`.
    #[inline]
    pub fn add_assign(&mut self, rhs: impl Into<Simd<T, A>>) {
        let rhs = rhs.into();
        self.map(|value| Add::add(value, rhs));
    }

    /// Selected lanes `-= rhs`.
    #[inline]
    pub fn sub_assign(&mut self, rhs: impl Into<Simd<T, A>>) {
        let rhs = rhs.into();
        self.map(|value| Sub::sub(value, rhs));
    }

    /// Selected lanes `*= rhs`.
    #[inline]
    pub fn mul_assign(&mut self, rhs: impl Into<Simd<T, A>>) {
        let rhs = rhs.into();
        self.map(|value| Mul::mul(value, rhs));
    }

    /// Selected lanes `/= rhs`.
    ///
    /// The division is evaluated on every lane before blending, so integer
    /// lanes panic on a zero divisor even where unselected.
    #[inline]
    pub fn div_assign(&mut self, rhs: impl Into<Simd<T, A>>) {
        let rhs = rhs.into();
        self.map(|value| Div::div(value, rhs));
    }

    /// Masked load: selected lane `i` becomes `src[i]`; unselected lanes are
    /// neither read from `src` nor changed.
    ///
    /// # Panics
    ///
    /// Panics if a selected lane index is out of bounds for `src`.
    #[inline]
    pub fn copy_from(&mut self, src: &[T]) {
        let selected = self.mask.to_array();
        let mut lanes = self.value.to_array();

        for (i, (&keep, lane)) in selected.as_ref().iter().zip(lanes.as_mut()).enumerate() {
            if keep {
                *lane = src[i];
            }
        }

        *self.value = Simd::from_array(lanes);
    }
}

// ============================================================================
// Scalar Views
// ============================================================================

macro_rules! impl_scalar_where {
    ($($t:ty),* $(,)?) => {
        $(
            impl<'a> WhereTarget<'a> for &'a mut $t {
                type Mask = bool;
                type Expression = WhereExpression<'a, bool, $t>;

                #[inline]
                fn bind(mask: &'a bool, value: Self) -> Self::Expression {
                    WhereExpression { mask, value }
                }
            }

            impl<'a> WhereTarget<'a> for &'a $t {
                type Mask = bool;
                type Expression = ConstWhereExpression<'a, bool, $t>;

                #[inline]
                fn bind(mask: &'a bool, value: Self) -> Self::Expression {
                    ConstWhereExpression { mask, value }
                }
            }

            impl WhereExpression<'_, bool, $t> {
                /// Write `source` if the condition holds.
                #[inline]
                pub fn assign(&mut self, source: $t) {
                    if *self.mask {
                        *self.value = source;
                    }
                }
            }
        )*
    };
}

impl_scalar_where!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
