//! Mixed scalar/vector operators.
//!
//! ## Purpose
//!
//! For every primitive arithmetic scalar `U` and every operator in
//! `{+, -, *, /}`, this module defines `U op Simd<T, A>`, `Simd<T, A> op U`
//! and `Simd<T, A> op= U`.
//!
//! ## Design notes
//!
//! * **Broadcast then delegate**: The scalar is converted with `as` semantics
//!   (`U as T`), broadcast with `Simd::splat`, and the vector/vector operator
//!   does the work. No operator has its own lane loop.
//! * **Closed scalar set**: Impls exist only for the primitive integer and
//!   float types, so a non-arithmetic operand has no candidate impl at all.
//!
//! ## Invariants
//!
//! * `s op v == Simd::splat(s as T) op v` and `v op s == v op Simd::splat(s as T)`.
//! * `v op= s` is exactly `v = v op s`.
//!
//! ## Non-goals
//!
//! * Implicit widening between vectors of different element types.

// External dependencies
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use num_traits::AsPrimitive;

// Internal dependencies
use crate::primitives::abi::SimdAbi;
use crate::primitives::element::SimdElement;
use crate::types::simd::Simd;

// ============================================================================
// Operator Generation
// ============================================================================

macro_rules! impl_mixed_op {
    ($scalar:ty, $op:ident, $method:ident, $assign:ident, $assign_method:ident) => {
        impl<T, A> $op<$scalar> for Simd<T, A>
        where
            T: SimdElement,
            A: SimdAbi<T>,
            $scalar: AsPrimitive<T>,
        {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: $scalar) -> Self {
                $op::$method(self, Self::broadcast(rhs))
            }
        }

        impl<T, A> $op<Simd<T, A>> for $scalar
        where
            T: SimdElement,
            A: SimdAbi<T>,
            $scalar: AsPrimitive<T>,
        {
            type Output = Simd<T, A>;

            #[inline]
            fn $method(self, rhs: Simd<T, A>) -> Simd<T, A> {
                $op::$method(Simd::<T, A>::broadcast(self), rhs)
            }
        }

        impl<T, A> $assign<$scalar> for Simd<T, A>
        where
            T: SimdElement,
            A: SimdAbi<T>,
            $scalar: AsPrimitive<T>,
        {
            #[inline]
            fn $assign_method(&mut self, rhs: $scalar) {
                *self = $op::$method(*self, rhs);
            }
        }
    };
}

macro_rules! impl_mixed {
    ($($scalar:ty),* $(,)?) => {
        $(
            impl_mixed_op!($scalar, Add, add, AddAssign, add_assign);
            impl_mixed_op!($scalar, Sub, sub, SubAssign, sub_assign);
            impl_mixed_op!($scalar, Mul, mul, MulAssign, mul_assign);
            impl_mixed_op!($scalar, Div, div, DivAssign, div_assign);
        )*
    };
}

impl_mixed!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
