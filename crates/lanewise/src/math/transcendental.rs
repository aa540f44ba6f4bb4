//! Overridable elementwise math.
//!
//! ## Purpose
//!
//! This module defines [`SimdMath`], the per-tag table of elementwise
//! functions, together with the free functions and `Simd` methods that
//! dispatch through it. Every method defaults to the lane-array fallback, so
//! a tag opts in with an empty `impl` and overrides only what it can do
//! faster.
//!
//! ## Design notes
//!
//! * **Static dispatch**: Resolution happens on the tag type at compile time;
//!   a backend override is always preferred over the fallback.
//! * **Float lanes only**: Every entry point requires `T: num_traits::Float`.
//!
//! ## Key concepts
//!
//! * **Unary functions**: `exp`, `exp2`, `ln`, `log2`, `log10`, `sqrt`,
//!   `cbrt`, `sin`, `cos`, `tan`, `asin`, `acos`, `atan`, `sinh`, `cosh`,
//!   `tanh`, `abs`, `floor`, `ceil`, `round`, `trunc`.
//! * **Binary functions**: `pow`, `atan2`, `hypot`, `copysign`; the first
//!   argument's scratch receives the result.
//!
//! ## Invariants
//!
//! * Fallback results are bit-identical to the scalar function per lane.
//! * Overrides are accurate to within the backend's documented tolerance.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::fallback;
use crate::primitives::abi::SimdAbi;
use crate::primitives::element::SimdElement;
use crate::types::simd::Simd;

macro_rules! simd_math {
    (
        unary { $($unary:ident => $udoc:literal,)* }
        binary { $($binary:ident => $bdoc:literal,)* }
    ) => {
        /// Elementwise math for an execution-target tag.
        ///
        /// Every method defaults to the lane-array fallback in
        /// [`math::fallback`](crate::fallback). Implement this trait with an
        /// empty body to opt a tag in, and override individual methods with
        /// backend kernels.
        pub trait SimdMath<T: SimdElement + Float>: SimdAbi<T> {
            $(
                #[doc = $udoc]
                #[inline]
                fn $unary(a: Simd<T, Self>) -> Simd<T, Self> {
                    fallback::$unary(a)
                }
            )*

            $(
                #[doc = $bdoc]
                #[inline]
                fn $binary(a: Simd<T, Self>, b: Simd<T, Self>) -> Simd<T, Self> {
                    fallback::$binary(a, b)
                }
            )*
        }

        $(
            #[doc = $udoc]
            #[must_use]
            #[inline]
            pub fn $unary<T, A>(a: Simd<T, A>) -> Simd<T, A>
            where
                T: SimdElement + Float,
                A: SimdMath<T>,
            {
                A::$unary(a)
            }
        )*

        $(
            #[doc = $bdoc]
            #[must_use]
            #[inline]
            pub fn $binary<T, A>(a: Simd<T, A>, b: Simd<T, A>) -> Simd<T, A>
            where
                T: SimdElement + Float,
                A: SimdMath<T>,
            {
                A::$binary(a, b)
            }
        )*

        impl<T: SimdElement + Float, A: SimdMath<T>> Simd<T, A> {
            $(
                #[doc = $udoc]
                #[must_use]
                #[inline]
                pub fn $unary(self) -> Self {
                    A::$unary(self)
                }
            )*

            $(
                #[doc = $bdoc]
                #[must_use]
                #[inline]
                pub fn $binary(self, other: Self) -> Self {
                    A::$binary(self, other)
                }
            )*
        }
    };
}

simd_math! {
    unary {
        exp => "Lanewise `e^a`.",
        exp2 => "Lanewise `2^a`.",
        ln => "Lanewise natural logarithm.",
        log2 => "Lanewise base-2 logarithm.",
        log10 => "Lanewise base-10 logarithm.",
        sqrt => "Lanewise square root.",
        cbrt => "Lanewise cube root.",
        sin => "Lanewise sine (radians).",
        cos => "Lanewise cosine (radians).",
        tan => "Lanewise tangent (radians).",
        asin => "Lanewise arcsine.",
        acos => "Lanewise arccosine.",
        atan => "Lanewise arctangent.",
        sinh => "Lanewise hyperbolic sine.",
        cosh => "Lanewise hyperbolic cosine.",
        tanh => "Lanewise hyperbolic tangent.",
        abs => "Lanewise absolute value.",
        floor => "Lanewise floor.",
        ceil => "Lanewise ceiling.",
        round => "Lanewise round half away from zero.",
        trunc => "Lanewise truncation toward zero.",
    }
    binary {
        pow => "Lanewise `a^b`.",
        atan2 => "Lanewise four-quadrant arctangent of `a / b`.",
        hypot => "Lanewise `sqrt(a^2 + b^2)` without intermediate overflow.",
        copysign => "Lanewise magnitude of `a` with the sign of `b`.",
    }
}
