//! Lane-array fallbacks for elementwise math.
//!
//! ## Purpose
//!
//! This module gives every (element, tag) pair a working definition of every
//! elementwise function, regardless of what the backend specializes. Each
//! function follows the same algorithm:
//!
//! 1. Allocate a `[T; LANES]` scratch array per vector argument (on the stack).
//! 2. Copy each argument's lanes into its scratch array.
//! 3. Apply the scalar reference function (`num_traits::Float`) lane by lane,
//!    writing into the first argument's scratch array.
//! 4. Load that array back into the first argument and return it.
//!
//! ## Design notes
//!
//! * **First argument is the output buffer**: Binary functions (`pow`,
//!   `atan2`, `hypot`, `copysign`) all write into the first argument's
//!   scratch. The argument is taken by value, so this is local scratch and
//!   never the caller's object.
//! * **Always available**: These functions only require `SimdAbi`, so they
//!   work for tags that never opted into `SimdMath`.
//!
//! ## Invariants
//!
//! * Result lane `i` is bit-identical to the scalar function applied to input
//!   lane(s) `i`.
//! * A domain error (NaN) in one lane never affects another lane.
//!
//! ## Non-goals
//!
//! * Performance; backends override through `SimdMath`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::abi::SimdAbi;
use crate::primitives::element::SimdElement;
use crate::primitives::lanes::LaneArray;
use crate::types::simd::Simd;

// ============================================================================
// Lane Drivers
// ============================================================================

/// Apply `f` to every lane of `a` through a scalar scratch array.
#[inline]
pub fn map_lanes<T, A>(mut a: Simd<T, A>, f: impl Fn(T) -> T) -> Simd<T, A>
where
    T: SimdElement,
    A: SimdAbi<T>,
{
    let mut a_lanes = A::Array::splat(T::default());
    a.copy_to(a_lanes.as_mut());

    for lane in a_lanes.as_mut() {
        *lane = f(*lane);
    }

    a.copy_from(a_lanes.as_ref());
    a
}

/// Apply `f` to every lane pair of `a` and `b`, writing into `a`'s scratch.
#[inline]
pub fn zip_lanes<T, A>(mut a: Simd<T, A>, b: Simd<T, A>, f: impl Fn(T, T) -> T) -> Simd<T, A>
where
    T: SimdElement,
    A: SimdAbi<T>,
{
    let mut a_lanes = A::Array::splat(T::default());
    let mut b_lanes = A::Array::splat(T::default());
    a.copy_to(a_lanes.as_mut());
    b.copy_to(b_lanes.as_mut());

    for (lane, &other) in a_lanes.as_mut().iter_mut().zip(b_lanes.as_ref()) {
        *lane = f(*lane, other);
    }

    a.copy_from(a_lanes.as_ref());
    a
}

impl<T: SimdElement, A: SimdAbi<T>> Simd<T, A> {
    /// Apply a scalar function to every lane.
    #[inline]
    pub fn map_lanes(self, f: impl Fn(T) -> T) -> Self {
        map_lanes(self, f)
    }

    /// Apply a scalar function to every lane pair of `self` and `other`.
    #[inline]
    pub fn zip_lanes(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        zip_lanes(self, other, f)
    }
}

// ============================================================================
// Unary Functions
// ============================================================================

macro_rules! unary_fallback {
    ($($(#[$doc:meta])* $name:ident => $scalar:path;)*) => {
        $(
            $(#[$doc])*
            #[must_use]
            #[inline]
            pub fn $name<T, A>(a: Simd<T, A>) -> Simd<T, A>
            where
                T: SimdElement + Float,
                A: SimdAbi<T>,
            {
                map_lanes(a, $scalar)
            }
        )*
    };
}

unary_fallback! {
    /// Lanewise `e^a`.
    exp => Float::exp;
    /// Lanewise `2^a`.
    exp2 => Float::exp2;
    /// Lanewise natural logarithm.
    ln => Float::ln;
    /// Lanewise base-2 logarithm.
    log2 => Float::log2;
    /// Lanewise base-10 logarithm.
    log10 => Float::log10;
    /// Lanewise square root.
    sqrt => Float::sqrt;
    /// Lanewise cube root.
    cbrt => Float::cbrt;
    /// Lanewise sine (radians).
    sin => Float::sin;
    /// Lanewise cosine (radians).
    cos => Float::cos;
    /// Lanewise tangent (radians).
    tan => Float::tan;
    /// Lanewise arcsine.
    asin => Float::asin;
    /// Lanewise arccosine.
    acos => Float::acos;
    /// Lanewise arctangent.
    atan => Float::atan;
    /// Lanewise hyperbolic sine.
    sinh => Float::sinh;
    /// Lanewise hyperbolic cosine.
    cosh => Float::cosh;
    /// Lanewise hyperbolic tangent.
    tanh => Float::tanh;
    /// Lanewise absolute value.
    abs => Float::abs;
    /// Lanewise floor.
    floor => Float::floor;
    /// Lanewise ceiling.
    ceil => Float::ceil;
    /// Lanewise round half away from zero.
    round => Float::round;
    /// Lanewise truncation toward zero.
    trunc => Float::trunc;
}

// ============================================================================
// Binary Functions
// ============================================================================

macro_rules! binary_fallback {
    ($($(#[$doc:meta])* $name:ident => $scalar:path;)*) => {
        $(
            $(#[$doc])*
            #[must_use]
            #[inline]
            pub fn $name<T, A>(a: Simd<T, A>, b: Simd<T, A>) -> Simd<T, A>
            where
                T: SimdElement + Float,
                A: SimdAbi<T>,
            {
                zip_lanes(a, b, $scalar)
            }
        )*
    };
}

binary_fallback! {
    /// Lanewise `a^b`.
    pow => Float::powf;
    /// Lanewise four-quadrant arctangent of `a / b`.
    atan2 => Float::atan2;
    /// Lanewise `sqrt(a^2 + b^2)` without intermediate overflow.
    hypot => Float::hypot;
    /// Lanewise magnitude of `a` with the sign of `b`.
    copysign => Float::copysign;
}
