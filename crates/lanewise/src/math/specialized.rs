//! Backend opt-ins for `SimdMath`.
//!
//! ## Purpose
//!
//! `Scalar` and `Fixed<N>` opt in with empty implementations and run every
//! function through the lane-array fallback. `Wide128` and `Wide256` replace
//! `exp`, `sin`, `cos` and `sqrt` with the register kernels of the `wide`
//! crate and keep the fallback for everything else.
//!
//! ## Design notes
//!
//! * **Kernel ranges**: The polynomial kernels are only used for lanes inside
//!   the range below. Every other lane (including NaN and infinities) is
//!   blended in from the fallback, so it matches the scalar reference bit for
//!   bit.
//!
//!   | Function     | `f32` lanes        | `f64` lanes          |
//!   |--------------|--------------------|----------------------|
//!   | `exp`        | `[-80, 80]`        | `[-700, 700]`        |
//!   | `sin`, `cos` | `[-1024, 1024]`    | `[-65536, 65536]`    |
//!
//!   Inside those ranges results agree with the scalar reference to a
//!   relative error of `1e-5` (`f32`) and `1e-9` (`f64`).
//! * **`sqrt` is unrestricted**: The register square root is correctly
//!   rounded and handles NaN, infinities and negative inputs like the scalar
//!   one.
//! * **`pow` stays on the fallback**: The register form disagrees with the
//!   scalar reference for negative bases with integral exponents.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::backends::fixed::Fixed;
use crate::backends::packed::{Wide128, Wide256};
use crate::backends::scalar::Scalar;
use crate::math::fallback;
use crate::math::transcendental::SimdMath;
use crate::primitives::abi::SimdAbi;
use crate::primitives::element::SimdElement;
use crate::types::simd::Simd;

// ============================================================================
// Fallback-Only Tags
// ============================================================================

impl<T: SimdElement + Float> SimdMath<T> for Scalar {}

impl<T: SimdElement + Float, const N: usize> SimdMath<T> for Fixed<N> {}

// ============================================================================
// Register Kernels
// ============================================================================

/// Use `kernel` on lanes of `a` inside `[lo, hi]` and `reference` elsewhere.
///
/// NaN lanes compare false against both bounds and always take `reference`.
#[inline]
fn within_range<T, A>(
    a: Simd<T, A>,
    lo: T,
    hi: T,
    kernel: Simd<T, A>,
    reference: impl FnOnce(Simd<T, A>) -> Simd<T, A>,
) -> Simd<T, A>
where
    T: SimdElement + Float,
    A: SimdAbi<T>,
{
    let in_range = a.simd_ge(Simd::splat(lo)) & a.simd_le(Simd::splat(hi));
    if in_range.all() {
        return kernel;
    }
    Simd::select(in_range, kernel, reference(a))
}

macro_rules! impl_packed_math {
    ($abi:ty, $elem:ty, exp: $exp_limit:expr, trig: $trig_limit:expr) => {
        impl SimdMath<$elem> for $abi {
            #[inline]
            fn exp(a: Simd<$elem, Self>) -> Simd<$elem, Self> {
                let kernel = Simd::from_storage(a.storage().exp());
                within_range(a, -$exp_limit, $exp_limit, kernel, fallback::exp)
            }

            #[inline]
            fn sin(a: Simd<$elem, Self>) -> Simd<$elem, Self> {
                let kernel = Simd::from_storage(a.storage().sin());
                within_range(a, -$trig_limit, $trig_limit, kernel, fallback::sin)
            }

            #[inline]
            fn cos(a: Simd<$elem, Self>) -> Simd<$elem, Self> {
                let kernel = Simd::from_storage(a.storage().cos());
                within_range(a, -$trig_limit, $trig_limit, kernel, fallback::cos)
            }

            #[inline]
            fn sqrt(a: Simd<$elem, Self>) -> Simd<$elem, Self> {
                Simd::from_storage(a.storage().sqrt())
            }
        }
    };
}

impl_packed_math!(Wide128, f32, exp: 80.0_f32, trig: 1024.0_f32);
impl_packed_math!(Wide128, f64, exp: 700.0_f64, trig: 65536.0_f64);
impl_packed_math!(Wide256, f32, exp: 80.0_f32, trig: 1024.0_f32);
impl_packed_math!(Wide256, f64, exp: 700.0_f64, trig: 65536.0_f64);
