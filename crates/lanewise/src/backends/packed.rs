//! Register-backed execution targets built on the `wide` crate.
//!
//! ## Purpose
//!
//! `Wide128` and `Wide256` map `f32` and `f64` lanes onto the portable SIMD
//! registers of the `wide` crate, which lowers to SSE/AVX, NEON or WASM
//! SIMD where the build target has them and to scalar code otherwise.
//!
//! ## Design notes
//!
//! * **Registers for values, arrays for masks**: Values live in `wide`
//!   registers; masks are `[bool; LANES]` and are widened to an all-ones /
//!   all-zeros register only when a blend needs them.
//! * **Native arithmetic and blend**: `+ - * /` and `select` use the register
//!   operations; comparisons and mask logic keep the contract's lane-array
//!   defaults.
//!
//! ## Key concepts
//!
//! | Tag       | `f32`              | `f64`              |
//! |-----------|--------------------|--------------------|
//! | `Wide128` | `f32x4` (4 lanes)  | `f64x2` (2 lanes)  |
//! | `Wide256` | `f32x8` (8 lanes)  | `f64x4` (4 lanes)  |
//!
//! ## Non-goals
//!
//! * Integer lanes (use `Fixed<N>`).

// External dependencies
use wide::{f32x4, f32x8, f64x2, f64x4};

// Internal dependencies
use crate::primitives::abi::SimdAbi;

// ============================================================================
// Tags
// ============================================================================

/// 128-bit registers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wide128;

/// 256-bit registers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wide256;

// ============================================================================
// Contract Implementations
// ============================================================================

macro_rules! impl_packed {
    ($abi:ty, $elem:ty, $bits:ty, $reg:ty, $lanes:literal) => {
        impl SimdAbi<$elem> for $abi {
            const LANES: usize = $lanes;

            type Storage = $reg;
            type MaskStorage = [bool; $lanes];
            type Array = [$elem; $lanes];
            type MaskArray = [bool; $lanes];

            #[inline]
            fn splat(value: $elem) -> $reg {
                <$reg>::splat(value)
            }

            #[inline]
            fn load(src: &[$elem]) -> $reg {
                let mut lanes = [0.0; $lanes];
                lanes.copy_from_slice(src);
                <$reg>::new(lanes)
            }

            #[inline]
            fn store(value: $reg, dst: &mut [$elem]) {
                dst.copy_from_slice(&value.to_array());
            }

            #[inline]
            fn add(a: $reg, b: $reg) -> $reg {
                a + b
            }

            #[inline]
            fn sub(a: $reg, b: $reg) -> $reg {
                a - b
            }

            #[inline]
            fn mul(a: $reg, b: $reg) -> $reg {
                a * b
            }

            #[inline]
            fn div(a: $reg, b: $reg) -> $reg {
                a / b
            }

            #[inline]
            fn mask_splat(value: bool) -> [bool; $lanes] {
                [value; $lanes]
            }

            #[inline]
            fn mask_load(src: &[bool]) -> [bool; $lanes] {
                let mut out = [false; $lanes];
                out.copy_from_slice(src);
                out
            }

            #[inline]
            fn mask_store(mask: [bool; $lanes], dst: &mut [bool]) {
                dst.copy_from_slice(&mask);
            }

            #[inline]
            fn select(mask: [bool; $lanes], if_true: $reg, if_false: $reg) -> $reg {
                // Blend reads whole-lane bit patterns: all ones keeps `if_true`.
                let bits = <$reg>::new(mask.map(|keep| {
                    if keep {
                        <$elem>::from_bits(<$bits>::MAX)
                    } else {
                        0.0
                    }
                }));
                bits.blend(if_true, if_false)
            }
        }
    };
}

impl_packed!(Wide128, f32, u32, f32x4, 4);
impl_packed!(Wide128, f64, u64, f64x2, 2);
impl_packed!(Wide256, f32, u32, f32x8, 8);
impl_packed!(Wide256, f64, u64, f64x4, 4);
