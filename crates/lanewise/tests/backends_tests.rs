#![cfg(feature = "dev")]
//! Tests for the execution-target backends.
//!
//! These tests drive each backend through the `SimdAbi` contract directly and
//! check it against the `Fixed<N>` reference.
//!
//! ## Test Organization
//!
//! 1. **Contract Primitives** - splat, load, store, arithmetic
//! 2. **Provided Defaults** - comparisons, mask logic, select
//! 3. **Cross-Backend Agreement** - identical results across tags

use lanewise::internals::backends::fixed::Fixed;
use lanewise::internals::backends::packed::{Wide128, Wide256};
use lanewise::internals::backends::scalar::Scalar;
use lanewise::internals::primitives::abi::SimdAbi;
use lanewise::internals::primitives::lanes::LaneArray;
use lanewise::internals::types::mask::SimdMask;
use lanewise::internals::types::simd::Simd;

// ============================================================================
// Contract Primitive Tests
// ============================================================================

/// Test lane counts for every (element, tag) pair.
#[test]
fn test_lane_counts() {
    assert_eq!(<Scalar as SimdAbi<u16>>::LANES, 1);
    assert_eq!(<Fixed<5> as SimdAbi<i8>>::LANES, 5);
    assert_eq!(<Wide128 as SimdAbi<f32>>::LANES, 4);
    assert_eq!(<Wide128 as SimdAbi<f64>>::LANES, 2);
    assert_eq!(<Wide256 as SimdAbi<f32>>::LANES, 8);
    assert_eq!(<Wide256 as SimdAbi<f64>>::LANES, 4);
}

/// Test the smallest legal array tag.
///
/// `Fixed<0>` is rejected at compile time (see the `Fixed` docs); one lane is
/// the minimum, and kernels and reductions must work there.
#[test]
fn test_single_lane_fixed() {
    let input = [3.0_f32, -1.0, 2.0];
    let mut output = [0.0_f32; 3];
    let mut calls = 0;

    lanewise::internals::kernels::slice::map_slice::<f32, Fixed<1>, _>(
        &input,
        &mut output,
        |v| {
            calls += 1;
            v * 2.0_f32
        },
    )
    .unwrap();

    assert_eq!(output, [6.0, -2.0, 4.0]);
    assert_eq!(calls, 3);

    let v = Simd::<f32, Fixed<1>>::default();
    assert_eq!(v.reduce_min(), 0.0);
    assert_eq!(v.reduce_max(), 0.0);
}

/// Test load and store through the contract.
#[test]
fn test_load_store_roundtrip() {
    let src = [1.0_f32, 2.0, 3.0, 4.0];
    let mut dst = [0.0_f32; 4];

    let reg = <Wide128 as SimdAbi<f32>>::load(&src);
    <Wide128 as SimdAbi<f32>>::store(reg, &mut dst);

    assert_eq!(dst, src);
    assert_eq!(<Wide128 as SimdAbi<f32>>::to_lanes(reg), src);
}

/// Test the arithmetic primitives of the array backend.
#[test]
fn test_fixed_arithmetic_primitives() {
    type A = Fixed<3>;
    let a = <A as SimdAbi<i16>>::load(&[6, -4, 9]);
    let b = <A as SimdAbi<i16>>::splat(3);

    assert_eq!(<A as SimdAbi<i16>>::add(a, b), [9, -1, 12]);
    assert_eq!(<A as SimdAbi<i16>>::sub(a, b), [3, -7, 6]);
    assert_eq!(<A as SimdAbi<i16>>::mul(a, b), [18, -12, 27]);
    assert_eq!(<A as SimdAbi<i16>>::div(a, b), [2, -1, 3]);
}

/// Test the lane array helpers.
#[test]
fn test_lane_array() {
    let lanes = <[u32; 3] as LaneArray<u32>>::splat(7);

    assert_eq!(lanes, [7, 7, 7]);
    assert_eq!(LaneArray::<u32>::len(&lanes), 3);
    assert!(!LaneArray::<u32>::is_empty(&lanes));
}

// ============================================================================
// Provided Default Tests
// ============================================================================

/// Test the provided comparisons on a register backend.
#[test]
fn test_register_comparisons() {
    let a = Simd::<f64, Wide256>::from_array([1.0, 2.0, 3.0, f64::NAN]);
    let b = Simd::<f64, Wide256>::splat(2.0);

    assert_eq!(a.simd_lt(b).to_array(), [true, false, false, false]);
    assert_eq!(a.simd_le(b).to_array(), [true, true, false, false]);
    assert_eq!(a.simd_eq(b).to_array(), [false, true, false, false]);
}

/// Test the provided mask logic on a register backend.
#[test]
fn test_register_mask_logic() {
    type M = SimdMask<f32, Wide128>;
    let a = M::from_array([true, true, false, false]);
    let b = M::from_array([true, false, true, false]);

    assert_eq!((a & b).to_array(), [true, false, false, false]);
    assert_eq!((a | b).to_array(), [true, true, true, false]);
    assert_eq!((!b).to_array(), [false, true, false, true]);
}

/// Test the register blend with every lane pattern.
#[test]
fn test_register_select_all_patterns() {
    let t = Simd::<f32, Wide128>::from_array([1.0, 2.0, 3.0, 4.0]);
    let f = Simd::<f32, Wide128>::from_array([-1.0, -2.0, -3.0, -4.0]);

    for bits in 0..16_u32 {
        let mask = SimdMask::<f32, Wide128>::from_fn(|i| bits & (1 << i) != 0);
        let out = Simd::select(mask, t, f).to_array();

        for i in 0..4 {
            let want = if mask.test(i) { t.lane(i) } else { f.lane(i) };
            assert_eq!(out[i], want, "pattern {bits:#06b}, lane {i}");
        }
    }
}

/// Test that the scalar backend's overrides behave like scalar code.
#[test]
fn test_scalar_backend_overrides() {
    type S = Simd<i32, Scalar>;
    let a = S::splat(3);
    let b = S::splat(5);

    assert!(a.simd_lt(b).test(0));
    assert!(!a.simd_eq(b).test(0));
    assert_eq!(S::select(a.simd_gt(b), a, b), b);
    assert_eq!((a * b).storage(), 15);
}

// ============================================================================
// Cross-Backend Agreement Tests
// ============================================================================

/// Test that a mixed expression is identical on Fixed<4> and Wide256 (f64).
#[test]
fn test_fixed_and_wide_agree() {
    let xs = [0.5_f64, -1.25, 3.0, 7.5];

    let fixed = Simd::<f64, Fixed<4>>::from_array(xs);
    let wide = Simd::<f64, Wide256>::from_array(xs);

    let f = (fixed * 2.0_f64 - 1.0_f64).max(Simd::splat(0.0)) / 4.0_f64;
    let w = (wide * 2.0_f64 - 1.0_f64).max(Simd::splat(0.0)) / 4.0_f64;

    assert_eq!(f.to_array(), w.to_array());
    assert_eq!(f.reduce_sum(), w.reduce_sum());
}
