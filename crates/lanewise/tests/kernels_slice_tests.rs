#![cfg(feature = "dev")]
//! Tests for the slice kernels.
//!
//! These tests verify:
//! - Full chunks and masked tails cover every element exactly once
//! - Tail lanes are padded with the last real element
//! - Mismatched buffer lengths are rejected before any write
//!
//! ## Test Organization
//!
//! 1. **Map** - map_slice on exact multiples, tails and empty input
//! 2. **Zip** - zip_slice with padding that keeps division safe
//! 3. **Validation** - LengthMismatch errors

use approx::assert_relative_eq;

use lanewise::internals::backends::fixed::Fixed;
use lanewise::internals::backends::packed::Wide256;
use lanewise::internals::backends::scalar::Scalar;
use lanewise::internals::kernels::slice::{map_slice, zip_slice};
use lanewise::internals::primitives::errors::LaneError;
use lanewise::internals::types::simd::Simd;

// ============================================================================
// Map Tests
// ============================================================================

/// Test a buffer that is an exact multiple of the lane count.
#[test]
fn test_map_exact_multiple() {
    let input: Vec<f32> = (0..8).map(|i| i as f32).collect();
    let mut output = vec![0.0_f32; 8];

    map_slice::<f32, Fixed<4>, _>(&input, &mut output, |v| v * 2.0_f32).unwrap();

    let expected: Vec<f32> = input.iter().map(|x| x * 2.0).collect();
    assert_eq!(output, expected);
}

/// Test a buffer with a partial final chunk.
#[test]
fn test_map_with_tail() {
    let input = [1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    let mut output = [0.0_f64; 7];

    map_slice::<f64, Fixed<4>, _>(&input, &mut output, |v| v + 0.5_f64).unwrap();

    assert_eq!(output, [1.5, 2.5, 3.5, 4.5, 5.5, 6.5, 7.5]);
}

/// Test that tail lanes are padded with the last real element.
#[test]
fn test_map_tail_padding() {
    let input = [1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0];
    let mut output = [0.0_f32; 6];
    let mut seen = Vec::new();

    map_slice::<f32, Fixed<4>, _>(&input, &mut output, |v| {
        seen.push(v.to_array());
        v
    })
    .unwrap();

    assert_eq!(seen, vec![[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 6.0, 6.0]]);
    assert_eq!(output, input);
}

/// Test an empty buffer.
///
/// Verifies that the function is never called.
#[test]
fn test_map_empty() {
    let mut calls = 0;

    let result = map_slice::<f32, Fixed<4>, _>(&[], &mut [], |v| {
        calls += 1;
        v
    });

    assert_eq!(result, Ok(()));
    assert_eq!(calls, 0);
}

/// Test a buffer shorter than one vector.
#[test]
fn test_map_shorter_than_one_vector() {
    let input = [3.0_f32, 4.0];
    let mut output = [0.0_f32; 2];

    map_slice::<f32, Wide256, _>(&input, &mut output, |v| v * v).unwrap();

    assert_eq!(output, [9.0, 16.0]);
}

/// Test a transcendental function over a long buffer on a register tag.
#[test]
fn test_map_exp_register_tag() {
    let input: Vec<f32> = (0..37).map(|i| -2.0 + i as f32 * 0.1).collect();
    let mut output = vec![0.0_f32; input.len()];

    map_slice::<f32, Wide256, _>(&input, &mut output, |v| v.exp()).unwrap();

    for (got, x) in output.iter().zip(&input) {
        assert_relative_eq!(*got, x.exp(), max_relative = 1e-5);
    }
}

/// Test the single-lane tag, which never takes the tail path.
#[test]
fn test_map_scalar_tag() {
    let input = [1_i32, -2, 3];
    let mut output = [0_i32; 3];

    map_slice::<i32, Scalar, _>(&input, &mut output, |v| v * 10_i32).unwrap();

    assert_eq!(output, [10, -20, 30]);
}

// ============================================================================
// Zip Tests
// ============================================================================

/// Test pairwise combination with a tail.
#[test]
fn test_zip_with_tail() {
    let a = [1.0_f32, 2.0, 3.0, 4.0, 5.0];
    let b = [10.0_f32, 20.0, 30.0, 40.0, 50.0];
    let mut output = [0.0_f32; 5];

    zip_slice::<f32, Fixed<4>, _>(&a, &b, &mut output, |x, y| x + y).unwrap();

    assert_eq!(output, [11.0, 22.0, 33.0, 44.0, 55.0]);
}

/// Test that padded tail lanes never divide by zero.
///
/// Integer division panics on a zero lane, so the padding must reuse the last
/// real divisor rather than the default value.
#[test]
fn test_zip_padding_keeps_division_safe() {
    let a = [10_i32, 20, 30, 40, 50, 60];
    let b = [2_i32, 4, 5, 8, 10, 3];
    let mut output = [0_i32; 6];

    zip_slice::<i32, Fixed<4>, _>(&a, &b, &mut output, |x, y| x / y).unwrap();

    assert_eq!(output, [5, 5, 6, 5, 5, 20]);
}

/// Test pow over slices.
#[test]
fn test_zip_pow() {
    let base = [1.0_f64, 2.0, 3.0, 4.0, 5.0];
    let exponent = [2.0_f64; 5];
    let mut output = [0.0_f64; 5];

    zip_slice::<f64, Fixed<2>, _>(&base, &exponent, &mut output, |x, y| x.pow(y)).unwrap();

    assert_eq!(output, [1.0, 4.0, 9.0, 16.0, 25.0]);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test that map_slice rejects an output of a different length.
#[test]
fn test_map_length_mismatch() {
    let input = [1.0_f32; 5];
    let mut output = [-1.0_f32; 4];

    let result = map_slice::<f32, Fixed<4>, _>(&input, &mut output, |v| v);

    assert_eq!(result, Err(LaneError::LengthMismatch { expected: 5, got: 4 }));
    assert_eq!(output, [-1.0; 4], "Nothing is written on error");
}

/// Test that zip_slice rejects mismatched inputs and outputs.
#[test]
fn test_zip_length_mismatch() {
    let a = [1.0_f32; 4];
    let b = [1.0_f32; 3];
    let mut output = [0.0_f32; 4];
    let mut short = [0.0_f32; 2];

    assert_eq!(
        zip_slice::<f32, Fixed<4>, _>(&a, &b, &mut output, |x, y| x + y),
        Err(LaneError::LengthMismatch { expected: 4, got: 3 })
    );
    assert_eq!(
        zip_slice::<f32, Fixed<4>, _>(&a, &a, &mut short, |x, y| x + y),
        Err(LaneError::LengthMismatch { expected: 4, got: 2 })
    );
}

/// Test calling a kernel from code generic over the tag.
#[test]
fn test_map_generic_caller() {
    fn halve<A>(input: &[f32], output: &mut [f32]) -> Result<(), LaneError>
    where
        A: lanewise::internals::primitives::abi::SimdAbi<f32>,
    {
        map_slice::<f32, A, _>(input, output, |v: Simd<f32, A>| v / 2.0_f32)
    }

    let input = [2.0_f32, 4.0, 6.0];
    let mut out_fixed = [0.0_f32; 3];
    let mut out_wide = [0.0_f32; 3];

    halve::<Fixed<2>>(&input, &mut out_fixed).unwrap();
    halve::<Wide256>(&input, &mut out_wide).unwrap();

    assert_eq!(out_fixed, [1.0, 2.0, 3.0]);
    assert_eq!(out_wide, out_fixed);
}
