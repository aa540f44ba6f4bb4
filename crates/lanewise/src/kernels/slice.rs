//! Chunked map and zip over slices.
//!
//! ## Purpose
//!
//! `map_slice` and `zip_slice` apply a vector function to whole buffers:
//! full chunks of `LANES` elements go through element-aligned loads and
//! stores, and the final partial chunk goes through masked ones.
//!
//! ## Design notes
//!
//! * **Tail padding**: Unused tail lanes are filled with the last real
//!   element of each input before the function runs, so lanewise functions
//!   never see values the caller did not provide.
//! * **Output untouched past the tail**: Only the first `len` elements of the
//!   output are written, and unused tail lanes are never stored.
//!
//! ## Invariants
//!
//! * All buffers have the same length, otherwise nothing is written.
//! * Output element `i` depends only on input element(s) `i` when `f` is
//!   lanewise.

// Internal dependencies
use crate::masking::where_expr::where_;
use crate::primitives::abi::SimdAbi;
use crate::primitives::element::SimdElement;
use crate::primitives::errors::LaneError;
use crate::types::mask::SimdMask;
use crate::types::simd::Simd;

// ============================================================================
// Kernels
// ============================================================================

/// Write `f` applied to every chunk of `input` into `output`.
///
/// ```
/// use lanewise::prelude::*;
///
/// let input = [1.0_f32, 2.0, 3.0, 4.0, 5.0];
/// let mut output = [0.0_f32; 5];
///
/// map_slice::<f32, Fixed<4>, _>(&input, &mut output, |v| v * 2.0_f32).unwrap();
/// assert_eq!(output, [2.0, 4.0, 6.0, 8.0, 10.0]);
/// ```
pub fn map_slice<T, A, F>(input: &[T], output: &mut [T], mut f: F) -> Result<(), LaneError>
where
    T: SimdElement,
    A: SimdAbi<T>,
    F: FnMut(Simd<T, A>) -> Simd<T, A>,
{
    check_same_len(input.len(), output.len())?;

    let n = input.len();
    let mut i = 0;

    while i + A::LANES <= n {
        let chunk = Simd::<T, A>::from_slice(&input[i..]);
        f(chunk).copy_to(&mut output[i..]);
        i += A::LANES;
    }

    if i < n {
        let mask = SimdMask::<T, A>::first_n(n - i);

        let mut chunk = Simd::<T, A>::splat(input[n - 1]);
        where_(&mask, &mut chunk).copy_from(&input[i..]);

        let result = f(chunk);
        where_(&mask, &result).copy_to(&mut output[i..]);
    }

    Ok(())
}

/// Write `f` applied to every pair of chunks of `a` and `b` into `output`.
pub fn zip_slice<T, A, F>(a: &[T], b: &[T], output: &mut [T], mut f: F) -> Result<(), LaneError>
where
    T: SimdElement,
    A: SimdAbi<T>,
    F: FnMut(Simd<T, A>, Simd<T, A>) -> Simd<T, A>,
{
    check_same_len(a.len(), b.len())?;
    check_same_len(a.len(), output.len())?;

    let n = a.len();
    let mut i = 0;

    while i + A::LANES <= n {
        let lhs = Simd::<T, A>::from_slice(&a[i..]);
        let rhs = Simd::<T, A>::from_slice(&b[i..]);
        f(lhs, rhs).copy_to(&mut output[i..]);
        i += A::LANES;
    }

    if i < n {
        let mask = SimdMask::<T, A>::first_n(n - i);

        let mut lhs = Simd::<T, A>::splat(a[n - 1]);
        let mut rhs = Simd::<T, A>::splat(b[n - 1]);
        where_(&mask, &mut lhs).copy_from(&a[i..]);
        where_(&mask, &mut rhs).copy_from(&b[i..]);

        let result = f(lhs, rhs);
        where_(&mask, &result).copy_to(&mut output[i..]);
    }

    Ok(())
}

// ============================================================================
// Validation
// ============================================================================

#[inline]
fn check_same_len(expected: usize, got: usize) -> Result<(), LaneError> {
    if expected != got {
        return Err(LaneError::LengthMismatch { expected, got });
    }
    Ok(())
}
