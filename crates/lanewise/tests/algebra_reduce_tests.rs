#![cfg(feature = "dev")]
//! Tests for mask reduction predicates.
//!
//! ## Test Organization
//!
//! 1. **Scalar Conditions** - all_of / any_of / none_of on bool
//! 2. **Masks** - the same predicates on SimdMask and references

use lanewise::internals::algebra::reduce::{MaskReduce, all_of, any_of, none_of};
use lanewise::internals::backends::fixed::Fixed;
use lanewise::internals::types::mask::SimdMask;
use lanewise::internals::types::simd::Simd;

type M4 = SimdMask<f64, Fixed<4>>;

// ============================================================================
// Scalar Condition Tests
// ============================================================================

/// Test that the predicates return a bool condition unchanged.
#[test]
fn test_bool_identity() {
    assert!(all_of(true));
    assert!(!all_of(false));
    assert!(any_of(true));
    assert!(!any_of(false));
    assert!(!none_of(true));
    assert!(none_of(false));
}

/// Test the trait methods on bool directly.
#[test]
fn test_bool_trait_methods() {
    assert!(true.reduce_all());
    assert!(!false.reduce_any());
}

// ============================================================================
// Mask Tests
// ============================================================================

/// Test the predicates on uniform and mixed masks.
#[test]
fn test_mask_predicates() {
    let all = M4::splat(true);
    let none = M4::splat(false);
    let some = M4::from_array([false, true, false, false]);

    assert!(all_of(all) && any_of(all) && !none_of(all));
    assert!(!all_of(none) && !any_of(none) && none_of(none));
    assert!(!all_of(some) && any_of(some) && !none_of(some));
}

/// Test the predicates through a reference.
#[test]
fn test_mask_predicates_by_reference() {
    let m = M4::first_n(4);

    assert!(all_of(&m));
    assert!(any_of(&&m));
}

/// Test the predicates on a comparison result.
#[test]
fn test_predicates_on_comparison() {
    let v = Simd::<f64, Fixed<4>>::from_array([1.0, 2.0, 3.0, 4.0]);

    assert!(all_of(v.simd_gt(Simd::splat(0.0))));
    assert!(any_of(v.simd_eq(Simd::splat(3.0))));
    assert!(none_of(v.simd_lt(Simd::splat(1.0))));
}
