#![cfg(feature = "dev")]
//! Tests for the boolean lane mask.
//!
//! ## Test Organization
//!
//! 1. **Construction** - splat, from_array, from_fn, first_n
//! 2. **Queries** - test, count_true, all, any, none
//! 3. **Logic** - & | ^ ! and their compound forms

use lanewise::internals::backends::fixed::Fixed;
use lanewise::internals::backends::scalar::Scalar;
use lanewise::internals::types::mask::SimdMask;

type M4 = SimdMask<f32, Fixed<4>>;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test the basic constructors.
#[test]
fn test_construction() {
    assert_eq!(M4::splat(true).to_array(), [true; 4]);
    assert_eq!(M4::default().to_array(), [false; 4]);
    assert_eq!(M4::from(true), M4::splat(true));
    assert_eq!(
        M4::from_fn(|i| i % 2 == 0).to_array(),
        [true, false, true, false]
    );
}

/// Test prefix masks, including counts past the lane count.
#[test]
fn test_first_n() {
    assert_eq!(M4::first_n(0).to_array(), [false; 4]);
    assert_eq!(M4::first_n(3).to_array(), [true, true, true, false]);
    assert_eq!(M4::first_n(4).to_array(), [true; 4]);
    assert_eq!(M4::first_n(100).to_array(), [true; 4]);
}

/// Test the Debug representation.
#[test]
fn test_debug_format() {
    let m = SimdMask::<i32, Fixed<2>>::from_array([true, false]);

    assert_eq!(format!("{m:?}"), "SimdMask([true, false])");
}

// ============================================================================
// Query Tests
// ============================================================================

/// Test lane queries on a mixed mask.
#[test]
fn test_queries() {
    let m = M4::from_array([true, false, true, false]);

    assert!(m.test(0));
    assert!(!m.test(1));
    assert_eq!(m.count_true(), 2);
    assert!(m.any());
    assert!(!m.all());
    assert!(!m.none());
}

/// Test queries on the uniform masks.
#[test]
fn test_queries_uniform() {
    assert!(M4::splat(true).all());
    assert!(M4::splat(false).none());
    assert_eq!(M4::splat(false).count_true(), 0);
}

/// Test that the single-lane mask is a plain bool.
#[test]
fn test_scalar_mask() {
    let m = SimdMask::<f64, Scalar>::splat(true);

    assert!(m.storage());
    assert_eq!(m.to_array(), [true]);
    assert_eq!((!m).to_array(), [false]);
}

// ============================================================================
// Logic Tests
// ============================================================================

/// Test the binary operators against a truth table.
#[test]
fn test_logic_operators() {
    let a = M4::from_array([true, true, false, false]);
    let b = M4::from_array([true, false, true, false]);

    assert_eq!((a & b).to_array(), [true, false, false, false]);
    assert_eq!((a | b).to_array(), [true, true, true, false]);
    assert_eq!((a ^ b).to_array(), [false, true, true, false]);
    assert_eq!((!a).to_array(), [false, false, true, true]);
}

/// Test the compound operators.
#[test]
fn test_logic_compound() {
    let a = M4::from_array([true, true, false, false]);
    let b = M4::from_array([true, false, true, false]);

    let mut and = a;
    and &= b;
    let mut or = a;
    or |= b;
    let mut xor = a;
    xor ^= b;

    assert_eq!(and, a & b);
    assert_eq!(or, a | b);
    assert_eq!(xor, a ^ b);
}
