//! Tests for `NumVec` comparison operators.
//!
//! These tests verify the common-prefix comparison semantics: equality over
//! the shorter of the two lengths, and full lexicographic ordering. The
//! counter-intuitive cases (equal-prefix vectors of different lengths) are
//! asserted explicitly.
//!
//! ## Test Organization
//!
//! 1. **Equality** - prefix semantics, including the length-mismatch cases
//! 2. **Ordering** - lexicographic comparisons and tie-breaks
//! 3. **Consistency** - truncation policy matches the arithmetic operators

use numvec::prelude::*;

// ============================================================================
// Equality Tests
// ============================================================================

/// Test same-length equality and inequality.
#[test]
fn test_eq_same_length() {
    let a = NumVec::from([1.0, 2.0, 3.0]);
    let b = NumVec::from([1.0, 2.0, 3.0]);
    let c = NumVec::from([3.0, 2.0, 1.0]);

    assert!(a == b, "Identical vectors should be equal");
    assert!(a != c, "Differing elements should cause inequality");
}

/// Test that equality only inspects the common prefix.
///
/// This is the deliberately surprising case: a length mismatch alone does
/// not cause inequality.
#[test]
fn test_eq_common_prefix_only() {
    let short = NumVec::from([1.0, 2.0]);
    let long = NumVec::from([1.0, 2.0, 3.0]);

    assert!(
        short == long,
        "Equal-prefix vectors of different lengths compare equal"
    );
    assert!(
        long == short,
        "Prefix equality should hold in both argument orders"
    );
}

/// Test inequality within the compared range.
#[test]
fn test_ne_within_prefix() {
    let a = NumVec::from([1.0, 9.0]);
    let b = NumVec::from([1.0, 2.0, 3.0]);

    assert!(a != b, "A differing element inside the prefix breaks equality");
}

/// Test that the empty vector equals everything.
///
/// The common prefix with an empty vector is empty, so no element can
/// differ; this is the prefix rule taken to its limit.
#[test]
fn test_eq_empty_vector() {
    let empty: NumVec<f64> = NumVec::new();
    let other = NumVec::from([1.0, 2.0]);

    assert!(empty == other, "Empty vector is prefix-equal to anything");
    assert!(empty == NumVec::<f64>::new());
}

// ============================================================================
// Ordering Tests
// ============================================================================

/// Test lexicographic ordering decided by the first differing element.
#[test]
fn test_ord_first_difference_decides() {
    let a = NumVec::from([1.0, 2.0, 3.0]);
    let b = NumVec::from([3.0, 2.0, 1.0]);

    assert!(a < b, "1 < 3 at index 0 should decide the comparison");
    assert!(b > a);
    assert!(!(a == b), "Lexicographically ordered vectors are not equal");
}

/// Test the shorter-is-less tie-break.
///
/// Verifies standard lexicographic behavior when one operand is a strict
/// prefix of the other.
#[test]
fn test_ord_shorter_prefix_is_less() {
    let short = NumVec::from([1.0, 2.0]);
    let long = NumVec::from([1.0, 2.0, 3.0]);

    assert!(short < long, "A strict prefix orders before the longer vector");
    assert!(long > short);
    assert!(short <= long);
    assert!(!(short >= long));
}

/// Test ordering against the empty vector.
#[test]
fn test_ord_empty_is_least() {
    let empty: NumVec<f64> = NumVec::new();
    let v = NumVec::from([0.0]);

    assert!(empty < v, "Empty orders before any non-empty vector");
    assert!(empty <= NumVec::<f64>::new(), "Empty is less-or-equal to itself");
}

/// Test non-strict comparisons on equal vectors.
#[test]
fn test_ord_non_strict_on_equal() {
    let a = NumVec::from([1.0, 2.0]);
    let b = NumVec::from([1.0, 2.0]);

    assert!(a <= b);
    assert!(a >= b);
    assert!(!(a < b));
    assert!(!(a > b));
}

// ============================================================================
// Consistency Tests
// ============================================================================

/// Test the documented asymmetry between `==` and the ordering.
///
/// Equality is prefix-based while ordering is lexicographic, so an
/// equal-prefix pair of different lengths is simultaneously `==` and `<`.
/// This is part of the contract, asserted so no refactor papers over it.
#[test]
fn test_eq_ord_asymmetry_is_preserved() {
    let short = NumVec::from([1.0, 2.0]);
    let long = NumVec::from([1.0, 2.0, 3.0]);

    assert!(short == long, "Prefix equality holds");
    assert!(short < long, "Lexicographic ordering still ranks them");
}

/// Test that comparison truncation matches arithmetic truncation.
///
/// Both surfaces restrict themselves to the common index range; this pins
/// the policy as uniform rather than coincidental.
#[test]
fn test_truncation_policy_is_uniform() {
    let short = NumVec::from([1.0, 2.0]);
    let long = NumVec::from([1.0, 2.0, 3.0]);

    // Comparison over the common prefix: equal.
    assert!(short == long);

    // Arithmetic over the common prefix: two elements survive.
    assert_eq!((&short + &long).len(), 2);
    assert_eq!(short.dot(&long), 1.0 + 4.0);
}
