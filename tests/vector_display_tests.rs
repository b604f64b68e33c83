//! Tests for `NumVec` text rendering.
//!
//! These tests verify the display contract: angle-bracketed, comma-separated
//! elements with no trailing separator, `<>` for the empty vector, and the
//! space-separated alternate form.
//!
//! ## Test Organization
//!
//! 1. **Standard Form** - separators, no trailing comma, value formatting
//! 2. **Boundary Cases** - empty and single-element vectors
//! 3. **Alternate Form** - space separation via `{:#}`

use numvec::prelude::*;

// ============================================================================
// Standard Form Tests
// ============================================================================

/// Test rendering of an element list.
///
/// Verifies comma separation with no trailing comma, and that whole floats
/// render without a decimal point.
#[test]
fn test_display_element_list() {
    let v = NumVec::from([1.0, 2.0, 3.0]);

    assert_eq!(v.to_string(), "<1,2,3>");
}

/// Test rendering of a repeated fill value.
#[test]
fn test_display_repeated_fill() {
    let v = NumVec::from_elem(5, 7.4);

    assert_eq!(
        v.to_string(),
        "<7.4,7.4,7.4,7.4,7.4>",
        "The fill value should repeat length times, comma-joined"
    );
}

/// Test rendering of fractional and negative values.
#[test]
fn test_display_fractional_and_negative() {
    let v = NumVec::from([0.5, -1.5, 2.0]);

    assert_eq!(v.to_string(), "<0.5,-1.5,2>");
}

/// Test rendering of integer element types.
#[test]
fn test_display_integer_elements() {
    let v: NumVec<i32> = NumVec::from([10, -20, 30]);

    assert_eq!(v.to_string(), "<10,-20,30>");
}

// ============================================================================
// Boundary Tests
// ============================================================================

/// Test rendering of the empty vector.
///
/// Verifies the defined zero-length rendering, `<>`.
#[test]
fn test_display_empty() {
    let v: NumVec<f64> = NumVec::new();

    assert_eq!(v.to_string(), "<>", "Empty vector should render as <>");
}

/// Test rendering of a single element.
#[test]
fn test_display_single_element() {
    let v = NumVec::from([4.25]);

    assert_eq!(v.to_string(), "<4.25>", "No separator for a single element");
}

// ============================================================================
// Alternate Form Tests
// ============================================================================

/// Test the space-separated alternate rendering.
#[test]
fn test_display_alternate_spaces() {
    let v = NumVec::from([1.0, 2.0, 3.0]);

    assert_eq!(format!("{v:#}"), "<1 2 3>", "Alternate form uses spaces");
}

/// Test the alternate rendering of the empty vector.
#[test]
fn test_display_alternate_empty() {
    let v: NumVec<f64> = NumVec::new();

    assert_eq!(format!("{v:#}"), "<>");
}
