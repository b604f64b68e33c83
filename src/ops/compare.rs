//! Equality and ordering for `NumVec`, with common-prefix semantics.
//!
//! ## Purpose
//!
//! This module implements the comparison operators. Both restrict themselves
//! to indices valid in both operands, but they resolve a length mismatch
//! differently, and the asymmetry is deliberate:
//!
//! * **Equality** compares the common prefix only. Two vectors whose shared
//!   prefix matches are equal even when their lengths differ.
//! * **Ordering** is lexicographic. On an equal prefix, the shorter vector
//!   is less.
//!
//! ## Design notes
//!
//! * **Prefix equality is a surprise**: `v == w` does NOT imply
//!   `v.len() == w.len()`. Callers wanting structural equality should
//!   compare `v.as_slice() == w.as_slice()`.
//! * **Cross-type equality**: Mirroring `Vec`, equality is generic over the
//!   right-hand element type wherever `T: PartialEq<U>`. Ordering stays
//!   same-type, matching the slice primitive it delegates to.
//!
//! ## Invariants
//!
//! * A length mismatch alone never causes inequality; only differing
//!   elements within the compared range do.
//! * Ordering agrees with `<[T]>::partial_cmp` exactly.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::vector::NumVec;

// ============================================================================
// Equality (common prefix)
// ============================================================================

impl<T, U> PartialEq<NumVec<U>> for NumVec<T>
where
    T: PartialEq<U>,
{
    /// Element-wise equality over the shorter of the two lengths.
    fn eq(&self, other: &NumVec<U>) -> bool {
        self.iter().zip(other.iter()).all(|(lhs, rhs)| lhs == rhs)
    }
}

// ============================================================================
// Ordering (lexicographic)
// ============================================================================

impl<T: PartialOrd> PartialOrd for NumVec<T> {
    /// Lexicographic comparison: the first differing element decides, and an
    /// exhausted shorter operand orders before the longer one.
    ///
    /// Note that this is intentionally finer-grained than `==`: on floats,
    /// `NumVec::from([1.0]) == NumVec::from([1.0, 2.0])` (prefix equality)
    /// while `partial_cmp` between them is `Some(Ordering::Less)`.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
