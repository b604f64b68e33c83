//! Error types for vector operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that fallible `NumVec` entry
//! points can report: ordered-values construction with an unusable count,
//! and allocation failure during a fallible resize.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the relevant values (expected vs. actual
//!   count, requested length).
//! * **No-std**: The enum is `Copy` and message-free, so it needs neither
//!   `std` nor `alloc`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * Out-of-range indexing is not an error value: indexing panics per the
//!   slice contract, and `get`/`front`/`back` are the checked entry points.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for fallible `NumVec` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VecError {
    /// Ordered-values construction received a count that is neither 1
    /// (broadcast) nor the target length (elementwise).
    LengthMismatch {
        /// The target vector length.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },

    /// The allocator could not provide storage for the requested length.
    AllocationFailed {
        /// The element count that could not be allocated.
        requested: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for VecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::LengthMismatch { expected, got } => {
                write!(
                    f,
                    "Length mismatch: {got} values for a vector of length {expected} (must be 1 or {expected})"
                )
            }
            Self::AllocationFailed { requested } => {
                write!(f, "Allocation failed for {requested} elements")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for VecError {}
