//! Layer 2: Vector
//!
//! # Purpose
//!
//! This layer provides the container itself: `NumVec<T>` owns the storage
//! and exposes the array-like surface (construction, access, resizing,
//! filling, rendering).
//!
//! # Architecture
//!
//! ```text
//! Layer 3: Ops
//!   ↓
//! Layer 2: Vector ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, vec::Vec};
#[cfg(feature = "std")]
use std::{boxed::Box, vec::Vec};

// External dependencies
use num_traits::Zero;

// Internal dependencies
use crate::primitives::errors::VecError;

/// Slice views, conversions, and iteration.
mod access;

/// Text rendering.
mod display;

/// Fill operations.
mod fill;

/// Resize operations.
mod resize;

// ============================================================================
// Container Type
// ============================================================================

/// A value-semantic numeric vector with exact-capacity storage.
///
/// The backing buffer always holds exactly `len()` elements: there is no
/// spare capacity, and every resize reallocates to the exact new length.
/// Cloning deep-copies the elements; two vectors never share storage.
///
/// `NumVec` dereferences to `[T]`, so the whole read/write slice surface
/// (`v[i]` indexing that panics on out-of-range, checked `get`, `iter`, the
/// `unsafe` `get_unchecked` fast path) is available directly on the vector.
///
/// The element type defaults to `f64`.
#[derive(Debug, Clone)]
pub struct NumVec<T = f64> {
    // Owned storage; length and capacity coincide by construction.
    data: Box<[T]>,
}

// ============================================================================
// Construction
// ============================================================================

impl<T> NumVec<T> {
    /// Create an empty vector.
    #[inline]
    pub fn new() -> Self {
        Self {
            data: Vec::new().into_boxed_slice(),
        }
    }
}

impl<T: Copy> NumVec<T> {
    /// Create a vector of `len` copies of `value`.
    pub fn from_elem(len: usize, value: T) -> Self {
        let mut data = Vec::with_capacity(len);
        data.resize(len, value);
        Self {
            data: data.into_boxed_slice(),
        }
    }

    /// Create a vector of `len` elements from an ordered value list.
    ///
    /// Exactly two supplied counts are accepted: `values.len() == len`
    /// assigns element `i` from `values[i]`, and a single value broadcasts
    /// to every element. Any other count is rejected with
    /// [`VecError::LengthMismatch`] rather than guessed at.
    pub fn from_values(len: usize, values: &[T]) -> Result<Self, VecError> {
        match values.len() {
            n if n == len => Ok(Self {
                data: Box::from(values),
            }),
            1 => Ok(Self::from_elem(len, values[0])),
            got => Err(VecError::LengthMismatch { expected: len, got }),
        }
    }
}

impl<T: Copy + Zero> NumVec<T> {
    /// Create a vector of `len` zeros.
    #[inline]
    pub fn zeros(len: usize) -> Self {
        Self::from_elem(len, T::zero())
    }
}

impl<T> Default for NumVec<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
