//! Resize operations for `NumVec`.
//!
//! ## Purpose
//!
//! This module reallocates a vector's storage to an exact new length while
//! preserving existing element values for indices below
//! `min(old_len, new_len)`. A grown tail is filled with zero or an explicit
//! fill value; shrinking discards the elements beyond the new length.
//!
//! ## Design notes
//!
//! * **Exact capacity**: The replacement buffer is allocated with capacity
//!   equal to the new length, keeping the container's no-spare-capacity
//!   invariant.
//! * **Fallible variants**: `try_resize`/`try_resize_fill` surface allocator
//!   refusal as [`VecError::AllocationFailed`] and leave the vector
//!   untouched on error. The infallible variants lean on the global
//!   allocator's abort-on-OOM behavior.
//!
//! ## Invariants
//!
//! * `v.resize(n)` leaves `v.len() == n`.
//! * Elements at indices below `min(old_len, new_len)` are unchanged.
//! * On `Err`, the vector's length and contents are exactly as before.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Zero;

// Internal dependencies
use crate::primitives::errors::VecError;

use super::NumVec;

// ============================================================================
// Infallible Resize
// ============================================================================

impl<T: Copy + Zero> NumVec<T> {
    /// Resize to `new_len` elements, zero-filling any grown tail.
    #[inline]
    pub fn resize(&mut self, new_len: usize) {
        self.resize_fill(new_len, T::zero());
    }
}

impl<T: Copy> NumVec<T> {
    /// Resize to `new_len` elements, setting any grown tail to `value`.
    pub fn resize_fill(&mut self, new_len: usize, value: T) {
        let mut next = Vec::with_capacity(new_len);
        let keep = self.data.len().min(new_len);
        next.extend_from_slice(&self.data[..keep]);
        next.resize(new_len, value);
        self.data = next.into_boxed_slice();
    }
}

// ============================================================================
// Fallible Resize
// ============================================================================

impl<T: Copy + Zero> NumVec<T> {
    /// Fallible [`resize`](NumVec::resize): reports allocator refusal
    /// instead of aborting, leaving the vector untouched on error.
    #[inline]
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), VecError> {
        self.try_resize_fill(new_len, T::zero())
    }
}

impl<T: Copy> NumVec<T> {
    /// Fallible [`resize_fill`](NumVec::resize_fill): reports allocator
    /// refusal instead of aborting, leaving the vector untouched on error.
    pub fn try_resize_fill(&mut self, new_len: usize, value: T) -> Result<(), VecError> {
        let mut next = Vec::new();
        if next.try_reserve_exact(new_len).is_err() {
            return Err(VecError::AllocationFailed { requested: new_len });
        }

        let keep = self.data.len().min(new_len);
        next.extend_from_slice(&self.data[..keep]);
        next.resize(new_len, value);
        self.data = next.into_boxed_slice();
        Ok(())
    }
}
