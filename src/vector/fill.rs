//! Fill operations for `NumVec`.
//!
//! In-place element writes: whole-vector fills (by value, by generator, or
//! by index function), ranged fills, and the zeroing `reset`. None of these
//! change the vector's length. Generator-driven fills visit elements in
//! increasing index order.

// External dependencies
use num_traits::Zero;

use super::NumVec;

impl<T: Copy> NumVec<T> {
    /// Set every element to `value`.
    #[inline]
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Set every element to successive results of `f`, called once per
    /// element in increasing index order.
    pub fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut() -> T,
    {
        for slot in self.data.iter_mut() {
            *slot = f();
        }
    }

    /// Set element `i` to `f(i)`, for every `i` in increasing order.
    pub fn fill_indexed<F>(&mut self, mut f: F)
    where
        F: FnMut(usize) -> T,
    {
        for (i, slot) in self.data.iter_mut().enumerate() {
            *slot = f(i);
        }
    }

    /// Set elements in `[start, len)` to `value`.
    ///
    /// A `start` at or beyond the current length is a no-op.
    pub fn fill_from(&mut self, value: T, start: usize) {
        if start >= self.data.len() {
            return;
        }
        self.data[start..].fill(value);
    }

    /// Set elements in `[start, end)` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or `end > len()`.
    #[inline]
    pub fn fill_range(&mut self, value: T, start: usize, end: usize) {
        self.data[start..end].fill(value);
    }
}

impl<T: Copy + Zero> NumVec<T> {
    /// Set every element to zero. The length is unchanged; this is a reset,
    /// not a truncation.
    #[inline]
    pub fn reset(&mut self) {
        self.fill(T::zero());
    }
}
