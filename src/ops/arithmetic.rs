//! Arithmetic operators for `NumVec`.
//!
//! ## Purpose
//!
//! This module implements the arithmetic surface: vector-scalar operators
//! (`+`, `-`, `*`, `/`), elementwise vector-vector operators (`+`, `-`,
//! `/`), and the dot product.
//!
//! ## Design notes
//!
//! * **Asymmetric `*`**: Vector * scalar is an elementwise map, but vector *
//!   vector is the **dot product** and returns a scalar. The elementwise
//!   product has no operator on purpose; the asymmetry is part of the
//!   container's contract.
//! * **Silent truncation**: Vector-vector operators produce
//!   `min(lhs.len(), rhs.len())` elements (for the dot product, that many
//!   terms). A length mismatch is never an error, consistent with the
//!   comparison operators.
//! * **Operand forms**: Every operator is implemented for owned and borrowed
//!   operands; the borrowed form does the work and the rest delegate.
//!
//! ## Invariants
//!
//! * Vector-scalar output length equals the left operand's length.
//! * The dot product accumulates from `T::zero()` in increasing index order.

// External dependencies
use core::ops::{Add, Div, Mul, Sub};
use num_traits::Num;

// Internal dependencies
use crate::vector::NumVec;

// ============================================================================
// Dot Product
// ============================================================================

impl<T: Num + Copy> NumVec<T> {
    /// Dot product over the common prefix of `self` and `other`.
    ///
    /// Accumulates `self[i] * other[i]` from `T::zero()` in increasing index
    /// order; terms beyond the shorter length are dropped. Also reachable as
    /// `&self * &other`.
    pub fn dot(&self, other: &Self) -> T {
        let mut sum = T::zero();
        for (&lhs, &rhs) in self.iter().zip(other.iter()) {
            sum = sum + lhs * rhs;
        }
        sum
    }
}

// ============================================================================
// Vector-Scalar Operators
// ============================================================================

// `out[i] = lhs[i] op rhs`, with the left operand's length.
macro_rules! impl_scalar_op {
    ($imp:ident, $method:ident) => {
        impl<'a, T: Num + Copy> $imp<T> for &'a NumVec<T> {
            type Output = NumVec<T>;

            fn $method(self, rhs: T) -> NumVec<T> {
                self.iter().map(|&lhs| $imp::$method(lhs, rhs)).collect()
            }
        }

        impl<T: Num + Copy> $imp<T> for NumVec<T> {
            type Output = NumVec<T>;

            #[inline]
            fn $method(self, rhs: T) -> NumVec<T> {
                $imp::$method(&self, rhs)
            }
        }
    };
}

impl_scalar_op!(Add, add);
impl_scalar_op!(Sub, sub);
impl_scalar_op!(Mul, mul);
impl_scalar_op!(Div, div);

// ============================================================================
// Elementwise Vector-Vector Operators
// ============================================================================

// `out[i] = lhs[i] op rhs[i]` over the common prefix; elements beyond the
// shorter operand are dropped.
macro_rules! impl_elementwise_op {
    ($imp:ident, $method:ident) => {
        impl<'a, 'b, T: Num + Copy> $imp<&'b NumVec<T>> for &'a NumVec<T> {
            type Output = NumVec<T>;

            fn $method(self, rhs: &'b NumVec<T>) -> NumVec<T> {
                self.iter()
                    .zip(rhs.iter())
                    .map(|(&a, &b)| $imp::$method(a, b))
                    .collect()
            }
        }

        impl<'a, T: Num + Copy> $imp<NumVec<T>> for &'a NumVec<T> {
            type Output = NumVec<T>;

            #[inline]
            fn $method(self, rhs: NumVec<T>) -> NumVec<T> {
                $imp::$method(self, &rhs)
            }
        }

        impl<'b, T: Num + Copy> $imp<&'b NumVec<T>> for NumVec<T> {
            type Output = NumVec<T>;

            #[inline]
            fn $method(self, rhs: &'b NumVec<T>) -> NumVec<T> {
                $imp::$method(&self, rhs)
            }
        }

        impl<T: Num + Copy> $imp<NumVec<T>> for NumVec<T> {
            type Output = NumVec<T>;

            #[inline]
            fn $method(self, rhs: NumVec<T>) -> NumVec<T> {
                $imp::$method(&self, &rhs)
            }
        }
    };
}

impl_elementwise_op!(Add, add);
impl_elementwise_op!(Sub, sub);
impl_elementwise_op!(Div, div);

// ============================================================================
// Vector-Vector Multiplication (dot product)
// ============================================================================

impl<'a, 'b, T: Num + Copy> Mul<&'b NumVec<T>> for &'a NumVec<T> {
    type Output = T;

    #[inline]
    fn mul(self, rhs: &'b NumVec<T>) -> T {
        self.dot(rhs)
    }
}

impl<'a, T: Num + Copy> Mul<NumVec<T>> for &'a NumVec<T> {
    type Output = T;

    #[inline]
    fn mul(self, rhs: NumVec<T>) -> T {
        self.dot(&rhs)
    }
}

impl<'b, T: Num + Copy> Mul<&'b NumVec<T>> for NumVec<T> {
    type Output = T;

    #[inline]
    fn mul(self, rhs: &'b NumVec<T>) -> T {
        self.dot(rhs)
    }
}

impl<T: Num + Copy> Mul<NumVec<T>> for NumVec<T> {
    type Output = T;

    #[inline]
    fn mul(self, rhs: NumVec<T>) -> T {
        self.dot(&rhs)
    }
}
