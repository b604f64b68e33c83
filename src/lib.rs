//! # NumVec — value-semantic numeric vectors
//!
//! A small, heap-backed numeric vector container with exact-capacity storage,
//! in-place filling, prefix comparisons, and elementwise/scalar arithmetic.
//! It is a lightweight alternative to `Vec<T>` for numeric code that wants
//! value-type vectors without growth amortization or spare capacity.
//!
//! ## What is a `NumVec`?
//!
//! [`NumVec<T>`](crate::prelude::NumVec) owns a contiguous buffer whose
//! capacity always equals its length. Cloning deep-copies the elements,
//! resizing reallocates to the exact new length while preserving the common
//! prefix, and the arithmetic operators build new vectors (or, for
//! vector-times-vector, a dot-product scalar) from their operands.
//!
//! ## Quick Start
//!
//! ```rust
//! use numvec::prelude::*;
//!
//! let v = NumVec::from([1.0, 3.0, 5.0]);
//! let w = NumVec::from([6.0, 4.0, 2.0]);
//!
//! // Scalar arithmetic maps over every element.
//! assert_eq!(&v + 2.0, NumVec::from([3.0, 5.0, 7.0]));
//! assert_eq!(&v * 2.0, NumVec::from([2.0, 6.0, 10.0]));
//!
//! // Elementwise arithmetic truncates to the shorter operand.
//! assert_eq!(&v + &w, NumVec::from([7.0, 7.0, 7.0]));
//!
//! // Vector * vector is the dot product, not an elementwise map.
//! assert_eq!(&v * &w, 28.0);
//!
//! println!("{v}"); // <1,3,5>
//! ```
//!
//! ## Construction and Resizing
//!
//! ```rust
//! use numvec::prelude::*;
//!
//! let mut v: NumVec<f64> = NumVec::from_elem(4, 1.0);
//! v.resize(5); // grown tail is zero-filled
//! assert_eq!(v.to_string(), "<1,1,1,1,0>");
//!
//! v.resize_fill(7, 2.0); // grown tail takes the fill value
//! assert_eq!(v.to_string(), "<1,1,1,1,0,2,2>");
//!
//! v.resize(3); // shrinking keeps the prefix
//! assert_eq!(v.to_string(), "<1,1,1>");
//! ```
//!
//! ## Result and Error Handling
//!
//! The fallible entry points return `Result<_, VecError>`:
//!
//! ```rust
//! use numvec::prelude::*;
//!
//! // The ordered-values factory rejects counts that are neither 1 nor the
//! // target length.
//! let err = NumVec::from_values(3, &[1.0, 2.0]).unwrap_err();
//! assert_eq!(err, VecError::LengthMismatch { expected: 3, got: 2 });
//!
//! // A single value broadcasts.
//! let v = NumVec::from_values(3, &[9.0])?;
//! assert_eq!(v.to_string(), "<9,9,9>");
//! # Result::<(), VecError>::Ok(())
//! ```
//!
//! ## Comparison Semantics
//!
//! Equality and ordering both operate on the common index range, but with a
//! deliberate asymmetry inherited from the container's contract:
//!
//! * **Equality**: `==` compares the common prefix only; vectors of
//!   different lengths whose shared prefix matches are equal.
//! * **Ordering**: `<`, `<=`, `>`, `>=` are lexicographic; on an equal
//!   prefix, the shorter vector is less.
//!
//! ```rust
//! use numvec::prelude::*;
//!
//! let short = NumVec::from([1.0, 2.0]);
//! let long = NumVec::from([1.0, 2.0, 3.0]);
//!
//! assert!(short == long); // prefix equality
//! assert!(short < long); // lexicographic ordering
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments; disable default features to
//! remove the standard library dependency (an allocator is still required):
//!
//! ```toml
//! [dependencies]
//! numvec = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - error types.
mod primitives;

// Layer 2: Vector - the container itself.
mod vector;

// Layer 3: Ops - free comparison and arithmetic operators.
mod ops;

// Standard numvec prelude.
pub mod prelude {
    pub use crate::primitives::errors::VecError;
    pub use crate::vector::NumVec;
}
