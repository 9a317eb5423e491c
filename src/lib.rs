//! Lehmer is a library mapping indices to permutations and back.
//!
//! The permutations of `n` items are numbered `0..n!` in lexicographic order. Any single
//! permutation can be computed directly from its index via the factorial number system, which
//! makes it possible to derive a permutation (e.g. a shuffled deck of cards) reproducibly from a
//! compact number.
//!
//! ```
//! use lehmer::{apply_permutation, factoradic_digits, permutation_indices};
//!
//! assert_eq!(factoradic_digits(16).unwrap(), [2, 2, 0, 0]);
//! assert_eq!(permutation_indices::<u8>(3, 1).unwrap(), [0, 2, 1]);
//! assert_eq!(apply_permutation(&["4H", "8C", "QD"], 4).unwrap(), ["QD", "4H", "8C"]);
//! ```

#![warn(missing_docs)]

pub mod bignum;
pub mod error;
pub mod factoradic;
pub mod inplace;
pub mod perm;
pub mod point;

pub use error::{InvalidArgument, InvalidArgumentKind, Result};
pub use factoradic::{factoradic_digits, factorial, Factoradic};
pub use perm::{apply_permutation, permutation_index, permutation_indices};
