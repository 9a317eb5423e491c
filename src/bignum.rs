//! Integer types accepted as degrees and indices.
//!
//! Every operation taking a degree or an index is generic over [`Int`], so it can be called with a
//! primitive integer of any width as well as with a [`BigInt`] or [`BigUint`]. Signed inputs are
//! accepted and rejected at runtime when negative.
use std::fmt;

use num_bigint::{BigInt, BigUint, Sign, ToBigUint};
use num_traits::ToPrimitive;

use crate::error::{InvalidArgument, InvalidArgumentKind, Result};

/// Read-only integer operations.
pub trait Int: fmt::Display + fmt::Debug {
    /// Whether values of this type can be negative.
    const SIGNED: bool;

    /// Returns the integer as a `usize`, if possible.
    fn as_usize(&self) -> Option<usize>;

    /// Returns `true` when the integer is strictly negative.
    fn is_negative(&self) -> bool;

    /// Returns the integer as a [`BigUint`], or `None` when it is negative.
    fn as_biguint(&self) -> Option<BigUint>;
}

macro_rules! impl_primitive_int {
    ($signed:literal: $($t:ty),*) => {
        $(
            impl Int for $t {
                const SIGNED: bool = $signed;

                #[inline]
                fn as_usize(&self) -> Option<usize> {
                    ToPrimitive::to_usize(self)
                }

                #[inline]
                #[allow(unused_comparisons)]
                fn is_negative(&self) -> bool {
                    *self < 0
                }

                #[inline]
                fn as_biguint(&self) -> Option<BigUint> {
                    ToBigUint::to_biguint(self)
                }
            }
        )*
    };
}

impl_primitive_int!(false: u8, u16, u32, u64, u128, usize);
impl_primitive_int!(true: i8, i16, i32, i64, i128, isize);

impl<T: Int + ?Sized> Int for &T {
    const SIGNED: bool = T::SIGNED;

    fn as_usize(&self) -> Option<usize> {
        (*self).as_usize()
    }

    fn is_negative(&self) -> bool {
        (*self).is_negative()
    }

    fn as_biguint(&self) -> Option<BigUint> {
        (*self).as_biguint()
    }
}

impl Int for BigInt {
    const SIGNED: bool = true;

    fn as_usize(&self) -> Option<usize> {
        self.to_usize()
    }

    fn is_negative(&self) -> bool {
        self.sign() == Sign::Minus
    }

    fn as_biguint(&self) -> Option<BigUint> {
        self.to_biguint()
    }
}

impl Int for BigUint {
    const SIGNED: bool = false;

    fn as_usize(&self) -> Option<usize> {
        self.to_usize()
    }

    fn is_negative(&self) -> bool {
        false
    }

    fn as_biguint(&self) -> Option<BigUint> {
        Some(self.clone())
    }
}

/// Converts a non-negative argument to a [`BigUint`].
pub(crate) fn non_negative(what: &'static str, value: &impl Int) -> Result<BigUint> {
    value
        .as_biguint()
        .ok_or_else(|| InvalidArgument::negative(what, value))
}

/// Converts a non-negative argument to a `usize` no larger than `max`.
pub(crate) fn bounded_usize(what: &'static str, value: &impl Int, max: usize) -> Result<usize> {
    if value.is_negative() {
        return Err(InvalidArgument::negative(what, value));
    }

    value.as_usize().filter(|&n| n <= max).ok_or_else(|| {
        InvalidArgument::new(InvalidArgumentKind::DegreeTooLarge {
            degree: value.to_string(),
            max,
        })
    })
}
