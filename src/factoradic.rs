//! Factorials and the factorial number system.
//!
//! In the factorial number system (factoradic) the digit at place `k`, counted from the least
//! significant end, has the weight `k!` and is at most `k`. For example decimal 16 is `2200` as
//! `16 = 2 * 3! + 2 * 2! + 0 * 1! + 0 * 0!`.
use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use smallvec::{smallvec, SmallVec};

use crate::{
    bignum::{self, Int},
    error::{InvalidArgument, InvalidArgumentKind, Result},
};

/// Inline digit capacity, enough for indices of permutations of up to 24 items.
const INLINE_DIGITS: usize = 24; // TUNE

/// Digit storage of a [`Factoradic`].
pub(crate) type Digits = SmallVec<[usize; INLINE_DIGITS]>;

/// Returns `n!`, with `0! == 1`.
///
/// Fails when `n` is negative or does not fit into a `usize`.
pub fn factorial(n: impl Int) -> Result<BigUint> {
    let n = bignum::bounded_usize("n", &n, usize::MAX)?;
    Ok(factorial_usize(n))
}

pub(crate) fn factorial_usize(n: usize) -> BigUint {
    let mut product = BigUint::one();
    for i in 2..=n {
        product *= i;
    }
    product
}

/// Returns the big-endian factoradic digits of a non-negative integer.
///
/// This is a shortcut for [`Factoradic::new`] followed by [`Factoradic::digits`].
pub fn factoradic_digits(n: impl Int) -> Result<Vec<usize>> {
    Ok(Factoradic::new(n)?.digits())
}

/// A non-negative integer in the factorial number system.
///
/// The digits are stored most significant first. A value with radix `k` has `k + 1` digits, where
/// the first digit has the weight `k!` and the last digit, the `0!` place, is always zero. Zero is
/// represented by the single digit `[0]`. Leading zeros are never stored, so two equal values
/// always have the same digits.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Factoradic {
    digits: Digits,
}

#[allow(clippy::len_without_is_empty)] // never empty
impl Factoradic {
    /// Converts a non-negative integer to the factorial number system.
    ///
    /// Fails when `n` is negative.
    pub fn new(n: impl Int) -> Result<Self> {
        Ok(Self::from_biguint(bignum::non_negative("n", &n)?))
    }

    fn from_biguint(mut rest: BigUint) -> Self {
        if rest.is_zero() {
            return Self::default();
        }

        let (radix, mut term) = radix_with_factorial(&rest);
        let mut digits: Digits = smallvec![0; radix + 1];

        for place in (1..=radix).rev() {
            let digit = &rest / &term;
            rest -= &digit * &term;
            digits[radix - place] = digit
                .to_usize()
                .unwrap_or_else(|| unreachable!("digit exceeds place {place}"));
            term /= place;
        }

        debug_assert!(rest.is_zero());

        Self { digits }
    }

    /// Creates a value from big-endian factoradic digits.
    ///
    /// Leading zeros are removed. Fails when a digit exceeds its place, i.e. when the `k`-th digit
    /// counted from the least significant end (starting at zero) is larger than `k`. In particular
    /// the last digit has to be zero. An empty sequence represents zero.
    pub fn from_digits(digits: impl IntoIterator<Item = usize>) -> Result<Self> {
        let mut digits: Digits = digits.into_iter().collect();

        let len = digits.len();
        for (position, &digit) in digits.iter().enumerate() {
            let place = len - 1 - position;
            if digit > place {
                return Err(InvalidArgument::new(InvalidArgumentKind::DigitOutOfRange {
                    digit,
                    place,
                }));
            }
        }

        let leading_zeros = digits.iter().take_while(|&&digit| digit == 0).count();
        digits.drain(..leading_zeros.min(len.saturating_sub(1)));
        if digits.is_empty() {
            digits.push(0);
        }

        Ok(Self { digits })
    }

    /// Returns a copy of the big-endian digits.
    ///
    /// Every call returns a new vector, changing it does not affect this value.
    pub fn digits(&self) -> Vec<usize> {
        self.digits.to_vec()
    }

    /// Returns the number of digits, including the trailing `0!` place.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns `true` for the value zero.
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1
    }

    /// Returns the largest `r` with `r! <= self`, or zero for the value zero.
    pub fn radix(&self) -> usize {
        self.digits.len() - 1
    }

    /// Returns the represented integer.
    pub fn value(&self) -> BigUint {
        let mut acc = BigUint::zero();
        for (position, &digit) in self.digits.iter().enumerate() {
            let place = self.radix() - position;
            acc *= place + 1;
            acc += digit;
        }
        acc
    }

    /// Returns the digits left-padded with zeros to exactly `len` digits.
    ///
    /// Returns `None` when the value needs more than `len` digits.
    pub(crate) fn padded_digits(&self, len: usize) -> Option<Digits> {
        let padding = len.checked_sub(self.digits.len())?;
        let mut padded = Digits::with_capacity(len);
        padded.extend(std::iter::repeat(0).take(padding));
        padded.extend_from_slice(&self.digits);
        Some(padded)
    }
}

/// Returns the largest `r` with `r! <= n` together with `r!`.
///
/// The search starts at `1! = 1`, so `n` must be positive.
fn radix_with_factorial(n: &BigUint) -> (usize, BigUint) {
    debug_assert!(!n.is_zero());

    let mut radix = 1usize;
    let mut term = BigUint::one();

    loop {
        let next = &term * (radix + 1);
        if &next > n {
            return (radix, term);
        }
        radix += 1;
        term = next;
    }
}

impl Default for Factoradic {
    fn default() -> Self {
        Self {
            digits: smallvec![0],
        }
    }
}

impl From<BigUint> for Factoradic {
    fn from(n: BigUint) -> Self {
        Self::from_biguint(n)
    }
}

impl From<&BigUint> for Factoradic {
    fn from(n: &BigUint) -> Self {
        Self::from_biguint(n.clone())
    }
}

impl From<&Factoradic> for BigUint {
    fn from(n: &Factoradic) -> Self {
        n.value()
    }
}

/// Writes the digits most significant first, separated by `:` when any digit exceeds 9.
impl fmt::Display for Factoradic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wide = self.digits.iter().any(|&digit| digit > 9);
        for (position, digit) in self.digits.iter().enumerate() {
            if wide && position > 0 {
                write!(f, ":")?;
            }
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Factoradic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Factoradic({self})")
    }
}
