//! Error type shared by all fallible operations.
use num_bigint::BigUint;

/// Error returned when an operation is called with an argument outside of its domain.
///
/// All operations validate their arguments before doing any work, so an error never comes with a
/// partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid argument: {kind}")]
pub struct InvalidArgument {
    kind: InvalidArgumentKind,
}

impl InvalidArgument {
    pub(crate) fn new(kind: InvalidArgumentKind) -> Self {
        Self { kind }
    }

    pub(crate) fn negative(what: &'static str, value: impl ToString) -> Self {
        Self::new(InvalidArgumentKind::Negative {
            what,
            value: value.to_string(),
        })
    }

    /// The reason the argument was rejected.
    pub fn kind(&self) -> &InvalidArgumentKind {
        &self.kind
    }
}

/// Reason for an [`InvalidArgument`] error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidArgumentKind {
    /// A negative value was passed where a non-negative one is required.
    #[error("{what} must be non-negative, got {value}")]
    Negative {
        /// Name of the rejected argument.
        what: &'static str,
        /// The rejected value, formatted in decimal.
        value: String,
    },

    /// A permutation of zero items was requested.
    #[error("permutation degree must be positive")]
    EmptyPermutation,

    /// The index is not below the number of permutations of the requested degree.
    #[error("index {index} is out of range for {degree} items (expected index < {count})")]
    IndexOutOfRange {
        /// The rejected index.
        index: BigUint,
        /// Requested permutation degree.
        degree: usize,
        /// Number of permutations of that degree.
        count: BigUint,
    },

    /// The degree does not fit the point type (or a `usize` at all).
    #[error("degree {degree} exceeds the supported maximum of {max}")]
    DegreeTooLarge {
        /// The rejected degree, formatted in decimal.
        degree: String,
        /// Largest supported degree.
        max: usize,
    },

    /// The given images do not form a permutation of `0..degree`.
    #[error("images do not form a permutation of 0..{degree}")]
    NotAPermutation {
        /// Length of the rejected image slice.
        degree: usize,
    },

    /// A factoradic digit exceeds the bound of its place.
    #[error("digit {digit} at place {place} exceeds its maximum of {place}")]
    DigitOutOfRange {
        /// The rejected digit.
        digit: usize,
        /// Place of the digit, counted from the least significant end (digit weight `place!`).
        place: usize,
    },
}

/// Convenience alias for `Result<T, InvalidArgument>`.
pub type Result<T> = std::result::Result<T, InvalidArgument>;
