//! Operations producing permutations.
//!
//! Operations validate their arguments on construction and return a value implementing
//! [`Inplace`] for the supported storage types. Use [`Inplace::build`] to obtain a new permutation
//! or [`Inplace::assign_to`] (or [`AssignInplace::assign`][crate::inplace::AssignInplace::assign])
//! to overwrite an existing one.

use std::marker::PhantomData;

use smallvec::SmallVec;

use crate::{
    bignum::{self, Int},
    error::{InvalidArgument, InvalidArgumentKind, Result},
    factoradic::{factorial_usize, Digits, Factoradic},
    inplace::Inplace,
    point::Point,
};

use super::pool::{FlatPool, Pool, TreePool, FLAT_POOL_MAX_DEGREE};

/// The permutation of a given degree at a given index in lexicographic order.
///
/// See [`permutation_indices`][super::permutation_indices].
#[derive(Clone, Debug)]
pub struct Unrank<Pt: Point> {
    lehmer_code: Digits,
    _marker: PhantomData<Pt>,
}

impl<Pt: Point> Unrank<Pt> {
    /// Validates the arguments and computes the Lehmer code of the requested permutation.
    ///
    /// Fails when `n` is not positive, when `n` exceeds `Pt::MAX_DEGREE`, when `index` is negative
    /// or when `index` is not below `n!`.
    pub fn new(n: impl Int, index: impl Int) -> Result<Self> {
        if n.is_negative() {
            return Err(InvalidArgument::negative("n", &n));
        }
        if n.as_usize() == Some(0) {
            return Err(InvalidArgument::new(InvalidArgumentKind::EmptyPermutation));
        }

        let index = bignum::non_negative("index", &index)?;
        let degree = bignum::bounded_usize("n", &n, Pt::MAX_DEGREE)?;

        let count = factorial_usize(degree);
        if index >= count {
            return Err(InvalidArgument::new(InvalidArgumentKind::IndexOutOfRange {
                index,
                degree,
                count,
            }));
        }

        let Some(lehmer_code) = Factoradic::from(index).padded_digits(degree) else {
            unreachable!("an index below {degree}! has at most {degree} factoradic digits");
        };

        Ok(Self {
            lehmer_code,
            _marker: PhantomData,
        })
    }

    /// The degree of the represented permutation.
    #[inline]
    pub fn degree(&self) -> usize {
        self.lehmer_code.len()
    }

    /// The index's factoradic digits padded to the permutation's degree.
    ///
    /// Each digit is the rank of the corresponding image among the points not used by the
    /// previous images.
    #[inline]
    pub fn lehmer_code(&self) -> &[usize] {
        &self.lehmer_code
    }

    fn decode(&self, mut emit: impl FnMut(Pt)) {
        #[inline(always)]
        fn walk<Pt: Point>(digits: &[usize], mut pool: impl Pool<Pt>, mut emit: impl FnMut(Pt)) {
            for &rank in digits {
                emit(pool.take_nth(rank));
            }
        }

        if self.degree() <= FLAT_POOL_MAX_DEGREE {
            walk::<Pt>(&self.lehmer_code, FlatPool::<Pt>::new(self.degree()), &mut emit)
        } else {
            walk::<Pt>(&self.lehmer_code, TreePool::new(self.degree()), &mut emit)
        }
    }
}

impl<Pt: Point> Inplace<Vec<Pt>> for Unrank<Pt> {
    #[inline]
    fn build(self) -> Vec<Pt> {
        let mut images = Vec::with_capacity(self.degree());
        self.decode(|pt| images.push(pt));
        images
    }

    #[inline]
    fn assign_to(self, output: &mut Vec<Pt>) {
        output.clear();
        output.reserve_exact(self.degree());
        self.decode(|pt| output.push(pt));
    }
}

impl<Pt: Point, const N: usize> Inplace<SmallVec<[Pt; N]>> for Unrank<Pt> {
    #[inline]
    fn build(self) -> SmallVec<[Pt; N]> {
        let mut images = SmallVec::with_capacity(self.degree());
        self.decode(|pt| images.push(pt));
        images
    }

    #[inline]
    fn assign_to(self, output: &mut SmallVec<[Pt; N]>) {
        output.clear();
        output.reserve_exact(self.degree());
        self.decode(|pt| output.push(pt));
    }
}
