//! Permutations indexed in lexicographic order.
//!
//! The permutations of `n` items are numbered `0..n!` in lexicographic order of their images. The
//! permutation at index `i` is found by writing `i` in the factorial number system, padding it to
//! `n` digits and using each digit as the rank of the next image among the points not used so
//! far (decoding a Lehmer code). No other permutation is enumerated.
//!
//! ```
//! use lehmer::perm::{apply_permutation, permutation_index, permutation_indices};
//! use num_bigint::BigUint;
//!
//! assert_eq!(permutation_indices::<u8>(3, 4).unwrap(), [2, 0, 1]);
//! assert_eq!(apply_permutation(&["4H", "8C", "QD"], 1).unwrap(), ["4H", "QD", "8C"]);
//! assert_eq!(permutation_index(&[2u8, 0, 1]).unwrap(), BigUint::from(4u32));
//! ```

use num_bigint::BigUint;
use smallvec::{smallvec, SmallVec};

use crate::{
    bignum::Int,
    error::{InvalidArgument, InvalidArgumentKind, Result},
    factoradic::Factoradic,
    inplace::Inplace,
    point::Point,
};

mod pool;

pub mod ops;

/// Returns the permutation of `0..n` at position `index` in lexicographic order.
///
/// Index `0` is the identity and index `n! - 1` reverses all points. Fails when `n` is not
/// positive, when `n` exceeds `Pt::MAX_DEGREE`, when `index` is negative or when `index` is not
/// below `n!`.
///
/// To reuse an existing buffer, use [`ops::Unrank`] directly.
#[inline]
pub fn permutation_indices<Pt: Point>(n: impl Int, index: impl Int) -> Result<Vec<Pt>> {
    Ok(ops::Unrank::<Pt>::new(n, index)?.build())
}

/// Returns a copy of `items` rearranged by the permutation at position `index`.
///
/// The result contains `items[p[k]]` at position `k`, where `p` is
/// `permutation_indices(items.len(), index)`. Fails under the same conditions, so in particular
/// for an empty `items` slice.
pub fn apply_permutation<T: Clone>(items: &[T], index: impl Int) -> Result<Vec<T>> {
    let images: SmallVec<[usize; 64]> = ops::Unrank::<usize>::new(items.len(), index)?.build();
    Ok(images.into_iter().map(|image| items[image].clone()).collect())
}

/// Returns the position of a permutation in lexicographic order.
///
/// This is the inverse of [`permutation_indices`]. Fails when `images` is empty or is not a
/// permutation of `0..images.len()`.
pub fn permutation_index<Pt: Point>(images: &[Pt]) -> Result<BigUint> {
    let degree = images.len();
    if degree == 0 {
        return Err(InvalidArgument::new(InvalidArgumentKind::EmptyPermutation));
    }

    let mut seen: SmallVec<[bool; 256]> = smallvec![false; degree]; // TUNE
    for &image in images {
        let index = image.index();
        if index >= degree || std::mem::replace(&mut seen[index], true) {
            return Err(InvalidArgument::new(InvalidArgumentKind::NotAPermutation { degree }));
        }
    }

    let mut pool = pool::TreePool::new(degree);
    let lehmer_code = images
        .iter()
        .map(|&image| pool.rank_and_remove(image.index()));

    Ok(Factoradic::from_digits(lehmer_code)?.value())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use num_bigint::BigInt;
    use proptest::{collection::vec, prelude::*};

    use super::*;
    use crate::{factoradic::factorial, inplace::AssignInplace};

    fn kind<T: std::fmt::Debug>(result: Result<T>) -> InvalidArgumentKind {
        result.unwrap_err().kind().clone()
    }

    #[test]
    fn out_of_bounds() {
        assert_eq!(
            kind(permutation_indices::<u8>(0, 0)),
            InvalidArgumentKind::EmptyPermutation
        );
        assert!(matches!(
            kind(permutation_indices::<u8>(-1, 0)),
            InvalidArgumentKind::Negative { what: "n", .. }
        ));
        assert!(matches!(
            kind(permutation_indices::<u8>(1, -1)),
            InvalidArgumentKind::Negative { what: "index", .. }
        ));
        assert!(matches!(
            kind(permutation_indices::<u8>(3, 6)),
            InvalidArgumentKind::IndexOutOfRange { degree: 3, .. }
        ));
        assert!(matches!(
            kind(permutation_indices::<u8>(3, 7)),
            InvalidArgumentKind::IndexOutOfRange { degree: 3, .. }
        ));
        assert!(permutation_indices::<u32>(BigInt::from(-4), BigInt::from(0)).is_err());
    }

    #[test]
    fn degree_too_large() {
        assert_eq!(
            kind(permutation_indices::<u8>(257, 0)),
            InvalidArgumentKind::DegreeTooLarge {
                degree: "257".into(),
                max: 256,
            }
        );
        assert_eq!(permutation_indices::<u8>(256, 0).unwrap().len(), 256);
        assert!(permutation_indices::<u16>(257, 0).is_ok());
    }

    #[test]
    fn single() {
        assert_eq!(permutation_indices::<u8>(1, 0).unwrap(), [0]);
        assert_eq!(apply_permutation(&['q'], 0).unwrap(), ['q']);
        assert!(apply_permutation::<char>(&[], 0).is_err());
    }

    #[test]
    fn shuffle3() {
        let expected: [[u8; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        for (index, images) in expected.iter().enumerate() {
            assert_eq!(&permutation_indices::<u8>(3, index).unwrap()[..], images);
        }
    }

    #[test]
    fn shuffle3_objects() {
        let cards = ["4H", "8C", "QD"];
        let expected = [
            ["4H", "8C", "QD"],
            ["4H", "QD", "8C"],
            ["8C", "4H", "QD"],
            ["8C", "QD", "4H"],
            ["QD", "4H", "8C"],
            ["QD", "8C", "4H"],
        ];
        for (index, shuffled) in expected.iter().enumerate() {
            assert_eq!(&apply_permutation(&cards, index).unwrap()[..], shuffled);
        }
        assert_eq!(cards, ["4H", "8C", "QD"]);
    }

    #[test]
    fn apply_owned_items() {
        let words: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let shuffled = apply_permutation(&words, 23).unwrap();
        assert_eq!(shuffled, ["d", "c", "b", "a"]);
    }

    #[test]
    fn first_and_last() {
        for n in 1..=20usize {
            let identity: Vec<u32> = (0..n as u32).collect();
            assert_eq!(permutation_indices::<u32>(n, 0).unwrap(), identity);

            let last = factorial(n).unwrap() - 1u32;
            let reversed: Vec<u32> = identity.iter().rev().copied().collect();
            assert_eq!(permutation_indices::<u32>(n, &last).unwrap(), reversed);
        }
    }

    #[test]
    fn bijection() {
        for n in 1..=8usize {
            let count = (1..=n).product::<usize>();
            let mut all = HashSet::new();
            let mut prev: Option<Vec<u8>> = None;

            for index in 0..count {
                let perm = permutation_indices::<u8>(n, index).unwrap();

                let mut sorted = perm.clone();
                sorted.sort_unstable();
                assert_eq!(sorted, (0..n as u8).collect::<Vec<_>>());

                if let Some(prev) = prev {
                    assert!(prev < perm, "not in lexicographic order");
                }
                assert_eq!(permutation_index(&perm).unwrap(), BigUint::from(index));

                prev = Some(perm.clone());
                all.insert(perm);
            }

            assert_eq!(all.len(), count);
        }
    }

    #[test]
    fn large_degree_uses_tree_pool() {
        let n = 1000usize;
        let last = factorial(n).unwrap() - 1u32;
        let perm = permutation_indices::<u16>(n, &last).unwrap();
        assert_eq!(perm, (0..n as u16).rev().collect::<Vec<_>>());
        assert_eq!(permutation_index(&perm).unwrap(), last);

        let half = factorial(n).unwrap() / 2u32;
        let perm = permutation_indices::<u16>(n, &half).unwrap();
        assert_eq!(perm[0] as usize, n / 2);
        assert_eq!(permutation_index(&perm).unwrap(), half);
    }

    #[test]
    fn assign_reuses_buffer() {
        let mut buffer: Vec<u8> = Vec::with_capacity(52);
        let ptr = buffer.as_ptr();

        buffer.assign(ops::Unrank::new(52, 0).unwrap());
        assert_eq!(buffer, (0..52).collect::<Vec<u8>>());

        buffer.assign(ops::Unrank::new(3, 5).unwrap());
        assert_eq!(buffer, [2, 1, 0]);
        assert_eq!(buffer.as_ptr(), ptr);

        let mut small: SmallVec<[u8; 4]> = SmallVec::new();
        small.assign(ops::Unrank::new(4, 1).unwrap());
        assert_eq!(small.as_slice(), [0, 1, 3, 2]);
        assert!(!small.spilled());
    }

    #[test]
    fn lehmer_code() {
        let op = ops::Unrank::<u8>::new(6, 463).unwrap();
        assert_eq!(op.degree(), 6);
        assert_eq!(op.lehmer_code(), [3, 4, 1, 0, 1, 0]);

        let op = ops::Unrank::<u8>::new(5, 1).unwrap();
        assert_eq!(op.lehmer_code(), [0, 0, 0, 1, 0]);
    }

    #[test]
    fn rank_rejects_non_permutations() {
        assert_eq!(
            kind(permutation_index::<u8>(&[])),
            InvalidArgumentKind::EmptyPermutation
        );
        assert_eq!(
            kind(permutation_index::<u8>(&[0, 0])),
            InvalidArgumentKind::NotAPermutation { degree: 2 }
        );
        assert_eq!(
            kind(permutation_index::<u8>(&[0, 2])),
            InvalidArgumentKind::NotAPermutation { degree: 2 }
        );
    }

    proptest! {
        #[test]
        fn deck_roundtrip(words in vec(any::<u32>(), 8)) {
            // uniform enough below 52! < 2^226
            let index = BigUint::from_slice(&words) % factorial(52).unwrap();
            let deck = permutation_indices::<u8>(52, &index).unwrap();

            let distinct: HashSet<u8> = deck.iter().copied().collect();
            prop_assert_eq!(distinct.len(), 52);
            prop_assert!(deck.iter().all(|&card| card < 52));
            prop_assert_eq!(permutation_index(&deck).unwrap(), index);
        }

        #[test]
        fn apply_matches_indices(n in 1usize..12, seed: u64) {
            let index = BigUint::from(seed) % factorial(n).unwrap();
            let items: Vec<String> = (0..n).map(|i| format!("item{i}")).collect();

            let perm = permutation_indices::<usize>(n, &index).unwrap();
            let applied = apply_permutation(&items, &index).unwrap();
            for (k, &image) in perm.iter().enumerate() {
                prop_assert_eq!(&applied[k], &items[image]);
            }
        }
    }
}
