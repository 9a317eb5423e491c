//! Entries of a permutation.
use std::{fmt, hash::Hash, ops::Range};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Unsigned primitive integer types used to store the entries of a permutation.
///
/// A permutation of degree `n` is stored as `n` points, each being the index of an item in
/// `0..n`. Smaller point types use less memory but limit the supported degree to
/// [`Self::MAX_DEGREE`]. Requesting a larger permutation is an error and never truncates.
///
/// This trait is sealed.
pub trait Point:
    Copy + Default + Ord + Hash + fmt::Display + fmt::Debug + Send + Sync + sealed::Sealed + 'static
{
    /// Maximal degree of a permutation using this type as point representation.
    const MAX_DEGREE: usize;

    /// Returns the index of the point.
    ///
    /// The index is equal to the point but always a `usize`.
    fn index(self) -> usize;

    /// Returns the point with a given index.
    ///
    /// The index must be below [`Self::MAX_DEGREE`], otherwise an arbitrary point is returned.
    fn from_index(index: usize) -> Self;
}

macro_rules! impl_pt {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}

            impl Point for $t {
                const MAX_DEGREE: usize = {
                    if (<$t>::MAX as usize) < (isize::MAX as usize) / std::mem::size_of::<$t>() {
                        (<$t>::MAX as usize).wrapping_add(1)
                    } else {
                        (isize::MAX as usize) / std::mem::size_of::<$t>()
                    }
                };

                #[inline(always)]
                fn index(self) -> usize {
                    self as usize
                }

                #[inline(always)]
                fn from_index(index: usize) -> Self {
                    debug_assert!(index < Self::MAX_DEGREE);
                    index as $t
                }
            }
        )*
    };
}

impl_pt!(u8, u16, u32, usize);

#[cfg(target_pointer_width = "64")]
impl_pt!(u64);

/// Iterator over a consecutive range of points.
pub struct PointRange<Pt> {
    indices: Range<usize>,
    _phantom: std::marker::PhantomData<Pt>,
}

impl<Pt: Point> PointRange<Pt> {
    /// Returns an iterator over the points `0..degree`.
    pub fn new(degree: usize) -> Self {
        debug_assert!(degree <= Pt::MAX_DEGREE);
        Self {
            indices: 0..degree,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<Pt: Point> Iterator for PointRange<Pt> {
    type Item = Pt;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.indices.next().map(Pt::from_index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<Pt: Point> DoubleEndedIterator for PointRange<Pt> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.indices.next_back().map(Pt::from_index)
    }
}

impl<Pt: Point> ExactSizeIterator for PointRange<Pt> {}
