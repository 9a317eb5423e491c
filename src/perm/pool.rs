//! Pools of unused points supporting selection by rank.
//!
//! Decoding a Lehmer code repeatedly removes the `rank`-th smallest point still present in a pool
//! that starts out as `0..degree`. Encoding does the reverse, asking for the rank of a given point
//! before removing it.

use smallvec::SmallVec;

use crate::point::{Point, PointRange};

/// Largest degree handled by [`FlatPool`], above this [`TreePool`] is used.
pub const FLAT_POOL_MAX_DEGREE: usize = 256; // TUNE

/// Inline capacity of a [`FlatPool`], enough for a deck of cards.
const FLAT_POOL_INLINE: usize = 64; // TUNE

pub trait Pool<Pt: Point> {
    /// Removes and returns the `rank`-th smallest point still present.
    ///
    /// Panics when `rank` is not below the number of remaining points.
    fn take_nth(&mut self, rank: usize) -> Pt;
}

/// Sorted points with positional removal.
///
/// Each removal shifts the tail of the pool, which is quadratic overall but fast for small
/// degrees.
pub struct FlatPool<Pt: Point> {
    points: SmallVec<[Pt; FLAT_POOL_INLINE]>,
}

impl<Pt: Point> FlatPool<Pt> {
    pub fn new(degree: usize) -> Self {
        Self {
            points: PointRange::new(degree).collect(),
        }
    }
}

impl<Pt: Point> Pool<Pt> for FlatPool<Pt> {
    #[inline]
    fn take_nth(&mut self, rank: usize) -> Pt {
        self.points.remove(rank)
    }
}

/// Order-statistics pool backed by a Fenwick tree over point counts.
///
/// Selection, ranking and removal are all logarithmic in the degree.
pub struct TreePool {
    // 1-based, `tree[i]` counts the present points in `i - lowbit(i)..i`
    tree: Vec<usize>,
    top_step: usize,
}

#[inline(always)]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

impl TreePool {
    pub fn new(degree: usize) -> Self {
        // with every point present, each node counts exactly the points it covers
        let tree = (0..=degree).map(lowbit).collect();
        let top_step = if degree == 0 {
            0
        } else {
            1 << (usize::BITS - 1 - degree.leading_zeros())
        };

        Self { tree, top_step }
    }

    fn degree(&self) -> usize {
        self.tree.len() - 1
    }

    fn remove_index(&mut self, index: usize) {
        let mut node = index + 1;
        while node <= self.degree() {
            self.tree[node] -= 1;
            node += lowbit(node);
        }
    }

    /// Returns the number of present points below `index`.
    fn rank_of_index(&self, index: usize) -> usize {
        let mut node = index;
        let mut count = 0;
        while node > 0 {
            count += self.tree[node];
            node -= lowbit(node);
        }
        count
    }

    fn select_index(&self, rank: usize) -> usize {
        let mut node = 0;
        let mut remaining = rank;
        let mut step = self.top_step;

        while step > 0 {
            let next = node + step;
            if next <= self.degree() && self.tree[next] <= remaining {
                node = next;
                remaining -= self.tree[next];
            }
            step >>= 1;
        }

        assert!(node < self.degree(), "rank {rank} out of range");
        node
    }

    /// Returns the rank of a present point among all present points and removes it.
    pub fn rank_and_remove(&mut self, index: usize) -> usize {
        let rank = self.rank_of_index(index);
        self.remove_index(index);
        rank
    }
}

impl<Pt: Point> Pool<Pt> for TreePool {
    #[inline]
    fn take_nth(&mut self, rank: usize) -> Pt {
        let index = self.select_index(rank);
        self.remove_index(index);
        Pt::from_index(index)
    }
}

#[cfg(test)]
mod tests {
    use proptest::{collection::vec, prelude::*};

    use super::*;

    #[test]
    fn flat_pool() {
        let mut pool = FlatPool::<u8>::new(5);
        assert_eq!(pool.take_nth(2), 2);
        assert_eq!(pool.take_nth(2), 3);
        assert_eq!(pool.take_nth(0), 0);
        assert_eq!(pool.take_nth(1), 4);
        assert_eq!(pool.take_nth(0), 1);
    }

    #[test]
    fn tree_pool() {
        let mut pool = TreePool::new(5);
        assert_eq!(Pool::<u8>::take_nth(&mut pool, 2), 2);
        assert_eq!(Pool::<u8>::take_nth(&mut pool, 2), 3);
        assert_eq!(Pool::<u8>::take_nth(&mut pool, 0), 0);
        assert_eq!(Pool::<u8>::take_nth(&mut pool, 1), 4);
        assert_eq!(Pool::<u8>::take_nth(&mut pool, 0), 1);
    }

    #[test]
    fn tree_rank() {
        let mut pool = TreePool::new(6);
        assert_eq!(pool.rank_and_remove(3), 3);
        assert_eq!(pool.rank_and_remove(5), 4);
        assert_eq!(pool.rank_and_remove(0), 0);
        assert_eq!(pool.rank_and_remove(4), 2);
        assert_eq!(pool.rank_and_remove(1), 0);
        assert_eq!(pool.rank_and_remove(2), 0);
    }

    #[test]
    #[should_panic]
    fn tree_rank_out_of_range() {
        let mut pool = TreePool::new(3);
        Pool::<u32>::take_nth(&mut pool, 3);
    }

    /// Maps uniform random values to a valid sequence of ranks for a pool of a given degree.
    fn ranks(degree: usize, raw: &[usize]) -> Vec<usize> {
        (0..degree).map(|i| raw[i] % (degree - i)).collect()
    }

    proptest! {
        #[test]
        fn pools_agree(raw in vec(any::<usize>(), 1..400)) {
            let degree = raw.len();
            let mut flat = FlatPool::<u16>::new(degree);
            let mut tree = TreePool::new(degree);

            for rank in ranks(degree, &raw) {
                let expected = flat.take_nth(rank);
                prop_assert_eq!(Pool::<u16>::take_nth(&mut tree, rank), expected);
            }
        }
    }
}
