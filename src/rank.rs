//! The rank transform: every element is replaced by its position among the
//! distinct sorted values of the sequence.
//!
//! The sequence is sorted once, a dictionary from value to rank is built in a
//! single pass over the sorted values, and the dictionary is then used to look
//! up the rank of every element in the original order. This is `O(n log n)`
//! time and `O(n)` extra space.

use std::{
    collections::{BTreeMap, HashMap},
    hash::Hash,
};

use clap::ValueEnum;
use tracing::{debug, trace};

/// Which element gets the first rank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    /// The smallest value gets the first rank.
    #[default]
    Ascending,
    /// The largest value gets the first rank.
    Descending,
}

/// Backing dictionary used to go from a value to its rank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Lookup {
    /// [`HashMap`], constant time lookups on average.
    #[default]
    Hash,
    /// [`BTreeMap`], logarithmic lookups in the worst case.
    Tree,
}

/// A dictionary from distinct values to their rank.
pub trait RankMap<K> {
    fn with_capacity(capacity: usize) -> Self;

    fn insert(&mut self, key: K, rank: usize);

    /// Rank of `key`. Panics if `key` was never inserted.
    fn rank(&self, key: &K) -> usize;
}

impl<K: Hash + Eq> RankMap<K> for HashMap<K, usize> {
    fn with_capacity(capacity: usize) -> Self {
        HashMap::with_capacity(capacity)
    }

    fn insert(&mut self, key: K, rank: usize) {
        HashMap::insert(self, key, rank);
    }

    fn rank(&self, key: &K) -> usize {
        self[key]
    }
}

impl<K: Ord> RankMap<K> for BTreeMap<K, usize> {
    fn with_capacity(_capacity: usize) -> Self {
        BTreeMap::new()
    }

    fn insert(&mut self, key: K, rank: usize) {
        BTreeMap::insert(self, key, rank);
    }

    fn rank(&self, key: &K) -> usize {
        self[key]
    }
}

/// Configurable rank transform.
///
/// ```
/// use array_rank::{Direction, RankTransform};
///
/// let ranks = RankTransform::new().direction(Direction::Descending).apply(&[40, 10, 20, 30]);
/// assert_eq!(ranks, &[1, 4, 3, 2]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankTransform {
    direction: Direction,
    lookup: Lookup,
    first_rank: usize,
}

impl Default for RankTransform {
    fn default() -> Self {
        RankTransform { direction: Direction::Ascending, lookup: Lookup::Hash, first_rank: 1 }
    }
}

impl RankTransform {
    /// Ascending ranks starting at 1, using a hash map.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn lookup(mut self, lookup: Lookup) -> Self {
        self.lookup = lookup;
        self
    }

    /// Rank given to the first distinct value, usually 1 or 0. A sequence
    /// with `k` distinct values gets the ranks `first_rank..first_rank + k`,
    /// which must all fit in `usize`, see [`RankTransform::apply`].
    pub fn first_rank(mut self, first_rank: usize) -> Self {
        self.first_rank = first_rank;
        self
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn get_lookup(&self) -> Lookup {
        self.lookup
    }

    pub fn get_first_rank(&self) -> usize {
        self.first_rank
    }

    /// Rank every element of `values`. The output has the same length and
    /// order as `values`.
    ///
    /// # Panics
    ///
    /// Panics, in release builds too, if the largest rank would not fit in
    /// `usize`. This only happens with a `first_rank` close to `usize::MAX`.
    #[tracing::instrument(level = "trace", skip_all, fields(len = values.len()))]
    pub fn apply<T: Ord + Hash>(&self, values: &[T]) -> Vec<usize> {
        if values.is_empty() {
            return Vec::new();
        }
        match self.lookup {
            Lookup::Hash => self.rank_with::<T, HashMap<&T, usize>>(values),
            Lookup::Tree => self.rank_with::<T, BTreeMap<&T, usize>>(values),
        }
    }

    fn rank_with<'a, T, M>(&self, values: &'a [T]) -> Vec<usize>
    where
        T: Ord,
        M: RankMap<&'a T>,
    {
        let mut sorted: Vec<&T> = values.iter().collect();
        sorted.sort_unstable();
        if self.direction == Direction::Descending {
            sorted.reverse();
        }

        let mut ranks = M::with_capacity(sorted.len());
        let mut rank = self.first_rank;
        if let Some((&first, rest)) = sorted.split_first() {
            let mut current = first;
            ranks.insert(current, rank);
            for &x in rest {
                if *x != *current {
                    current = x;
                    rank = match rank.checked_add(1) {
                        Some(next) => next,
                        None => panic!("rank overflow with first rank {}", self.first_rank),
                    };
                    ranks.insert(current, rank);
                }
            }
        }
        debug!(distinct = rank - self.first_rank + 1, lookup = ?self.lookup, "built rank map");

        let out: Vec<usize> = values.iter().map(|x| ranks.rank(&x)).collect();
        trace!(direction = ?self.direction, "ranked {} values", out.len());
        out
    }
}

/// Rank transform with the smallest value ranked 1.
///
/// ```
/// assert_eq!(array_rank::transform(&[40, 10, 20, 30]), &[4, 1, 2, 3]);
/// assert_eq!(array_rank::transform::<i32>(&[]), Vec::<usize>::new());
/// ```
pub fn transform<T: Ord + Hash>(values: &[T]) -> Vec<usize> {
    RankTransform::new().apply(values)
}

/// Number of distinct values in `values`, which is also the largest rank
/// [`transform`] gives.
pub fn distinct_count<T: Ord>(values: &[T]) -> usize {
    let mut sorted: Vec<&T> = values.iter().collect();
    sorted.sort_unstable();
    sorted.dedup();
    sorted.len()
}
