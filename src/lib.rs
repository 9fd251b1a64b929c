//! Rank transform of a sequence: every element is replaced by its rank among
//! the distinct sorted values, so the smallest value gets rank 1, equal values
//! share a rank, and the ranks have no gaps.
//!
//! Example usage:
//! ```
//! use array_rank::transform;
//!
//! let ranks = transform(&[37, 12, 28, 9, 100, 56, 80, 5, 12]);
//! assert_eq!(ranks, &[5, 3, 4, 2, 8, 6, 7, 1, 3]);
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod config;
pub mod driver;
pub mod error;
pub mod generators;
pub mod rank;
pub mod values;

pub use error::{Error, Result};
pub use rank::{distinct_count, transform, Direction, Lookup, RankMap, RankTransform};
pub use values::{Ranks, Values};

#[cfg(test)]
mod tests {
    use quickcheck::{Arbitrary, Gen};
    use rand::{rngs::StdRng, SeedableRng};

    // `Gen` contains a rng, but it's a private member so this method is used to get
    // a standard rng generated from `Gen`
    pub fn std_rng(g: &mut Gen) -> StdRng {
        let mut seed = [0u8; 32];
        for i in 0..32 {
            seed[i] = Arbitrary::arbitrary(g);
        }
        StdRng::from_seed(seed)
    }
}
