//! Random input sequences, mostly useful for trying out the transform on
//! larger inputs.
use rand::{
    Rng, SeedableRng,
    distr::{Distribution, Uniform},
};
use rand_chacha::ChaCha12Rng;
use rand_distr::Normal;
use tracing::debug;

use crate::{
    error::{Error, Result},
    values::Values,
};

/// `len` integers sampled uniformly from `min..=max`.
pub fn uniform<R: Rng>(rng: &mut R, len: usize, min: i64, max: i64) -> Result<Values> {
    if min > max {
        return Err(Error::EmptyRange { min, max });
    }
    let dist = Uniform::new_inclusive(min, max)
        .map_err(|e| Error::InvalidDistribution(e.to_string()))?;
    let values: Vec<i64> = dist.sample_iter(rng).take(len).collect();
    debug!(len, min, max, "generated uniform values");
    Ok(Values::from(values))
}

/// `len` samples from a normal distribution, rounded to the closest integer.
/// Samples outside the range of `i64` saturate.
pub fn gaussian<R: Rng>(rng: &mut R, len: usize, mean: f64, std_dev: f64) -> Result<Values> {
    if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
        return Err(Error::InvalidDistribution(format!(
            "normal distribution needs a finite mean and a finite, non-negative standard \
             deviation, got mean {} and standard deviation {}",
            mean, std_dev
        )));
    }
    let normal = Normal::new(mean, std_dev).map_err(|e| Error::InvalidDistribution(e.to_string()))?;
    let values: Vec<i64> = normal.sample_iter(rng).take(len).map(|x: f64| x.round() as i64).collect();
    debug!(len, mean, std_dev, "generated gaussian values");
    Ok(Values::from(values))
}

/// A reproducible generator when `seed` is given, otherwise one seeded from
/// the thread local generator.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha12Rng {
    match seed {
        Some(seed) => ChaCha12Rng::seed_from_u64(seed),
        None => ChaCha12Rng::from_rng(&mut rand::rng()),
    }
}
