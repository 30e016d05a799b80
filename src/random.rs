//! Random-number helpers over an injected generator
//!
//! Nothing here owns a generator. Callers pass `&mut impl Rng`, which is
//! usually `rand::rng()` in production and [`seeded`] in tests.

use crate::error::{Error, Result};
use rand::distr::Uniform;
use rand::distr::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// Uniform value in `[0, 1)`.
#[inline]
pub fn random01<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

/// Uniform value in the half-open `range`.
///
/// # Errors
///
/// Returns [`Error::InvalidBounds`] if the range is empty, has a NaN or
/// infinite bound, or is too wide to sample (such as `f64::MIN..f64::MAX`).
pub fn random_in_range<T, R>(rng: &mut R, range: Range<T>) -> Result<T>
where
    T: SampleUniform + std::fmt::Debug,
    R: Rng + ?Sized,
{
    match Uniform::new(&range.start, &range.end) {
        Ok(dist) => Ok(rng.sample(dist)),
        Err(e) => {
            tracing::debug!("Cannot sample {:?}..{:?}: {e}", range.start, range.end);
            Err(Error::invalid_bounds(range.start, range.end))
        }
    }
}

/// Deterministic generator. `None` seeds from the OS.
pub fn seeded(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
