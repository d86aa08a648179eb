//! Drawing discrete particle hits from a screen profile.
//!
//! The intensity curve is treated as an unnormalized probability mass
//! function over the screen positions; hits are drawn i.i.d. with
//! replacement. A profile whose intensity sums to zero (both slits
//! closed, no noise) or carries non-finite weights cannot be sampled and
//! surfaces as [`SamplingError::Degenerate`] — callers substitute an
//! empty hit list and render a dark screen instead of crashing.

use std::error::Error;
use std::fmt;

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::pattern::ScreenProfile;

/// Sampling failure conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SamplingError {
    /// The intensity profile has zero or non-finite total weight.
    Degenerate,
}

impl fmt::Display for SamplingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplingError::Degenerate => {
                write!(f, "intensity profile is degenerate; no hits can be drawn")
            }
        }
    }
}

impl Error for SamplingError {}

/// Draw `particle_count` hit positions from the profile.
///
/// Returns hits in draw order; the order carries no meaning, but two
/// calls with the same profile and an identically seeded RNG produce
/// identical sequences.
pub fn sample_hits<R: Rng>(
    profile: &ScreenProfile,
    particle_count: usize,
    rng: &mut R,
) -> Result<Vec<f64>, SamplingError> {
    if profile.intensity.iter().any(|w| !w.is_finite()) {
        return Err(SamplingError::Degenerate);
    }
    let pmf = WeightedIndex::new(&profile.intensity).map_err(|_| SamplingError::Degenerate)?;
    Ok((0..particle_count)
        .map(|_| profile.positions[pmf.sample(rng)])
        .collect())
}

/// Fixed-range bin counts over the screen domain, mirroring the
/// 100-bin histogram the rendering layer displays.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// Hit count per bin.
    pub counts: Vec<u64>,
    /// Inclusive range the bins cover.
    pub range: (f64, f64),
}

impl Histogram {
    /// Bin `hits` into `bins` equal-width buckets over `range`.
    ///
    /// Samples outside the range land in the nearest edge bin.
    pub fn from_hits(hits: &[f64], bins: usize, range: (f64, f64)) -> Self {
        let mut counts = vec![0u64; bins];
        if bins > 0 {
            let (lo, hi) = range;
            let width = (hi - lo) / bins as f64;
            for &hit in hits {
                let idx = ((hit - lo) / width).floor() as isize;
                let idx = idx.clamp(0, bins as isize - 1) as usize;
                counts[idx] += 1;
            }
        }
        Self { counts, range }
    }

    /// Center position of each bin.
    pub fn bin_centers(&self) -> Vec<f64> {
        let bins = self.counts.len();
        let (lo, hi) = self.range;
        let width = (hi - lo) / bins as f64;
        (0..bins).map(|i| lo + (i as f64 + 0.5) * width).collect()
    }

    /// Total hits across all bins.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest single-bin count.
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
