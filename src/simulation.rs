//! Per-render experiment runner.
//!
//! Combines the pattern generator and the graph builder into a single
//! render call: configuration in, profile + hits + histogram + graph
//! out. A degenerate profile (nothing to sample) is absorbed here into
//! an empty hit list so the rendering layer sees a dark screen rather
//! than an error.

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{ConfigError, SlitConfig};
use crate::graph::{build_graph, CoherenceGraph};
use crate::pattern::{compute_profile, ScreenProfile, SCREEN_MAX, SCREEN_MIN};
use crate::sampling::{sample_hits, Histogram, SamplingError};

/// Display binning for the hit histogram.
pub const HISTOGRAM_BINS: usize = 100;

/// Configuration for one render.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// The slit-experiment setup.
    pub slits: SlitConfig,
    /// Explicit seed for reproducible renders; `None` draws from entropy.
    pub seed: Option<u64>,
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// Intensity profile over the screen.
    pub profile: ScreenProfile,
    /// Sampled hit positions; empty when the profile is degenerate.
    pub hits: Vec<f64>,
    /// Hits binned for display.
    pub histogram: Histogram,
    /// Relational coherence graph for the same configuration.
    pub graph: CoherenceGraph,
}

/// Run one full render: profile, hits, histogram, graph.
///
/// The only failure mode is an invalid configuration; a dark screen is
/// a valid output, not an error.
pub fn run_render(config: &RenderConfig) -> Result<RenderOutput, ConfigError> {
    config.slits.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let profile = compute_profile(&config.slits, &mut rng)?;
    let hits = match sample_hits(&profile, config.slits.particle_count, &mut rng) {
        Ok(hits) => hits,
        Err(SamplingError::Degenerate) => {
            debug!("degenerate profile; rendering dark screen with no hits");
            Vec::new()
        }
    };

    let histogram = Histogram::from_hits(&hits, HISTOGRAM_BINS, (SCREEN_MIN, SCREEN_MAX));
    let graph = build_graph(&config.slits);

    Ok(RenderOutput {
        profile,
        hits,
        histogram,
        graph,
    })
}
