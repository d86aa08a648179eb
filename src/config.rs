//! Experimental setup for a single render: which slits are open, which
//! detectors are armed, beam intensity, noise, and interpretation mode.
//!
//! A configuration is immutable for the duration of one render; both the
//! pattern generator and the graph builder read it and nothing else.

use std::error::Error;
use std::fmt;

/// Smallest supported beam intensity (particles per render).
pub const MIN_PARTICLES: usize = 100;
/// Largest supported beam intensity.
pub const MAX_PARTICLES: usize = 10_000;

/// Which framing the render uses for the both-slits-open case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpretation {
    /// Standard framing: the two-bump profile, no fringe structure.
    Classical,
    /// Relational Coherence framing: fringes appear when the
    /// configuration leaves the interference branch coherent.
    Relational,
}

impl Interpretation {
    /// Label string for output formatting.
    pub fn label(&self) -> &'static str {
        match self {
            Interpretation::Classical => "classical",
            Interpretation::Relational => "relational",
        }
    }
}

/// Full slit-experiment configuration for one render.
#[derive(Debug, Clone)]
pub struct SlitConfig {
    /// Left slit open.
    pub left_open: bool,
    /// Right slit open.
    pub right_open: bool,
    /// Which-path detector armed at the left slit.
    pub detector_left: bool,
    /// Which-path detector armed at the right slit.
    pub detector_right: bool,
    /// Number of particles fired at the screen.
    pub particle_count: usize,
    /// Additive noise magnitude in [0, 1].
    pub noise_level: f64,
    /// Interpretation mode selecting the both-slits profile.
    pub interpretation: Interpretation,
}

impl Default for SlitConfig {
    /// Both slits open, no detectors, 3000 particles, 10% noise,
    /// relational framing.
    fn default() -> Self {
        Self {
            left_open: true,
            right_open: true,
            detector_left: false,
            detector_right: false,
            particle_count: 3000,
            noise_level: 0.1,
            interpretation: Interpretation::Relational,
        }
    }
}

impl SlitConfig {
    /// Check the numeric parameters against their supported ranges.
    ///
    /// Out-of-range values are rejected up front; nothing downstream
    /// retries or clamps them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count < MIN_PARTICLES || self.particle_count > MAX_PARTICLES {
            return Err(ConfigError::ParticleCountOutOfRange(self.particle_count));
        }
        if !(0.0..=1.0).contains(&self.noise_level) {
            return Err(ConfigError::NoiseLevelOutOfRange(self.noise_level));
        }
        Ok(())
    }

    /// True if any which-path detector is armed.
    pub fn detector_active(&self) -> bool {
        self.detector_left || self.detector_right
    }

    /// True if both slits are open.
    pub fn both_slits_open(&self) -> bool {
        self.left_open && self.right_open
    }

    /// True if at least one slit is open.
    pub fn any_slit_open(&self) -> bool {
        self.left_open || self.right_open
    }

    /// True when the configuration produces interference fringes:
    /// both slits open, no detector armed, relational framing.
    pub fn interference_visible(&self) -> bool {
        self.both_slits_open()
            && !self.detector_active()
            && self.interpretation == Interpretation::Relational
    }
}

/// Rejected configuration parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `particle_count` outside [`MIN_PARTICLES`], [`MAX_PARTICLES`].
    ParticleCountOutOfRange(usize),
    /// `noise_level` outside [0, 1] (or NaN).
    NoiseLevelOutOfRange(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParticleCountOutOfRange(n) => write!(
                f,
                "particle count {} outside supported range {}..={}",
                n, MIN_PARTICLES, MAX_PARTICLES
            ),
            ConfigError::NoiseLevelOutOfRange(v) => {
                write!(f, "noise level {} outside supported range [0, 1]", v)
            }
        }
    }
}

impl Error for ConfigError {}
