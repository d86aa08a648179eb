//! Synthetic detection-pattern generation.
//!
//! Turns a slit configuration into a discretized intensity profile over
//! the screen. The base shape depends on which slits are open, whether a
//! detector is armed, and the interpretation mode:
//!
//! - both open, undetected, relational: `cos(kx)² · exp(-x²/σ)` fringes
//! - both open, otherwise: sum of two single-slit Gaussian bumps
//!   (a detector collapses fringes regardless of mode; the classical
//!   mode shows the two-bump profile by policy)
//! - one open: a single bump offset toward that slit
//! - neither open: all-zero
//!
//! Gaussian noise scaled by the configured level is added per point and
//! the result is floored at zero. With both slits closed the profile is
//! therefore the clamped noise floor; callers must not assume the total
//! intensity is positive.

use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::config::{ConfigError, SlitConfig};

/// Number of discretization points across the screen.
pub const SCREEN_SAMPLES: usize = 500;
/// Left edge of the screen domain.
pub const SCREEN_MIN: f64 = -1.0;
/// Right edge of the screen domain.
pub const SCREEN_MAX: f64 = 1.0;

/// Fringe wavenumber k in cos(kx)².
const FRINGE_WAVENUMBER: f64 = 20.0;
/// Envelope falloff a in exp(-a·x²).
const ENVELOPE_FALLOFF: f64 = 5.0;
/// Offset of each single-slit bump center from the screen center.
const SLIT_OFFSET: f64 = 0.3;
/// Variance-like width of each single-slit bump.
const BUMP_WIDTH: f64 = 0.02;
/// Noise standard deviation at noise_level = 1.0.
const NOISE_SIGMA_SCALE: f64 = 0.1;

/// Discretized intensity-over-position curve for one render.
#[derive(Debug, Clone)]
pub struct ScreenProfile {
    /// Screen positions, evenly spaced over [`SCREEN_MIN`, `SCREEN_MAX`].
    pub positions: Vec<f64>,
    /// Non-negative intensity at each position, same length as `positions`.
    pub intensity: Vec<f64>,
}

impl ScreenProfile {
    /// Sum of all intensities. Zero means a dark screen.
    pub fn total_intensity(&self) -> f64 {
        self.intensity.iter().sum()
    }

    /// True if no point carries any intensity.
    pub fn is_dark(&self) -> bool {
        self.total_intensity() <= 0.0
    }
}

/// Build the fixed screen discretization.
pub fn screen_positions() -> Vec<f64> {
    let step = (SCREEN_MAX - SCREEN_MIN) / (SCREEN_SAMPLES - 1) as f64;
    (0..SCREEN_SAMPLES).map(|i| SCREEN_MIN + i as f64 * step).collect()
}

/// Noise-free base intensity at a single screen position.
fn base_intensity(config: &SlitConfig, x: f64) -> f64 {
    let left_bump = (-(x + SLIT_OFFSET).powi(2) / BUMP_WIDTH).exp();
    let right_bump = (-(x - SLIT_OFFSET).powi(2) / BUMP_WIDTH).exp();

    match (config.left_open, config.right_open) {
        (false, false) => 0.0,
        (true, false) => left_bump,
        (false, true) => right_bump,
        (true, true) => {
            if config.interference_visible() {
                let fringe = (FRINGE_WAVENUMBER * x).cos().powi(2);
                let envelope = (-ENVELOPE_FALLOFF * x * x).exp();
                fringe * envelope
            } else {
                left_bump + right_bump
            }
        }
    }
}

/// Compute the screen profile for a configuration.
///
/// Pure apart from the noise draws taken from `rng`. Validates the
/// configuration first; a both-slits-closed configuration is valid and
/// yields the (clamped) noise floor, not an error.
pub fn compute_profile<R: Rng>(
    config: &SlitConfig,
    rng: &mut R,
) -> Result<ScreenProfile, ConfigError> {
    config.validate()?;

    let positions = screen_positions();
    let mut intensity: Vec<f64> = positions.iter().map(|&x| base_intensity(config, x)).collect();

    let sigma = config.noise_level * NOISE_SIGMA_SCALE;
    if sigma > 0.0 {
        // sigma is finite and positive here, so the constructor cannot fail
        let noise = Normal::new(0.0, sigma).expect("validated noise level");
        for value in intensity.iter_mut() {
            *value += noise.sample(rng);
        }
    }

    for value in intensity.iter_mut() {
        *value = value.max(0.0);
    }

    debug!(
        "profile: left={} right={} detector={} mode={} total_intensity={:.3}",
        config.left_open,
        config.right_open,
        config.detector_active(),
        config.interpretation.label(),
        intensity.iter().sum::<f64>()
    );

    Ok(ScreenProfile { positions, intensity })
}

/// Count strict local maxima above a threshold.
///
/// Used to distinguish the many-peaked fringe profile from the
/// at-most-two-peaked collapsed profile.
pub fn count_local_maxima(values: &[f64], threshold: f64) -> usize {
    values
        .windows(3)
        .filter(|w| w[1] > w[0] && w[1] > w[2] && w[1] > threshold)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Interpretation;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn profile_for(config: &SlitConfig, seed: u64) -> ScreenProfile {
        let mut rng = StdRng::seed_from_u64(seed);
        compute_profile(config, &mut rng).expect("valid config")
    }

    #[test]
    fn positions_and_intensity_have_equal_length() {
        let profile = profile_for(&SlitConfig::default(), 1);
        assert_eq!(profile.positions.len(), profile.intensity.len());
        assert_eq!(profile.positions.len(), SCREEN_SAMPLES);
    }

    #[test]
    fn positions_span_screen_domain() {
        let positions = screen_positions();
        assert!((positions[0] - SCREEN_MIN).abs() < 1e-12);
        assert!((positions[SCREEN_SAMPLES - 1] - SCREEN_MAX).abs() < 1e-12);
    }

    #[test]
    fn intensity_is_non_negative_for_any_noise_draw() {
        let mut config = SlitConfig::default();
        config.noise_level = 1.0;
        for seed in 0..20 {
            let profile = profile_for(&config, seed);
            assert!(
                profile.intensity.iter().all(|&v| v >= 0.0),
                "negative intensity at seed {}",
                seed
            );
        }
    }

    #[test]
    fn closed_slits_zero_noise_gives_all_zero_profile() {
        let mut config = SlitConfig::default();
        config.left_open = false;
        config.right_open = false;
        config.noise_level = 0.0;
        let profile = profile_for(&config, 3);
        assert!(profile.is_dark());
        assert!(profile.intensity.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn closed_slits_with_noise_stays_clamped() {
        let mut config = SlitConfig::default();
        config.left_open = false;
        config.right_open = false;
        config.noise_level = 0.5;
        let profile = profile_for(&config, 4);
        assert!(profile.intensity.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn relational_double_slit_shows_many_fringes() {
        let mut config = SlitConfig::default();
        config.noise_level = 0.0;
        let profile = profile_for(&config, 5);
        let peaks = count_local_maxima(&profile.intensity, 0.01);
        assert!(peaks >= 5, "expected many fringe peaks, found {}", peaks);
    }

    #[test]
    fn detector_collapses_to_at_most_two_peaks() {
        let mut config = SlitConfig::default();
        config.detector_left = true;
        config.noise_level = 0.0;
        let profile = profile_for(&config, 6);
        let peaks = count_local_maxima(&profile.intensity, 0.01);
        assert!(peaks <= 2, "collapsed profile has {} peaks", peaks);
    }

    #[test]
    fn classical_double_slit_shows_two_bumps() {
        let mut config = SlitConfig::default();
        config.interpretation = Interpretation::Classical;
        config.noise_level = 0.0;
        let profile = profile_for(&config, 7);
        let peaks = count_local_maxima(&profile.intensity, 0.01);
        assert!(peaks <= 2, "classical profile has {} peaks", peaks);
    }

    #[test]
    fn left_only_bump_sits_left_of_center() {
        let mut config = SlitConfig::default();
        config.right_open = false;
        config.noise_level = 0.0;
        let profile = profile_for(&config, 8);
        let (argmax, _) = profile
            .intensity
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |acc, (i, &v)| if v > acc.1 { (i, v) } else { acc });
        assert!(
            profile.positions[argmax] < 0.0,
            "left-slit peak at {}",
            profile.positions[argmax]
        );
    }

    #[test]
    fn right_only_bump_mirrors_left() {
        let mut left = SlitConfig::default();
        left.right_open = false;
        left.noise_level = 0.0;
        let mut right = SlitConfig::default();
        right.left_open = false;
        right.noise_level = 0.0;
        let pl = profile_for(&left, 9);
        let pr = profile_for(&right, 9);
        let n = pl.intensity.len();
        for i in 0..n {
            assert!(
                (pl.intensity[i] - pr.intensity[n - 1 - i]).abs() < 1e-9,
                "mirror mismatch at index {}",
                i
            );
        }
    }

    #[test]
    fn zero_noise_profile_is_deterministic() {
        let mut config = SlitConfig::default();
        config.noise_level = 0.0;
        let a = profile_for(&config, 1);
        let b = profile_for(&config, 2);
        assert_eq!(a.intensity, b.intensity);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = SlitConfig::default();
        config.particle_count = 0;
        let mut rng = StdRng::seed_from_u64(0);
        assert!(compute_profile(&config, &mut rng).is_err());
    }

    #[test]
    fn count_local_maxima_basics() {
        assert_eq!(count_local_maxima(&[0.0, 1.0, 0.0], 0.5), 1);
        assert_eq!(count_local_maxima(&[0.0, 1.0, 0.0, 2.0, 0.0], 0.5), 2);
        assert_eq!(count_local_maxima(&[1.0, 1.0, 1.0], 0.5), 0);
        assert_eq!(count_local_maxima(&[], 0.5), 0);
    }
}
