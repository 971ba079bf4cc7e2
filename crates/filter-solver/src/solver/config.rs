//! Solver configuration.
//!
//! Every tuning constant of the two-phase schedule is a named default here
//! and can be overridden, either through the builder methods or by
//! deserializing a (partial) config with serde.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::filter::DIMENSIONS;

/// Wide phase: stability offset `A`.
pub const WIDE_STABILITY: f64 = 5.0;
/// Wide phase: perturbation scale `c`.
pub const WIDE_PERTURBATION: f64 = 15.0;
/// Wide phase: step sizes, scaled to each domain (saturate's is ~75x invert's).
pub const WIDE_STEP_SIZES: [f64; DIMENSIONS] = [60.0, 180.0, 18000.0, 600.0, 1.2, 1.2];
/// Wide phase: iterations per restart.
pub const WIDE_ITERATIONS: usize = 1000;
/// Wide phase: maximum number of independent restarts.
pub const DEFAULT_RESTARTS: usize = 3;
/// Wide phase: stop restarting once a restart reaches this loss.
pub const DEFAULT_EARLY_EXIT_LOSS: f64 = 25.0;

/// Narrow phase: perturbation scale `c`.
pub const NARROW_PERTURBATION: f64 = 2.0;
/// Narrow phase: step sizes as fractions of `(A + 1)`, `A` being the wide loss.
pub const NARROW_STEP_WEIGHTS: [f64; DIMENSIONS] = [0.25, 0.25, 1.0, 0.25, 0.25, 0.2];
/// Narrow phase: iterations.
pub const NARROW_ITERATIONS: usize = 500;

/// Configuration of the wide (exploratory) phase.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidePhase {
    pub stability: f64,
    pub perturbation: f64,
    pub step_sizes: [f64; DIMENSIONS],
    pub iterations: usize,
    pub restarts: usize,
    pub early_exit_loss: f64,
}

impl Default for WidePhase {
    fn default() -> Self {
        Self {
            stability: WIDE_STABILITY,
            perturbation: WIDE_PERTURBATION,
            step_sizes: WIDE_STEP_SIZES,
            iterations: WIDE_ITERATIONS,
            restarts: DEFAULT_RESTARTS,
            early_exit_loss: DEFAULT_EARLY_EXIT_LOSS,
        }
    }
}

/// Configuration of the narrow (refinement) phase.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NarrowPhase {
    pub perturbation: f64,
    pub step_weights: [f64; DIMENSIONS],
    pub iterations: usize,
}

impl Default for NarrowPhase {
    fn default() -> Self {
        Self {
            perturbation: NARROW_PERTURBATION,
            step_weights: NARROW_STEP_WEIGHTS,
            iterations: NARROW_ITERATIONS,
        }
    }
}

/// Complete solver configuration.
///
/// # Example
///
/// ```
/// use filter_solver::SolverConfig;
///
/// let config = SolverConfig::new().seed(42).restarts(5);
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.wide.restarts, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Fixed seed for reproducible output. `None` draws fresh entropy per solve.
    pub seed: Option<u64>,
    /// Run wide-phase restarts concurrently (disables the early exit).
    pub parallel_restarts: bool,
    pub wide: WidePhase,
    pub narrow: NarrowPhase,
}

impl SolverConfig {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[inline]
    pub fn parallel_restarts(mut self, enabled: bool) -> Self {
        self.parallel_restarts = enabled;
        self
    }

    /// Set the maximum number of wide-phase restarts (at least one always runs).
    #[inline]
    pub fn restarts(mut self, restarts: usize) -> Self {
        self.wide.restarts = restarts;
        self
    }

    #[inline]
    pub fn early_exit_loss(mut self, loss: f64) -> Self {
        self.wide.early_exit_loss = loss;
        self
    }

    #[inline]
    pub fn wide_iterations(mut self, iterations: usize) -> Self {
        self.wide.iterations = iterations;
        self
    }

    #[inline]
    pub fn narrow_iterations(mut self, iterations: usize) -> Self {
        self.narrow.iterations = iterations;
        self
    }

    /// Check that the schedule can drive a search.
    ///
    /// A zero or non-finite perturbation makes every gradient estimate NaN,
    /// and the search would return the untouched start point with an
    /// infinite loss.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let wide = &self.wide;
        if !(wide.stability.is_finite() && wide.stability >= 0.0) {
            return Err(ConfigError::InvalidStability(wide.stability));
        }
        check_perturbation("wide", wide.perturbation)?;
        check_step_sizes("wide", &wide.step_sizes)?;
        if wide.iterations == 0 {
            return Err(ConfigError::ZeroIterations { phase: "wide" });
        }
        if wide.early_exit_loss.is_nan() {
            return Err(ConfigError::InvalidEarlyExitLoss);
        }

        let narrow = &self.narrow;
        check_perturbation("narrow", narrow.perturbation)?;
        check_step_sizes("narrow", &narrow.step_weights)?;
        if narrow.iterations == 0 {
            return Err(ConfigError::ZeroIterations { phase: "narrow" });
        }
        Ok(())
    }
}

fn check_perturbation(phase: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidPerturbation { phase, value })
    }
}

fn check_step_sizes(phase: &'static str, sizes: &[f64; DIMENSIONS]) -> Result<(), ConfigError> {
    match sizes
        .iter()
        .position(|value| !(value.is_finite() && *value >= 0.0))
    {
        Some(index) => Err(ConfigError::InvalidStepSize {
            phase,
            index,
            value: sizes[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = SolverConfig::default();
        assert_eq!(config.seed, None);
        assert!(!config.parallel_restarts);
        assert_eq!(config.wide.stability, 5.0);
        assert_eq!(config.wide.perturbation, 15.0);
        assert_eq!(config.wide.step_sizes, [60.0, 180.0, 18000.0, 600.0, 1.2, 1.2]);
        assert_eq!(config.wide.iterations, 1000);
        assert_eq!(config.wide.restarts, 3);
        assert_eq!(config.wide.early_exit_loss, 25.0);
        assert_eq!(config.narrow.perturbation, 2.0);
        assert_eq!(config.narrow.step_weights, [0.25, 0.25, 1.0, 0.25, 0.25, 0.2]);
        assert_eq!(config.narrow.iterations, 500);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builder_chaining() {
        let config = SolverConfig::new()
            .seed(7)
            .parallel_restarts(true)
            .restarts(1)
            .early_exit_loss(10.0)
            .wide_iterations(200)
            .narrow_iterations(100);

        assert_eq!(config.seed, Some(7));
        assert!(config.parallel_restarts);
        assert_eq!(config.wide.restarts, 1);
        assert_eq!(config.wide.early_exit_loss, 10.0);
        assert_eq!(config.wide.iterations, 200);
        assert_eq!(config.narrow.iterations, 100);
        // Untouched values keep their defaults
        assert_eq!(config.wide.perturbation, WIDE_PERTURBATION);
    }

    #[test]
    fn test_rejects_bad_perturbation() {
        for value in [0.0, -15.0, f64::NAN, f64::INFINITY] {
            let mut config = SolverConfig::new();
            config.wide.perturbation = value;
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::InvalidPerturbation { phase: "wide", .. })
                ),
                "wide perturbation {value} accepted"
            );

            let mut config = SolverConfig::new();
            config.narrow.perturbation = value;
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::InvalidPerturbation { phase: "narrow", .. })
                ),
                "narrow perturbation {value} accepted"
            );
        }
    }

    #[test]
    fn test_rejects_bad_step_sizes() {
        let mut config = SolverConfig::new();
        config.wide.step_sizes[2] = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidStepSize {
                phase: "wide",
                index: 2,
                ..
            })
        ));

        let mut config = SolverConfig::new();
        config.narrow.step_weights[5] = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidStepSize {
                phase: "narrow",
                index: 5,
                ..
            })
        ));

        // A zero step freezes a dimension but keeps the search well defined
        let mut config = SolverConfig::new();
        config.wide.step_sizes[0] = 0.0;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_stability() {
        for value in [-1.0, f64::NAN, f64::INFINITY] {
            let mut config = SolverConfig::new();
            config.wide.stability = value;
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidStability(_))),
                "stability {value} accepted"
            );
        }
    }

    #[test]
    fn test_rejects_zero_iterations() {
        assert_eq!(
            SolverConfig::new().wide_iterations(0).validate(),
            Err(ConfigError::ZeroIterations { phase: "wide" })
        );
        assert_eq!(
            SolverConfig::new().narrow_iterations(0).validate(),
            Err(ConfigError::ZeroIterations { phase: "narrow" })
        );
    }

    #[test]
    fn test_rejects_nan_early_exit() {
        assert_eq!(
            SolverConfig::new().early_exit_loss(f64::NAN).validate(),
            Err(ConfigError::InvalidEarlyExitLoss)
        );
        // Infinite and negative thresholds are legitimate: always or never exit
        assert_eq!(SolverConfig::new().early_exit_loss(f64::INFINITY).validate(), Ok(()));
        assert_eq!(SolverConfig::new().early_exit_loss(-1.0).validate(), Ok(()));
    }
}
