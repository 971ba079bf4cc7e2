//! Gain schedule: the decaying perturbation and step sequences.

/// Step-size decay exponent.
pub const ALPHA: f64 = 1.0;

/// Perturbation decay exponent.
pub const GAMMA: f64 = 1.0 / 6.0;

/// Constants controlling how far an SPSA run probes and how far it steps.
///
/// At iteration `k` (0-based):
///
/// ```text
/// ck    = c / (k + 1)^gamma
/// ak[i] = a[i] / (A + k + 1)^alpha
/// ```
///
/// Step sizes are per dimension because the dimensions live on very
/// different scales (saturate spans 0..7500, invert only 0..100).
#[derive(Debug, Clone, PartialEq)]
pub struct GainSchedule<const N: usize> {
    /// Stability offset `A`, delays the decay of the step size.
    pub stability: f64,
    /// Perturbation scale `c`.
    pub perturbation: f64,
    /// Per-dimension step sizes `a[i]`.
    pub step_sizes: [f64; N],
    pub alpha: f64,
    pub gamma: f64,
}

impl<const N: usize> GainSchedule<N> {
    /// Create a schedule with the standard exponents ([`ALPHA`], [`GAMMA`]).
    pub fn new(stability: f64, perturbation: f64, step_sizes: [f64; N]) -> Self {
        Self {
            stability,
            perturbation,
            step_sizes,
            alpha: ALPHA,
            gamma: GAMMA,
        }
    }

    /// Perturbation magnitude `ck` for iteration `k`.
    #[inline]
    pub fn perturbation_at(&self, k: usize) -> f64 {
        self.perturbation / ((k + 1) as f64).powf(self.gamma)
    }

    /// Step size `ak[i]` for dimension `i` at iteration `k`.
    #[inline]
    pub fn step_at(&self, i: usize, k: usize) -> f64 {
        self.step_sizes[i] / (self.stability + k as f64 + 1.0).powf(self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_iteration_is_undecayed_perturbation() {
        let schedule = GainSchedule::new(5.0, 15.0, [60.0, 1.2]);
        assert_eq!(schedule.perturbation_at(0), 15.0);
        assert!((schedule.step_at(0, 0) - 10.0).abs() < 1e-12);
        assert!((schedule.step_at(1, 0) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_decay_follows_exponents() {
        let schedule = GainSchedule::new(5.0, 15.0, [60.0]);
        // (63 + 1)^(1/6) == 2
        assert!((schedule.perturbation_at(63) - 7.5).abs() < 1e-12);
        // 60 / (5 + 994 + 1)
        assert!((schedule.step_at(0, 994) - 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_sequences_are_strictly_decreasing() {
        let schedule = GainSchedule::new(2.0, 2.0, [1.0]);
        for k in 0..500 {
            assert!(schedule.perturbation_at(k + 1) < schedule.perturbation_at(k));
            assert!(schedule.step_at(0, k + 1) < schedule.step_at(0, k));
        }
    }
}
