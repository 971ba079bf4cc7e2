//! Simultaneous perturbation stochastic approximation (SPSA).
//!
//! A gradient-free minimizer for a scalar loss over a fixed-size parameter
//! vector. Each iteration perturbs *every* dimension at once with a random
//! sign and estimates the gradient from just two loss evaluations, where a
//! per-dimension finite-difference scheme would need `2 * N`.
//!
//! The optimizer is generic: it knows nothing about colors or filters.
//! Callers supply an [`Objective`], a [`GainSchedule`] and one [`Domain`]
//! per dimension.
//!
//! # Example
//!
//! ```
//! use filter_solver::{Domain, GainSchedule, Spsa};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! // Minimize (x - 30)^2 + (y - 70)^2 on [0, 100]^2.
//! let objective = |p: &[f64; 2]| (p[0] - 30.0).powi(2) + (p[1] - 70.0).powi(2);
//! let spsa = Spsa::new(
//!     GainSchedule::new(5.0, 2.0, [1.0, 1.0]),
//!     [Domain::Clamp { max: 100.0 }; 2],
//!     500,
//! );
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let outcome = spsa.minimize(&objective, [50.0, 50.0], &mut rng);
//! assert!(outcome.loss < 1.0);
//! ```

mod domain;
mod schedule;

pub use domain::Domain;
pub use schedule::{GainSchedule, ALPHA, GAMMA};

use rand::Rng;

/// Scalar loss to be minimized over an `N`-dimensional vector.
///
/// Implemented for any `Fn(&[f64; N]) -> f64`, so closures work directly.
pub trait Objective<const N: usize> {
    fn loss(&self, params: &[f64; N]) -> f64;
}

impl<const N: usize, F> Objective<N> for F
where
    F: Fn(&[f64; N]) -> f64,
{
    #[inline]
    fn loss(&self, params: &[f64; N]) -> f64 {
        self(params)
    }
}

/// Mutable state of one optimizer run.
///
/// Owned by a single call to [`Spsa::minimize_observed`]; observers get a
/// shared view after every iteration.
#[derive(Debug, Clone)]
pub struct OptimizationState<'a, const N: usize> {
    /// Current iterate (always inside the domains).
    pub current: [f64; N],
    /// Best iterate seen so far.
    pub best: [f64; N],
    /// Loss of `best`. Never increases.
    pub best_loss: f64,
    /// Loss of `current`.
    pub current_loss: f64,
    /// Index of the iteration that produced this state.
    pub iteration: usize,
    /// Gain schedule driving the run.
    pub schedule: &'a GainSchedule<N>,
}

/// Result of an SPSA run.
#[derive(Debug, Clone, PartialEq)]
pub struct SpsaOutcome<const N: usize> {
    /// Best vector seen across all iterations (not necessarily the last).
    pub params: [f64; N],
    /// Loss of `params`.
    pub loss: f64,
    /// Number of objective evaluations performed.
    pub evaluations: usize,
}

/// SPSA minimizer with a fixed schedule, domain and iteration budget.
#[derive(Debug, Clone)]
pub struct Spsa<const N: usize> {
    schedule: GainSchedule<N>,
    domains: [Domain; N],
    iterations: usize,
}

impl<const N: usize> Spsa<N> {
    pub fn new(schedule: GainSchedule<N>, domains: [Domain; N], iterations: usize) -> Self {
        Self {
            schedule,
            domains,
            iterations,
        }
    }

    pub fn schedule(&self) -> &GainSchedule<N> {
        &self.schedule
    }

    pub fn domains(&self) -> &[Domain; N] {
        &self.domains
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Run the optimizer from `initial` and return the best point found.
    pub fn minimize<O, R>(&self, objective: &O, initial: [f64; N], rng: &mut R) -> SpsaOutcome<N>
    where
        O: Objective<N> + ?Sized,
        R: Rng + ?Sized,
    {
        self.minimize_observed(objective, initial, rng, |_| {})
    }

    /// Like [`minimize`](Self::minimize), calling `observer` after every iteration.
    pub fn minimize_observed<O, R, F>(
        &self,
        objective: &O,
        initial: [f64; N],
        rng: &mut R,
        mut observer: F,
    ) -> SpsaOutcome<N>
    where
        O: Objective<N> + ?Sized,
        R: Rng + ?Sized,
        F: FnMut(&OptimizationState<'_, N>),
    {
        if self.iterations == 0 {
            return SpsaOutcome {
                params: initial,
                loss: objective.loss(&initial),
                evaluations: 1,
            };
        }

        let mut state = OptimizationState {
            current: initial,
            best: initial,
            best_loss: f64::INFINITY,
            current_loss: f64::INFINITY,
            iteration: 0,
            schedule: &self.schedule,
        };
        let mut evaluations = 0;

        let mut deltas = [0.0; N];
        let mut high = [0.0; N];
        let mut low = [0.0; N];

        for k in 0..self.iterations {
            let ck = self.schedule.perturbation_at(k);

            for i in 0..N {
                // Never zero, so the gradient estimate below cannot divide by zero
                deltas[i] = if rng.gen::<bool>() { 1.0 } else { -1.0 };
                high[i] = state.current[i] + ck * deltas[i];
                low[i] = state.current[i] - ck * deltas[i];
            }

            let loss_diff = objective.loss(&high) - objective.loss(&low);
            evaluations += 2;

            for i in 0..N {
                let gradient = loss_diff / (2.0 * ck * deltas[i]);
                let step = self.schedule.step_at(i, k);
                state.current[i] = self.domains[i].fix(state.current[i] - step * gradient);
            }

            state.current_loss = objective.loss(&state.current);
            evaluations += 1;
            state.iteration = k;

            if state.current_loss < state.best_loss {
                state.best = state.current;
                state.best_loss = state.current_loss;
            }

            observer(&state);
        }

        SpsaOutcome {
            params: state.best,
            loss: state.best_loss,
            evaluations,
        }
    }
}
