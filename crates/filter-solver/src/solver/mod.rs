//! Two-phase search for a filter chain matching a target color.
//!
//! The wide phase runs SPSA from the middle of every domain with large,
//! domain-scaled steps, restarting a few times and keeping the best result.
//! The narrow phase starts from that result with steps shrunk in proportion
//! to the loss still left to remove.

mod config;
mod solution;

pub use config::{
    NarrowPhase, SolverConfig, WidePhase, DEFAULT_EARLY_EXIT_LOSS, DEFAULT_RESTARTS,
    NARROW_ITERATIONS, NARROW_PERTURBATION, NARROW_STEP_WEIGHTS, WIDE_ITERATIONS,
    WIDE_PERTURBATION, WIDE_STABILITY, WIDE_STEP_SIZES,
};
pub use solution::{Quality, Solution};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::color::Rgb;
use crate::error::SolverError;
use crate::filter::{domains, FilterParams, DIMENSIONS};
use crate::loss::{ColorLoss, TargetColor};
use crate::spsa::{GainSchedule, Spsa, SpsaOutcome};

type Outcome = SpsaOutcome<DIMENSIONS>;

/// Filter chain solver.
///
/// Cheap to construct and immutable; a single instance can serve any number
/// of solves, including concurrently.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve for `target`.
    ///
    /// Uses the configured seed when there is one, fresh entropy otherwise.
    pub fn solve(&self, target: Rgb) -> Solution {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.solve_with_rng(target, &mut rng)
    }

    /// Solve for `target`, drawing every random decision from `rng`.
    pub fn solve_with_rng<R: Rng + ?Sized>(&self, target: Rgb, rng: &mut R) -> Solution {
        let loss = ColorLoss::new(TargetColor::new(target));

        let wide = self.solve_wide(&loss, rng);
        let narrow = self.solve_narrow(&loss, &wide, rng);

        // Narrow starts from the wide best but only tracks its own iterates
        let best = if narrow.loss <= wide.loss { narrow } else { wide };

        tracing::debug!(color = %target, loss = best.loss, "solve finished");
        Solution::new(target, FilterParams::from_array(best.params), best.loss)
    }

    fn solve_wide<R: Rng + ?Sized>(&self, loss: &ColorLoss, rng: &mut R) -> Outcome {
        let wide = &self.config.wide;
        let spsa = Spsa::new(
            GainSchedule::new(wide.stability, wide.perturbation, wide.step_sizes),
            domains(),
            wide.iterations,
        );
        let initial = FilterParams::midpoint().to_array();

        // Seeds are drawn before any restart runs so both execution modes
        // explore the same streams. At least one restart always runs.
        let first_seed: u64 = rng.gen();
        let other_seeds: Vec<u64> = (1..wide.restarts).map(|_| rng.gen()).collect();

        let run = |restart: usize, seed: u64| {
            let outcome = spsa.minimize(loss, initial, &mut StdRng::seed_from_u64(seed));
            tracing::debug!(restart, seed, loss = outcome.loss, "wide restart finished");
            outcome
        };

        if self.config.parallel_restarts {
            let (first, rest) = rayon::join(
                || run(0, first_seed),
                || {
                    other_seeds
                        .par_iter()
                        .enumerate()
                        .map(|(i, &seed)| run(i + 1, seed))
                        .collect::<Vec<Outcome>>()
                },
            );
            return rest.into_iter().fold(first, better);
        }

        let mut best = run(0, first_seed);
        for (i, &seed) in other_seeds.iter().enumerate() {
            if best.loss <= wide.early_exit_loss {
                tracing::debug!(restarts = i + 1, loss = best.loss, "wide phase exited early");
                break;
            }
            best = better(best, run(i + 1, seed));
        }
        best
    }

    fn solve_narrow<R: Rng + ?Sized>(
        &self,
        loss: &ColorLoss,
        wide: &Outcome,
        rng: &mut R,
    ) -> Outcome {
        let spsa = Spsa::new(
            self.narrow_schedule(wide.loss),
            domains(),
            self.config.narrow.iterations,
        );
        let outcome = spsa.minimize(loss, wide.params, rng);
        tracing::debug!(start = wide.loss, loss = outcome.loss, "narrow phase finished");
        outcome
    }

    /// Narrow gains: `A` is the loss left after the wide phase and the step
    /// sizes are the configured weights times `A + 1`.
    fn narrow_schedule(&self, wide_loss: f64) -> GainSchedule<DIMENSIONS> {
        let narrow = &self.config.narrow;
        let step_sizes = narrow.step_weights.map(|w| w * (wide_loss + 1.0));
        GainSchedule::new(wide_loss, narrow.perturbation, step_sizes)
    }
}

/// Keeps `current` unless `candidate` is strictly better, so ties go to
/// the earlier restart.
fn better(current: Outcome, candidate: Outcome) -> Outcome {
    if candidate.loss < current.loss {
        candidate
    } else {
        current
    }
}

/// Solve for a color given as hex (`#RRGGBB`, `RGB`) or an `r,g,b` triple,
/// using the default configuration.
///
/// # Example
///
/// ```no_run
/// let solution = filter_solver::solve("#FF5733").unwrap();
/// println!("{}", solution.filter);
/// ```
pub fn solve(color: &str) -> Result<Solution, SolverError> {
    let target: Rgb = color.parse()?;
    Ok(Solver::default().solve(target))
}

/// Color a filter declaration renders from black.
///
/// ```
/// let rgb = filter_solver::preview("filter: invert(100%);").unwrap();
/// assert_eq!(rgb.to_hex(), "#FFFFFF");
/// ```
pub fn preview(filter: &str) -> Result<Rgb, SolverError> {
    let params: FilterParams = filter.parse()?;
    Ok(params.preview())
}
