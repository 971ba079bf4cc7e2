use filter_solver::{Rgb, Solution, Solver, SolverConfig};
use thiserror::Error;

use super::solution_cache::{CacheKey, SolutionCache};

/// Errors from running a solve off the async runtime
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("solver task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Runs solves on the blocking pool, with an optional cache for seeded requests
pub struct SolverService {
    config: SolverConfig,
    cache: Option<SolutionCache>,
}

impl SolverService {
    /// `cache_capacity` of `None` disables caching.
    pub fn new(config: SolverConfig, cache_capacity: Option<usize>) -> Self {
        Self {
            config,
            cache: cache_capacity.map(SolutionCache::with_max_entries),
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn cache(&self) -> Option<&SolutionCache> {
        self.cache.as_ref()
    }

    /// Solve for `target`. A request `seed` overrides the configured one.
    pub async fn solve(&self, target: Rgb, seed: Option<u64>) -> Result<Solution, SolveError> {
        let mut config = self.config.clone();
        if let Some(seed) = seed {
            config.seed = Some(seed);
        }

        let key = config.seed.map(|seed| CacheKey::new(target, seed));
        if let (Some(cache), Some(key)) = (&self.cache, &key) {
            if let Some(solution) = cache.get(key).await {
                tracing::debug!(color = %target, seed = key.seed, "Serving cached solution");
                return Ok(solution);
            }
        }

        let start = std::time::Instant::now();
        let solver = Solver::new(config);
        let solution = tokio::task::spawn_blocking(move || solver.solve(target)).await?;
        tracing::info!(
            color = %target,
            loss = solution.loss,
            quality = %solution.quality,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Solved filter"
        );

        if let (Some(cache), Some(key)) = (&self.cache, key) {
            cache.store(key, solution.clone()).await;
        }

        Ok(solution)
    }
}
