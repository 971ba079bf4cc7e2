pub mod solution_cache;
pub mod solver_service;

pub use solution_cache::{CacheKey, SolutionCache};
pub use solver_service::{SolveError, SolverService};
