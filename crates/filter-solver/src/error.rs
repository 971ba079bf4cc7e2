//! Top-level error type of the solver API.

use thiserror::Error;

use crate::color::ParseColorError;
use crate::filter::ParseFilterError;

/// Errors returned before any search runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Target color could not be parsed.
    #[error("invalid color format: {0}")]
    InvalidColorFormat(#[from] ParseColorError),

    /// Filter declaration could not be parsed.
    #[error("invalid filter: {0}")]
    InvalidFilter(#[from] ParseFilterError),
}

/// A solver schedule that cannot drive a search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `c` must be positive and finite or every gradient estimate is NaN.
    #[error("{phase} perturbation must be positive and finite, got {value}")]
    InvalidPerturbation { phase: &'static str, value: f64 },

    #[error("{phase} step size {index} must be finite and non-negative, got {value}")]
    InvalidStepSize {
        phase: &'static str,
        index: usize,
        value: f64,
    },

    #[error("wide stability must be finite and non-negative, got {0}")]
    InvalidStability(f64),

    #[error("{phase} iterations must be at least 1")]
    ZeroIterations { phase: &'static str },

    #[error("wide early exit loss must not be NaN")]
    InvalidEarlyExitLoss,
}
