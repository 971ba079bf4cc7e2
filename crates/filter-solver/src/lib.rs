//! filter-solver: CSS filter chains that recolor black to any target color
//!
//! Icons drawn in black can be tinted with nothing but a CSS `filter`
//! declaration. This crate searches for the magnitudes of a fixed chain of
//! six filter functions so that, applied to black, the chain renders a color
//! as close as possible to a target.
//!
//! # Quick Start
//!
//! ```no_run
//! let solution = filter_solver::solve("#FF5733").unwrap();
//! println!("{}", solution.filter);
//! println!("loss {:.1} ({})", solution.loss, solution.quality);
//! ```
//!
//! For reproducible output, configure a seed through [`SolverConfig`]:
//!
//! ```no_run
//! use filter_solver::{Rgb, Solver, SolverConfig};
//!
//! let solver = Solver::new(SolverConfig::new().seed(42));
//! let target: Rgb = "255,87,51".parse().unwrap();
//! let a = solver.solve(target);
//! let b = solver.solve(target);
//! assert_eq!(a.filter, b.filter);
//! ```
//!
//! # The Filter Chain
//!
//! The chain is always applied in this order:
//!
//! ```text
//! black -> invert -> sepia -> saturate -> hue-rotate -> brightness -> contrast
//! ```
//!
//! Every stage is a pure function of its input color (see [`filter::pipeline`]).
//! Each stage clamps its output to 0..=255 before the next one runs, exactly
//! as a browser does, so the chain is not a single linear map.
//!
//! Parameters live in *native units* ([`FilterParams`]): percentages for the
//! five percent filters, and a 0..100 scale for hue rotation (3.6 degrees per
//! unit) so every dimension has a comparable step size.
//!
//! | Filter | Domain | Neutral |
//! |--------|--------|---------|
//! | invert | 0..=100 | 0 |
//! | sepia | 0..=100 | 0 |
//! | saturate | 0..=7500 | 100 |
//! | hue-rotate | 0..100, wraps | 0 |
//! | brightness | 0..=200 | 100 |
//! | contrast | 0..=200 | 100 |
//!
//! # Loss
//!
//! [`ColorLoss`] is the L1 distance between the rendered color and the
//! target over R, G, B (0..255) plus H (0..360), S and L (0..100). The gain
//! schedules are tuned against these mixed scales, so they are not normalized.
//!
//! # Search
//!
//! [`Solver`] runs [`Spsa`] in two phases:
//!
//! 1. **Wide**: from the middle of every domain with large steps, restarted
//!    up to [`DEFAULT_RESTARTS`] times, stopping early once a restart reaches
//!    [`DEFAULT_EARLY_EXIT_LOSS`].
//! 2. **Narrow**: from the wide result, with the stability offset set to the
//!    remaining loss and step sizes proportional to it.
//!
//! Results below a loss of 1 are visually exact; see [`Quality`].

pub mod color;
pub mod error;
pub mod filter;
pub mod loss;
pub mod solver;
pub mod spsa;


pub use color::{hex_to_rgb, rgb_to_hex, rgb_to_hsl, Hsl, ParseColorError, Rgb};
pub use error::{ConfigError, SolverError};
pub use filter::{Filter, FilterParams, ParseFilterError};
pub use loss::{ColorLoss, TargetColor};
pub use solver::{
    preview, solve, Quality, Solution, Solver, SolverConfig, DEFAULT_EARLY_EXIT_LOSS, DEFAULT_RESTARTS,
};
pub use spsa::{Domain, GainSchedule, Objective, OptimizationState, Spsa, SpsaOutcome};
