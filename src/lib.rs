//! cssfilter - CSS filter chains for any color
//!
//! Command-line tool and HTTP service around the `filter-solver` crate.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
