//! The CSS filter chain: parameters, per-stage transforms and CSS text.
//!
//! Chain order is fixed: invert, sepia, saturate, hue-rotate, brightness,
//! contrast. The stages do not commute, and each one clips its output, so
//! the same six magnitudes in another order produce a different color.

mod css;
pub mod matrix;
pub mod pipeline;
mod params;

pub use css::ParseFilterError;
pub use params::{domains, Filter, FilterParams, DIMENSIONS, HUE_DEGREES_PER_UNIT};
