//! Color types and conversion utilities
//!
//! - [`Rgb`]: channels on the 0..=255 scale, parsed from hex or `r,g,b`
//! - [`Hsl`]: derived hue/saturation/lightness, used by the loss function
//!
//! # Example
//!
//! ```
//! use filter_solver::{Hsl, Rgb};
//!
//! let target: Rgb = "#FF5733".parse().unwrap();
//! let hsl = Hsl::from(target);
//! assert!((hsl.l - 60.0).abs() < 1e-9);
//! ```

mod error;
mod hsl;
mod rgb;

pub use error::ParseColorError;
pub use hsl::{rgb_to_hsl, Hsl};
pub use rgb::{hex_to_rgb, rgb_to_hex, Rgb};
