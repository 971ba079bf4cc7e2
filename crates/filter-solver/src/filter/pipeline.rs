//! The six filter stages as pure functions.
//!
//! Every stage takes a color and a magnitude in CSS units (fractions for
//! percentage filters, degrees for hue-rotate) and returns a new color,
//! clamped to 0..=255 as CSS clips after each primitive.

use super::matrix::{self, Matrix3};
use crate::color::Rgb;

/// `c' = (v + c/255 * (1 - 2v)) * 255` per channel.
pub fn invert(color: Rgb, value: f64) -> Rgb {
    let channel = |c: f64| (value + c / 255.0 * (1.0 - 2.0 * value)) * 255.0;
    Rgb::new(channel(color.r), channel(color.g), channel(color.b)).clamped()
}

pub fn sepia(color: Rgb, value: f64) -> Rgb {
    multiply(color, &matrix::sepia(value))
}

pub fn saturate(color: Rgb, value: f64) -> Rgb {
    multiply(color, &matrix::saturate(value))
}

pub fn hue_rotate(color: Rgb, degrees: f64) -> Rgb {
    multiply(color, &matrix::hue_rotate(degrees))
}

/// Per-channel multiply.
pub fn brightness(color: Rgb, value: f64) -> Rgb {
    linear(color, value, 0.0)
}

/// Scale around mid-gray: `c' = c*v + 255*(0.5 - 0.5v)`.
pub fn contrast(color: Rgb, value: f64) -> Rgb {
    linear(color, value, -(0.5 * value) + 0.5)
}

fn linear(color: Rgb, slope: f64, intercept: f64) -> Rgb {
    let channel = |c: f64| c * slope + intercept * 255.0;
    Rgb::new(channel(color.r), channel(color.g), channel(color.b)).clamped()
}

fn multiply(color: Rgb, m: &Matrix3) -> Rgb {
    Rgb::new(
        color.r * m[0] + color.g * m[1] + color.b * m[2],
        color.r * m[3] + color.g * m[4] + color.b * m[5],
        color.r * m[6] + color.g * m[7] + color.b * m[8],
    )
    .clamped()
}
