//! 3x3 color matrices for the matrix-based CSS filter primitives.
//!
//! Coefficients follow the Filter Effects specification, which is what
//! browsers implement. They must match exactly or the solved filter chain
//! renders a different color in the browser than the one we optimized for.

/// Row-major 3x3 matrix applied to an (r, g, b) column vector.
pub type Matrix3 = [f64; 9];

pub const IDENTITY: Matrix3 = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

/// Sepia matrix blended with identity: `value = 0` is identity, `1` full sepia.
pub fn sepia(value: f64) -> Matrix3 {
    let inv = 1.0 - value;
    [
        0.393 + 0.607 * inv,
        0.769 - 0.769 * inv,
        0.189 - 0.189 * inv,
        0.349 - 0.349 * inv,
        0.686 + 0.314 * inv,
        0.168 - 0.168 * inv,
        0.272 - 0.272 * inv,
        0.534 - 0.534 * inv,
        0.131 + 0.869 * inv,
    ]
}

/// Luminance-preserving saturation: `1` is identity, `0` grayscale.
pub fn saturate(value: f64) -> Matrix3 {
    [
        0.213 + 0.787 * value,
        0.715 - 0.715 * value,
        0.072 - 0.072 * value,
        0.213 - 0.213 * value,
        0.715 + 0.285 * value,
        0.072 - 0.072 * value,
        0.213 - 0.213 * value,
        0.715 - 0.715 * value,
        0.072 + 0.928 * value,
    ]
}

/// Hue rotation by `degrees` around the luminance axis.
pub fn hue_rotate(degrees: f64) -> Matrix3 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    [
        0.213 + cos * 0.787 - sin * 0.213,
        0.715 - cos * 0.715 - sin * 0.715,
        0.072 - cos * 0.072 + sin * 0.928,
        0.213 - cos * 0.213 + sin * 0.143,
        0.715 + cos * 0.285 + sin * 0.140,
        0.072 - cos * 0.072 - sin * 0.283,
        0.213 - cos * 0.213 - sin * 0.787,
        0.715 - cos * 0.715 + sin * 0.715,
        0.072 + cos * 0.928 + sin * 0.072,
    ]
}
