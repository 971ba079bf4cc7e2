//! Error types for color parsing

use thiserror::Error;

/// Error type for parsing a target color.
///
/// Returned when a string is neither a 3/6-digit hex color nor a
/// comma-separated `r,g,b` triple of 8-bit channel values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3 or 6 digits after stripping '#')
    #[error("invalid hex color length (expected 3 or 6 digits)")]
    InvalidLength,

    /// Non-hexadecimal character in a hex color
    #[error("invalid hex character: {0:?}")]
    InvalidDigit(char),

    /// Decimal triple with the wrong number of components
    #[error("expected 3 comma-separated channels, found {0}")]
    WrongComponentCount(usize),

    /// Decimal channel that is not an integer in 0..=255
    #[error("invalid channel value {0:?} (expected an integer 0-255)")]
    InvalidChannel(String),
}
