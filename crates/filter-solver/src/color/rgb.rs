//! RGB color type
//!
//! Channels are stored as `f64` on the 0..=255 scale. Filter stages produce
//! fractional values and clamp, but never round, so the unrounded value is
//! what the loss function compares against the target.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;
use super::hsl::Hsl;

/// A color with red, green and blue channels on the 0..=255 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    /// Red channel (0.0..=255.0)
    pub r: f64,
    /// Green channel (0.0..=255.0)
    pub g: f64,
    /// Blue channel (0.0..=255.0)
    pub b: f64,
}

impl Rgb {
    /// Pure black, the base color every filter chain starts from.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Pure white.
    pub const WHITE: Self = Self {
        r: 255.0,
        g: 255.0,
        b: 255.0,
    };

    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use filter_solver::Rgb;
    /// let orange = Rgb::from_u8(255, 87, 51);
    /// assert_eq!(orange.g, 87.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(f64::from(r), f64::from(g), f64::from(b))
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    ///
    /// Rounds each channel to the nearest integer and clamps to 0..=255.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
        ]
    }

    /// Clamp every channel into 0..=255.
    ///
    /// Applied after each filter stage, matching the CSS rule that filter
    /// primitives clip their output.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 255.0),
            g: self.g.clamp(0.0, 255.0),
            b: self.b.clamp(0.0, 255.0),
        }
    }

    /// Format as uppercase `#RRGGBB`.
    ///
    /// # Example
    /// ```
    /// use filter_solver::Rgb;
    /// assert_eq!(Rgb::new(254.6, 0.2, -3.0).to_hex(), "#FF0000");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Derive the HSL representation of this color.
    #[inline]
    pub fn hsl(self) -> Hsl {
        Hsl::from(self)
    }

    /// Parse a 3- or 6-digit hex color, with or without a leading `#`.
    ///
    /// The shorthand form is expanded by doubling each digit (`#F80` is
    /// `#FF8800`). Parsing is case-insensitive and trims whitespace.
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        let digits = s
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or(ParseColorError::InvalidDigit(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        match digits.as_slice() {
            // Shorthand: 0xF * 17 == 0xFF
            &[r, g, b] => Ok(Self::from_u8(r * 17, g * 17, b * 17)),
            &[r1, r2, g1, g2, b1, b2] => Ok(Self::from_u8(
                r1 << 4 | r2,
                g1 << 4 | g2,
                b1 << 4 | b2,
            )),
            _ => Err(ParseColorError::InvalidLength),
        }
    }

    /// Parse a decimal `r,g,b` triple such as `"255, 87, 51"`.
    pub fn from_triple(s: &str) -> Result<Self, ParseColorError> {
        let parts: Vec<&str> = s.trim().split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseColorError::WrongComponentCount(parts.len()));
        }

        let mut channels = [0u8; 3];
        for (channel, part) in channels.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseColorError::InvalidChannel(part.to_string()));
            }
            *channel = part
                .parse()
                .map_err(|_| ParseColorError::InvalidChannel(part.to_string()))?;
        }

        Ok(Self::from_bytes(channels))
    }
}

#[inline]
fn channel_to_u8(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse either a hex color or a decimal `r,g,b` triple.
    ///
    /// # Examples
    ///
    /// ```
    /// use filter_solver::Rgb;
    ///
    /// let a: Rgb = "#FF5733".parse().unwrap();
    /// let b: Rgb = "255,87,51".parse().unwrap();
    /// assert_eq!(a, b);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(',') {
            Self::from_triple(s)
        } else {
            Self::from_hex(s)
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Parse a hex color into 8-bit channels.
pub fn hex_to_rgb(hex: &str) -> Result<[u8; 3], ParseColorError> {
    Rgb::from_hex(hex).map(Rgb::to_bytes)
}

/// Format channels as uppercase `#RRGGBB`, rounding and clamping each one.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Rgb::new(r, g, b).to_hex()
}
