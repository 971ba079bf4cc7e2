//! HSL representation derived from [`Rgb`].

use super::rgb::Rgb;

/// Hue, saturation and lightness of a color.
///
/// Always derived from an [`Rgb`] value, never stored on its own.
/// `h` is in degrees `0.0..360.0`, `s` and `l` are percentages `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl From<Rgb> for Hsl {
    /// Standard max/min/delta conversion.
    ///
    /// Achromatic colors (max == min) get hue 0. When several channels share
    /// the maximum, red wins over green and green over blue.
    fn from(color: Rgb) -> Self {
        let r = color.r / 255.0;
        let g = color.g / 255.0;
        let b = color.b / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self {
            h: h * 60.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}

/// Convert channels on the 0..=255 scale to HSL.
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Hsl {
    Hsl::from(Rgb::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    fn assert_hsl(actual: Hsl, h: f64, s: f64, l: f64) {
        assert!(
            (actual.h - h).abs() < TOLERANCE
                && (actual.s - s).abs() < TOLERANCE
                && (actual.l - l).abs() < TOLERANCE,
            "expected ({h}, {s}, {l}), got {actual:?}"
        );
    }

    #[test]
    fn test_primaries() {
        assert_hsl(rgb_to_hsl(255.0, 0.0, 0.0), 0.0, 100.0, 50.0);
        assert_hsl(rgb_to_hsl(0.0, 255.0, 0.0), 120.0, 100.0, 50.0);
        assert_hsl(rgb_to_hsl(0.0, 0.0, 255.0), 240.0, 100.0, 50.0);
    }

    #[test]
    fn test_achromatic_has_zero_hue() {
        assert_hsl(rgb_to_hsl(0.0, 0.0, 0.0), 0.0, 0.0, 0.0);
        assert_hsl(rgb_to_hsl(255.0, 255.0, 255.0), 0.0, 0.0, 100.0);
        assert_hsl(rgb_to_hsl(128.0, 128.0, 128.0), 0.0, 0.0, 128.0 / 255.0 * 100.0);
    }

    #[test]
    fn test_reference_color() {
        // #FF5733 -> hsl(10.6deg, 100%, 60%)
        let hsl = rgb_to_hsl(255.0, 87.0, 51.0);
        assert!((hsl.h - 10.588235294).abs() < 1e-6, "hue {}", hsl.h);
        assert!((hsl.s - 100.0).abs() < TOLERANCE);
        assert!((hsl.l - 60.0).abs() < TOLERANCE);
    }

    /// Red branch with blue above green wraps into 300..360.
    #[test]
    fn test_magenta_side_of_red_branch() {
        let hsl = rgb_to_hsl(255.0, 0.0, 128.0);
        assert!(hsl.h > 300.0 && hsl.h < 360.0, "hue {}", hsl.h);
    }

    /// Ties between maxima resolve red first, then green.
    #[test]
    fn test_tie_break_order() {
        // r == g: red branch -> (g - b)/d = 1 -> 60 degrees
        assert_hsl(rgb_to_hsl(255.0, 255.0, 0.0), 60.0, 100.0, 50.0);
        // g == b: green branch -> (b - r)/d + 2 = 3 -> 180 degrees
        assert_hsl(rgb_to_hsl(0.0, 255.0, 255.0), 180.0, 100.0, 50.0);
        // r == b: red branch -> (g - b)/d + 6 = 5 -> 300 degrees
        assert_hsl(rgb_to_hsl(255.0, 0.0, 255.0), 300.0, 100.0, 50.0);
    }

    #[test]
    fn test_ranges_hold_for_all_byte_colors() {
        for r in (0..=255u16).step_by(3) {
            for g in (0..=255u16).step_by(5) {
                for b in (0..=255u16).step_by(7) {
                    let hsl = rgb_to_hsl(f64::from(r), f64::from(g), f64::from(b));
                    assert!((0.0..360.0).contains(&hsl.h), "h out of range: {hsl:?}");
                    assert!((0.0..=100.0).contains(&hsl.s), "s out of range: {hsl:?}");
                    assert!((0.0..=100.0).contains(&hsl.l), "l out of range: {hsl:?}");
                }
            }
        }
    }

    /// Cross-check against the palette crate's HSL conversion.
    #[test]
    fn test_hsl_matches_palette_crate() {
        use palette::{encoding, FromColor, Hsl as PaletteHsl, Srgb};

        let samples = [
            (255u8, 87u8, 51u8),
            (12, 200, 99),
            (40, 40, 220),
            (250, 250, 5),
            (1, 2, 3),
            (200, 10, 180),
        ];

        for (r, g, b) in samples {
            let ours = rgb_to_hsl(f64::from(r), f64::from(g), f64::from(b));
            let srgb: Srgb<f64> = Srgb::new(r, g, b).into_format();
            let theirs: PaletteHsl<encoding::Srgb, f64> = PaletteHsl::from_color(srgb);

            let their_h = theirs.hue.into_positive_degrees();
            assert!(
                (ours.h - their_h).abs() < 1e-6,
                "hue mismatch for ({r}, {g}, {b}): ours={}, palette={their_h}",
                ours.h
            );
            assert!(
                (ours.s - theirs.saturation * 100.0).abs() < 1e-6,
                "saturation mismatch for ({r}, {g}, {b})"
            );
            assert!(
                (ours.l - theirs.lightness * 100.0).abs() < 1e-6,
                "lightness mismatch for ({r}, {g}, {b})"
            );
        }
    }
}
