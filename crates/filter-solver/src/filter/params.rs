//! The six filter magnitudes and their native units.

use super::pipeline;
use crate::color::Rgb;
use crate::spsa::Domain;

/// Number of filter functions in the chain.
pub const DIMENSIONS: usize = 6;

/// Degrees per native hue-rotate unit: the native range 0..100 spans a full turn.
pub const HUE_DEGREES_PER_UNIT: f64 = 3.6;

/// One of the six CSS filter functions, in chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    Invert,
    Sepia,
    Saturate,
    HueRotate,
    Brightness,
    Contrast,
}

impl Filter {
    /// All filters in the order they are applied.
    pub const ALL: [Filter; DIMENSIONS] = [
        Filter::Invert,
        Filter::Sepia,
        Filter::Saturate,
        Filter::HueRotate,
        Filter::Brightness,
        Filter::Contrast,
    ];

    /// Position in the chain and in the parameter vector.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// CSS function name.
    pub fn css_name(self) -> &'static str {
        match self {
            Filter::Invert => "invert",
            Filter::Sepia => "sepia",
            Filter::Saturate => "saturate",
            Filter::HueRotate => "hue-rotate",
            Filter::Brightness => "brightness",
            Filter::Contrast => "contrast",
        }
    }

    /// CSS unit of the formatted value.
    pub fn unit(self) -> &'static str {
        match self {
            Filter::HueRotate => "deg",
            _ => "%",
        }
    }

    pub fn from_css_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.css_name() == name)
    }

    /// Search domain in native units.
    pub fn domain(self) -> Domain {
        match self {
            Filter::Invert | Filter::Sepia => Domain::Clamp { max: 100.0 },
            Filter::Saturate => Domain::Clamp { max: 7500.0 },
            Filter::HueRotate => Domain::Wrap { period: 100.0 },
            Filter::Brightness | Filter::Contrast => Domain::Clamp { max: 200.0 },
        }
    }

    /// Native value that leaves a color unchanged.
    pub fn neutral(self) -> f64 {
        match self {
            Filter::Invert | Filter::Sepia | Filter::HueRotate => 0.0,
            Filter::Saturate | Filter::Brightness | Filter::Contrast => 100.0,
        }
    }

    /// Value as written in CSS (`%` or `deg`) for a native value.
    pub fn css_value(self, native: f64) -> f64 {
        match self {
            Filter::HueRotate => native * HUE_DEGREES_PER_UNIT,
            _ => native,
        }
    }

    /// Native value for a value written in CSS units.
    pub fn native_value(self, css: f64) -> f64 {
        match self {
            Filter::HueRotate => css / HUE_DEGREES_PER_UNIT,
            _ => css,
        }
    }
}

/// Domains of all six dimensions, in chain order.
pub fn domains() -> [Domain; DIMENSIONS] {
    Filter::ALL.map(Filter::domain)
}

/// Magnitudes of the six filters in native units.
///
/// Percent filters are stored as their CSS percentage (`invert(100%)` is
/// `100.0`). Hue rotation is stored on a 0..100 scale; multiply by
/// [`HUE_DEGREES_PER_UNIT`] for degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    pub invert: f64,
    pub sepia: f64,
    pub saturate: f64,
    pub hue_rotate: f64,
    pub brightness: f64,
    pub contrast: f64,
}

impl Default for FilterParams {
    /// The identity chain.
    fn default() -> Self {
        Self::from_array(Filter::ALL.map(Filter::neutral))
    }
}

impl FilterParams {
    #[inline]
    pub fn from_array(values: [f64; DIMENSIONS]) -> Self {
        let [invert, sepia, saturate, hue_rotate, brightness, contrast] = values;
        Self {
            invert,
            sepia,
            saturate,
            hue_rotate,
            brightness,
            contrast,
        }
    }

    #[inline]
    pub fn to_array(self) -> [f64; DIMENSIONS] {
        [
            self.invert,
            self.sepia,
            self.saturate,
            self.hue_rotate,
            self.brightness,
            self.contrast,
        ]
    }

    /// Center of every search domain.
    pub fn midpoint() -> Self {
        Self::from_array(Filter::ALL.map(|f| f.domain().midpoint()))
    }

    /// Native value of one filter.
    pub fn get(&self, filter: Filter) -> f64 {
        self.to_array()[filter.index()]
    }

    /// Hue rotation in degrees.
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        self.hue_rotate * HUE_DEGREES_PER_UNIT
    }

    /// Round every value to what the CSS declaration will show.
    ///
    /// Hue rotation is rounded in degrees, then converted back to native units.
    pub fn rounded(&self) -> Self {
        Self::from_array(
            Filter::ALL.map(|f| f.native_value(f.css_value(self.get(f)).round())),
        )
    }

    /// Run the filter chain on `base`.
    pub fn apply(&self, base: Rgb) -> Rgb {
        let color = pipeline::invert(base, self.invert / 100.0);
        let color = pipeline::sepia(color, self.sepia / 100.0);
        let color = pipeline::saturate(color, self.saturate / 100.0);
        let color = pipeline::hue_rotate(color, self.hue_degrees());
        let color = pipeline::brightness(color, self.brightness / 100.0);
        pipeline::contrast(color, self.contrast / 100.0)
    }

    /// Color produced by applying the chain to black.
    #[inline]
    pub fn preview(&self) -> Rgb {
        self.apply(Rgb::BLACK)
    }
}
