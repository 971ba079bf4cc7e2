//! Distance between a candidate filter chain and the target color.
//!
//! The loss is the unnormalized L1 sum over R, G, B (0..255 scale) and
//! H (0..360), S, L (0..100). RGB differences numerically dominate; the
//! gain schedules in [`crate::solver`] are tuned against exactly this scale,
//! so the weighting must stay as is.

use crate::color::{Hsl, Rgb};
use crate::filter::{FilterParams, DIMENSIONS};
use crate::spsa::Objective;

/// Target color with its HSL form computed once per solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetColor {
    rgb: Rgb,
    hsl: Hsl,
}

impl TargetColor {
    pub fn new(rgb: Rgb) -> Self {
        Self {
            rgb,
            hsl: rgb.hsl(),
        }
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// L1 distance of `candidate` from the target over RGB and HSL.
    pub fn distance(&self, candidate: Rgb) -> f64 {
        let hsl = candidate.hsl();
        (candidate.r - self.rgb.r).abs()
            + (candidate.g - self.rgb.g).abs()
            + (candidate.b - self.rgb.b).abs()
            + (hsl.h - self.hsl.h).abs()
            + (hsl.s - self.hsl.s).abs()
            + (hsl.l - self.hsl.l).abs()
    }
}

impl From<Rgb> for TargetColor {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb)
    }
}

/// Loss over the six filter magnitudes (native units) for one target.
#[derive(Debug, Clone, Copy)]
pub struct ColorLoss {
    target: TargetColor,
}

impl ColorLoss {
    pub fn new(target: TargetColor) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &TargetColor {
        &self.target
    }

    /// Loss of a parameter set.
    pub fn evaluate(&self, params: &FilterParams) -> f64 {
        self.target.distance(params.preview())
    }
}

impl Objective<DIMENSIONS> for ColorLoss {
    #[inline]
    fn loss(&self, params: &[f64; DIMENSIONS]) -> f64 {
        self.evaluate(&FilterParams::from_array(*params))
    }
}
