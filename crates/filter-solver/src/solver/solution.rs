//! Result of a solve and its quality classification.

use std::fmt;

use crate::color::Rgb;
use crate::filter::FilterParams;

/// Qualitative label for a final loss.
///
/// Informational only: the solver returns its best attempt whatever the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    /// loss < 1
    Perfect,
    /// loss < 5
    Excellent,
    /// loss < 15
    Good,
    Poor,
}

impl Quality {
    pub fn from_loss(loss: f64) -> Self {
        if loss < 1.0 {
            Quality::Perfect
        } else if loss < 5.0 {
            Quality::Excellent
        } else if loss < 15.0 {
            Quality::Good
        } else {
            Quality::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Quality::Perfect => "perfect",
            Quality::Excellent => "excellent",
            Quality::Good => "good",
            Quality::Poor => "poor",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A solved filter chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Color the chain was solved for.
    pub target: Rgb,
    /// Unrounded parameters in native units.
    pub params: FilterParams,
    /// Loss of `params` against the target.
    pub loss: f64,
    /// The CSS declaration, values rounded.
    pub filter: String,
    pub quality: Quality,
}

impl Solution {
    pub fn new(target: Rgb, params: FilterParams, loss: f64) -> Self {
        Self {
            target,
            filter: params.to_css(),
            quality: Quality::from_loss(loss),
            params,
            loss,
        }
    }

    /// Color the rounded declaration renders from black.
    ///
    /// Can differ slightly from `params.preview()` because of rounding.
    pub fn rendered(&self) -> Rgb {
        self.params.rounded().preview()
    }
}
