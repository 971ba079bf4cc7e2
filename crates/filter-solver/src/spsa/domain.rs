//! Per-dimension search domains and the fixup applied after every step.

/// Valid range of one optimizer dimension.
///
/// After each update the optimizer pulls the coordinate back into its
/// domain: [`Domain::Clamp`] saturates at the bounds, [`Domain::Wrap`]
/// treats the range as a circle (used for hue rotation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Domain {
    /// Closed interval `[0, max]`; out-of-range values are clamped.
    Clamp { max: f64 },
    /// Half-open interval `[0, period)`; values wrap modulo `period`.
    Wrap { period: f64 },
}

impl Domain {
    /// Upper bound of the domain (`max` or `period`).
    #[inline]
    pub fn max(self) -> f64 {
        match self {
            Domain::Clamp { max } => max,
            Domain::Wrap { period } => period,
        }
    }

    /// Center of the domain, the neutral starting point for a wide search.
    #[inline]
    pub fn midpoint(self) -> f64 {
        self.max() / 2.0
    }

    /// Pull `value` back into the domain.
    ///
    /// # Example
    /// ```
    /// use filter_solver::Domain;
    ///
    /// assert_eq!(Domain::Clamp { max: 100.0 }.fix(130.0), 100.0);
    /// assert_eq!(Domain::Wrap { period: 100.0 }.fix(130.0), 30.0);
    /// assert_eq!(Domain::Wrap { period: 100.0 }.fix(-10.0), 90.0);
    /// ```
    pub fn fix(self, value: f64) -> f64 {
        match self {
            Domain::Clamp { max } => value.clamp(0.0, max),
            Domain::Wrap { period } => {
                let wrapped = value.rem_euclid(period);
                // rem_euclid of a tiny negative rounds up to `period` itself
                if wrapped >= period {
                    0.0
                } else {
                    wrapped
                }
            }
        }
    }

    /// Whether `value` already lies inside the domain.
    #[inline]
    pub fn contains(self, value: f64) -> bool {
        match self {
            Domain::Clamp { max } => (0.0..=max).contains(&value),
            Domain::Wrap { period } => (0.0..period).contains(&value),
        }
    }
}
