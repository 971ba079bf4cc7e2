//! Formatting and parsing of CSS `filter:` declarations.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use super::params::{Filter, FilterParams};

/// Error type for parsing a CSS filter declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFilterError {
    #[error("empty filter declaration")]
    Empty,

    #[error("unexpected input {0:?} in filter declaration")]
    Unexpected(String),

    #[error("unsupported filter function {0:?}")]
    UnknownFunction(String),

    #[error("filter function {0} appears more than once")]
    Duplicate(&'static str),

    #[error("filter function {0} is out of order (expected invert, sepia, saturate, hue-rotate, brightness, contrast)")]
    OutOfOrder(&'static str),

    #[error("invalid unit {unit:?} for {function}")]
    WrongUnit {
        function: &'static str,
        unit: String,
    },

    #[error("invalid value {value:?} for {function}")]
    InvalidValue {
        function: &'static str,
        value: String,
    },
}

fn function_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([a-z-]+)\(\s*(-?(?:\d+(?:\.\d*)?|\.\d+))\s*(%|deg)?\s*\)")
            .expect("filter function regex is valid")
    })
}

impl FilterParams {
    /// Format as a complete CSS declaration, values rounded to integers.
    ///
    /// # Example
    /// ```
    /// use filter_solver::FilterParams;
    ///
    /// let params = FilterParams::from_array([50.2, 0.0, 100.0, 25.0, 99.6, 100.0]);
    /// assert_eq!(
    ///     params.to_css(),
    ///     "filter: invert(50%) sepia(0%) saturate(100%) hue-rotate(90deg) brightness(100%) contrast(100%);"
    /// );
    /// ```
    pub fn to_css(&self) -> String {
        let functions: Vec<String> = Filter::ALL
            .iter()
            .map(|&f| {
                let value = f.css_value(self.get(f)).round() as i64;
                format!("{}({}{})", f.css_name(), value, f.unit())
            })
            .collect();
        format!("filter: {};", functions.join(" "))
    }
}

impl fmt::Display for FilterParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for FilterParams {
    type Err = ParseFilterError;

    /// Parse a filter declaration such as the one [`to_css`](Self::to_css) emits.
    ///
    /// The `filter:` prefix and trailing `;` are optional. Functions must
    /// appear in chain order; omitted ones keep their neutral value. Percent
    /// filters also accept unitless fractions (`invert(1)` is `invert(100%)`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s.trim();
        let body = body
            .strip_prefix("filter")
            .and_then(|rest| rest.trim_start().strip_prefix(':'))
            .unwrap_or(body);
        let body = body.trim();
        let body = body.strip_suffix(';').unwrap_or(body).trim();

        if body.is_empty() {
            return Err(ParseFilterError::Empty);
        }

        let mut values = FilterParams::default().to_array();
        let mut last_index: Option<usize> = None;
        let mut cursor = 0;

        for caps in function_regex().captures_iter(body) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            let gap = &body[cursor..whole.start()];
            if !gap.trim().is_empty() {
                return Err(ParseFilterError::Unexpected(gap.trim().to_string()));
            }
            cursor = whole.end();

            let name = &caps[1];
            let filter = Filter::from_css_name(name)
                .ok_or_else(|| ParseFilterError::UnknownFunction(name.to_string()))?;

            match last_index {
                Some(last) if last == filter.index() => {
                    return Err(ParseFilterError::Duplicate(filter.css_name()))
                }
                Some(last) if last > filter.index() => {
                    return Err(ParseFilterError::OutOfOrder(filter.css_name()))
                }
                _ => {}
            }
            last_index = Some(filter.index());

            let raw = &caps[2];
            let number: f64 = raw.parse().map_err(|_| ParseFilterError::InvalidValue {
                function: filter.css_name(),
                value: raw.to_string(),
            })?;
            let unit = caps.get(3).map_or("", |m| m.as_str());

            let native = match (filter, unit) {
                (Filter::HueRotate, "deg") => filter.native_value(number),
                (Filter::HueRotate, "") if number == 0.0 => 0.0,
                (Filter::HueRotate, _) => {
                    return Err(ParseFilterError::WrongUnit {
                        function: filter.css_name(),
                        unit: unit.to_string(),
                    })
                }
                (_, "%") => number,
                (_, "") => number * 100.0,
                (_, _) => {
                    return Err(ParseFilterError::WrongUnit {
                        function: filter.css_name(),
                        unit: unit.to_string(),
                    })
                }
            };

            if native < 0.0 && filter != Filter::HueRotate {
                return Err(ParseFilterError::InvalidValue {
                    function: filter.css_name(),
                    value: raw.to_string(),
                });
            }

            values[filter.index()] = if filter == Filter::HueRotate {
                filter.domain().fix(native)
            } else {
                native
            };
        }

        let rest = body[cursor..].trim();
        if !rest.is_empty() {
            return Err(ParseFilterError::Unexpected(rest.to_string()));
        }
        if last_index.is_none() {
            return Err(ParseFilterError::Empty);
        }

        Ok(FilterParams::from_array(values))
    }
}
