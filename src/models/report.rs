use filter_solver::{Filter, Rgb, Solution};
use serde::Serialize;
use utoipa::ToSchema;

/// A color as hex and 8-bit channels
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ColorReport {
    /// Uppercase `#RRGGBB`
    #[schema(example = "#FF5733")]
    pub hex: String,
    /// Red, green, blue (0-255)
    #[schema(example = json!([255, 87, 51]))]
    pub rgb: [u8; 3],
}

impl From<Rgb> for ColorReport {
    fn from(color: Rgb) -> Self {
        Self {
            hex: color.to_hex(),
            rgb: color.to_bytes(),
        }
    }
}

/// Unrounded filter magnitudes in CSS units (percent, hue-rotate in degrees)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FilterValues {
    pub invert: f64,
    pub sepia: f64,
    pub saturate: f64,
    pub hue_rotate: f64,
    pub brightness: f64,
    pub contrast: f64,
}

/// A solved filter chain
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FilterReport {
    /// Requested color
    pub target: ColorReport,
    /// CSS declaration to apply to a black element
    #[schema(
        example = "filter: invert(42%) sepia(93%) saturate(1352%) hue-rotate(87deg) brightness(119%) contrast(119%);"
    )]
    pub filter: String,
    /// Remaining distance to the target (lower is better)
    pub loss: f64,
    /// One of perfect, excellent, good, poor
    #[schema(example = "excellent")]
    pub quality: String,
    pub values: FilterValues,
}

impl From<&Solution> for FilterReport {
    fn from(solution: &Solution) -> Self {
        let params = &solution.params;
        let css = |f: Filter| f.css_value(params.get(f));
        Self {
            target: solution.target.into(),
            filter: solution.filter.clone(),
            loss: solution.loss,
            quality: solution.quality.to_string(),
            values: FilterValues {
                invert: css(Filter::Invert),
                sepia: css(Filter::Sepia),
                saturate: css(Filter::Saturate),
                hue_rotate: css(Filter::HueRotate),
                brightness: css(Filter::Brightness),
                contrast: css(Filter::Contrast),
            },
        }
    }
}
