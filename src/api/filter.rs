use axum::{
    extract::{Query, State},
    response::Json,
};
use filter_solver::{FilterParams, Rgb};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::models::{ColorReport, FilterReport};
use crate::server::AppState;

/// Query parameters of /api/filter
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilterQuery {
    /// Target color: hex (`FF5733`, `%23FF5733`, `F53`) or `r,g,b`
    pub color: Option<String>,
    /// Fixed seed for a reproducible answer
    pub seed: Option<u64>,
}

/// Query parameters of /api/preview
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PreviewQuery {
    /// Filter declaration, with or without the `filter:` prefix
    pub filter: Option<String>,
}

/// Compute a filter chain for a color
///
/// Returns the CSS `filter` declaration that turns a black element into the
/// requested color, with the remaining loss and a quality label.
#[utoipa::path(
    get,
    path = "/api/filter",
    params(FilterQuery),
    responses(
        (status = 200, description = "Filter chain computed", body = FilterReport),
        (status = 400, description = "Missing or malformed color"),
    ),
    tag = "Filter"
)]
pub async fn handle_filter(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Json<FilterReport>, ApiError> {
    let color = query
        .color
        .as_deref()
        .ok_or(ApiError::MissingParameter("color"))?;
    let target: Rgb = color.trim().parse()?;

    tracing::debug!(color = %target, seed = ?query.seed, "Filter request received");

    let solution = state.solver.solve(target, query.seed).await?;
    Ok(Json(FilterReport::from(&solution)))
}

/// Render a filter declaration
///
/// Applies the declaration to black and returns the resulting color.
#[utoipa::path(
    get,
    path = "/api/preview",
    params(PreviewQuery),
    responses(
        (status = 200, description = "Color rendered by the filter", body = ColorReport),
        (status = 400, description = "Missing or malformed filter"),
    ),
    tag = "Filter"
)]
pub async fn handle_preview(
    Query(query): Query<PreviewQuery>,
) -> Result<Json<ColorReport>, ApiError> {
    let filter = query
        .filter
        .as_deref()
        .ok_or(ApiError::MissingParameter("filter"))?;
    let params: FilterParams = filter.parse()?;
    Ok(Json(ColorReport::from(params.preview())))
}
