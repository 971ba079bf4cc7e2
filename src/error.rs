use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use filter_solver::SolverError;
use serde_json::json;
use thiserror::Error;

use crate::services::SolveError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("{0}")]
    InvalidInput(#[from] SolverError),

    #[error("Solver error: {0}")]
    Solve(#[from] SolveError),
}

impl From<filter_solver::ParseColorError> for ApiError {
    fn from(e: filter_solver::ParseColorError) -> Self {
        ApiError::InvalidInput(e.into())
    }
}

impl From<filter_solver::ParseFilterError> for ApiError {
    fn from(e: filter_solver::ParseFilterError) -> Self {
        ApiError::InvalidInput(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingParameter(_) | ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Solve(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
