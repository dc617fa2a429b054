//! Error responses for the marketplace API.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::catalog::{ports::CatalogError, services::MarketplaceServiceError};

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

fn error(status: StatusCode, detail: String) -> Response {
    (status, Json(ErrorBody { detail })).into_response()
}

/// Wraps a rejected JSON body in the `{"detail": ..}` shape, keeping the
/// extractor's status (`400`, `415` or `422`).
pub fn rejected_body(rejection: &JsonRejection) -> Response {
    error(rejection.status(), rejection.body_text())
}

/// Maps a service error onto `404` for missing listings and `422` for
/// validation failures.
pub fn service_error(err: &MarketplaceServiceError) -> Response {
    match err {
        MarketplaceServiceError::Catalog(CatalogError::NotFound(agent_id)) => error(
            StatusCode::NOT_FOUND,
            format!("Agent '{agent_id}' not found."),
        ),
        MarketplaceServiceError::Validation(validation) => {
            error(StatusCode::UNPROCESSABLE_ENTITY, validation.to_string())
        }
    }
}
