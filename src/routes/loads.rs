// Load routes: record a sample, fetch a server's report

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use super::AppState;
use crate::validation;

/// POST {base}/loads — validates the body and records it.
/// Bodies must be a JSON object or array; anything else is a format error.
pub(super) async fn record_load(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let candidate = match body {
        Ok(Json(candidate)) if candidate.is_object() || candidate.is_array() => candidate,
        Ok(Json(candidate)) => {
            tracing::error!(body = %candidate, "request body is not an object or array");
            return invalid_request_format();
        }
        Err(rejection) => {
            tracing::error!(error = %rejection, "rejected request body");
            return invalid_request_format();
        }
    };

    match validation::parse_load(&candidate) {
        Ok(sample) => {
            state.load_store.append(sample);
            Json(json!({ "message": "success" })).into_response()
        }
        Err(errors) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "validationError": errors })),
        )
            .into_response(),
    }
}

/// GET {base}/loads/{server_name} — rolling averages for one server.
pub(super) async fn get_report(
    State(state): State<AppState>,
    Path(server_name): Path<String>,
) -> Response {
    match state.load_store.report(&server_name).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => {
            tracing::error!(error = %e, server_name = %server_name, "report failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": "Internal error." })),
            )
                .into_response()
        }
    }
}

fn invalid_request_format() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": "Invalid request format" })),
    )
        .into_response()
}
