// GET /version and request logging

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Crate name and version baked in at build time.
const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// GET /version
pub(super) async fn version_handler() -> impl IntoResponse {
    axum::Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// Logs every inbound request before it is routed.
pub(super) async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!(method = %request.method(), uri = %request.uri(), "request");
    next.run(request).await
}
