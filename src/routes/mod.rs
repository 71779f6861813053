// HTTP routes: thin shell over the load store

mod http;
mod loads;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::load_repo::LoadStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) load_store: Arc<LoadStore>,
}

pub fn app(load_store: Arc<LoadStore>, config: &AppConfig) -> Router {
    let state = AppState { load_store };
    let load_routes = Router::new()
        .route("/loads", post(loads::record_load)) // POST {base}/loads
        .route("/loads/{server_name}", get(loads::get_report)); // GET {base}/loads/{server_name}

    Router::new()
        .route("/", get(|| async { "Hello from servertrack!" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .nest(&config.server.base_path, load_routes)
        .layer(middleware::from_fn(http::log_request))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
