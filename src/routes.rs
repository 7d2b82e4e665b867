use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let max_upload_bytes = state.config.system_config.max_upload_bytes;

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route(
            "/analyze-image",
            post(handlers::analyze_image).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .fallback(handlers::not_found)
}

/// Full application: routes, middleware and state
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes(&state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
