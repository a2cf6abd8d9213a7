//! Route table and middleware stack.

use crate::handlers;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use formcheck_core::Config;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Headroom above the configured video cap so the handler's own size check
/// owns the 413 response instead of the body-limit layer.
const MULTIPART_FRAMING_SLACK: usize = 64 * 1024;

pub fn router(config: Config) -> Router {
    let body_limit = config.max_video_size_bytes.saturating_add(MULTIPART_FRAMING_SLACK);
    let cors = cors_layer(&config);
    let state = Arc::new(AppState::new(config));

    Router::new()
        .route("/", get(handlers::root::root))
        .route(
            "/exercise-analysis",
            post(handlers::exercise_analysis::analyze_exercise_video),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the browser webapp that submits recordings.
fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow_any() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
