pub mod handlers;

pub use handlers::*;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// 构建路由
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/sections/:name", get(section))
        .route("/api/estimate", post(create_estimate))
        .route("/api/print", get(print_summary))
        .route("/api/summary.csv", get(export_summary))
        .route("/embed/height.js", get(height_script))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
