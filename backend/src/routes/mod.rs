//! Route definitions for the Weather Risk Assessment Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/assessments", assessment_routes())
        .route("/uv-band", get(handlers::get_uv_band))
        .route("/derived-metrics", get(handlers::get_derived_metrics))
}

/// Assessment routes
fn assessment_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::create_assessment))
        .route("/latest", get(handlers::get_latest_assessment))
        .route("/classify", post(handlers::classify_metrics))
}
