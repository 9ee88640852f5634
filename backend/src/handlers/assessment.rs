//! HTTP handlers for weather risk assessment endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::models::{band_uv_index, derive, DerivedMetrics, RiskAssessment, UvLevel, WeatherMetrics};
use crate::services::assessment::{AssessInput, AssessmentRecord, AssessmentState};
use crate::AppState;

/// Fetch metrics for a location and date and classify them
pub async fn create_assessment(
    State(state): State<AppState>,
    Json(input): Json<AssessInput>,
) -> AppResult<Json<AssessmentRecord>> {
    let record = state.assessments.assess(input).await?;
    Ok(Json(record))
}

/// Get the outcome of the most recent assessment
pub async fn get_latest_assessment(State(state): State<AppState>) -> Json<AssessmentState> {
    Json(state.assessments.latest().await)
}

/// Classify a caller-supplied metrics snapshot
pub async fn classify_metrics(
    State(state): State<AppState>,
    Json(metrics): Json<WeatherMetrics>,
) -> AppResult<Json<RiskAssessment>> {
    let assessment = state.assessments.classify_metrics(&metrics)?;
    Ok(Json(assessment))
}

/// Query parameters for UV banding
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UvQuery {
    pub uv_index: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UvBandResponse {
    pub uv_index: f64,
    pub level: UvLevel,
    pub label: String,
}

/// Band a UV index
pub async fn get_uv_band(Query(query): Query<UvQuery>) -> Json<UvBandResponse> {
    let level = band_uv_index(query.uv_index);
    Json(UvBandResponse {
        uv_index: query.uv_index,
        level,
        label: level.to_string(),
    })
}

/// Query parameters for derived metrics
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedQuery {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
}

/// Compute heat index and wind chill from raw readings
pub async fn get_derived_metrics(Query(query): Query<DerivedQuery>) -> Json<DerivedMetrics> {
    Json(derive(query.temperature, query.humidity, query.wind_speed))
}
