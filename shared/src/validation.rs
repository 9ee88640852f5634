//! Validation utilities for assessment input
//!
//! The classifier itself accepts any snapshot; these checks guard the
//! boundary where user input and provider data enter the system.

use chrono::NaiveDate;

use crate::models::WeatherMetrics;

/// Maximum accepted length of a free-form location string
pub const MAX_LOCATION_LENGTH: usize = 200;

// ============================================================================
// Query Validations
// ============================================================================

/// Validate that a location was entered
pub fn validate_location(location: &str) -> Result<(), &'static str> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return Err("Location is required");
    }
    if trimmed.chars().count() > MAX_LOCATION_LENGTH {
        return Err("Location must be at most 200 characters");
    }
    Ok(())
}

/// Parse an ISO-8601 calendar date (`YYYY-MM-DD`)
pub fn parse_forecast_date(date: &str) -> Result<NaiveDate, &'static str> {
    let trimmed = date.trim();
    if trimmed.is_empty() {
        return Err("Date is required");
    }
    // chrono accepts unpadded fields, the provider does not
    if trimmed.len() != 10 {
        return Err("Date must be in YYYY-MM-DD format");
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| "Date must be in YYYY-MM-DD format")
}

// ============================================================================
// Metrics Validations
// ============================================================================

/// Validate that a snapshot is well formed: finite numbers, humidity as a
/// percentage, non-negative wind and precipitation
pub fn validate_metrics(metrics: &WeatherMetrics) -> Result<(), &'static str> {
    let values = [
        metrics.temperature,
        metrics.humidity,
        metrics.wind_speed,
        metrics.precipitation,
        metrics.heat_index,
        metrics.wind_chill,
        metrics.uv_index,
    ];
    if values.iter().any(|v| !v.is_finite()) {
        return Err("Metrics must be finite numbers");
    }
    if !(0.0..=100.0).contains(&metrics.humidity) {
        return Err("Humidity must be between 0 and 100%");
    }
    if metrics.wind_speed < 0.0 {
        return Err("Wind speed cannot be negative");
    }
    if metrics.precipitation < 0.0 {
        return Err("Precipitation cannot be negative");
    }
    Ok(())
}
