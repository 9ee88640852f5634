//! WebAssembly module for the Weather Risk Assessment Platform
//!
//! Provides client-side computation for:
//! - Risk classification of a metrics snapshot
//! - UV banding and derived metrics
//! - Seeded synthetic metrics for offline use
//! - Display hints (colors, icons, activity labels)

use serde::Serialize;
use wasm_bindgen::prelude::*;

pub mod presentation;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

use shared::synthetic::SyntheticMetricsGenerator;

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization failed: {}", e))
}

fn parse_category(category: &str) -> Result<RiskCategory, String> {
    serde_json::from_value(serde_json::Value::String(category.to_string()))
        .map_err(|_| format!("Unknown risk category: {}", category))
}

fn to_js_error(message: String) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

pub fn classify_weather_json(metrics_json: &str) -> Result<String, String> {
    let metrics: WeatherMetrics = serde_json::from_str(metrics_json)
        .map_err(|e| format!("Invalid metrics JSON: {}", e))?;
    to_json(&shared::classify(&metrics))
}

pub fn synthetic_metrics_json(seed: u64) -> Result<String, String> {
    to_json(&SyntheticMetricsGenerator::seeded(seed).next_metrics())
}

pub fn derived_metrics_json(temperature: f64, humidity: f64, wind_speed: f64) -> Result<String, String> {
    to_json(&derive(temperature, humidity, wind_speed))
}

pub fn risk_style_json(category: &str) -> Result<String, String> {
    to_json(&presentation::risk_style(parse_category(category)?))
}

/// Classify a metrics snapshot (camelCase JSON) into an assessment JSON
#[wasm_bindgen]
pub fn classify_weather(metrics_json: &str) -> Result<String, JsValue> {
    classify_weather_json(metrics_json).map_err(to_js_error)
}

/// Band a UV index into its display label
#[wasm_bindgen]
pub fn band_uv_index(uv_index: f64) -> String {
    shared::band_uv_index(uv_index).to_string()
}

/// One synthetic snapshot from a seeded generator
#[wasm_bindgen]
pub fn generate_synthetic_metrics(seed: u64) -> Result<String, JsValue> {
    synthetic_metrics_json(seed).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn compute_derived_metrics(temperature: f64, humidity: f64, wind_speed: f64) -> Result<String, JsValue> {
    derived_metrics_json(temperature, humidity, wind_speed).map_err(to_js_error)
}

/// `{color, icon}` for a snake_case category code
#[wasm_bindgen]
pub fn risk_style(category: &str) -> Result<String, JsValue> {
    risk_style_json(category).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn uv_color(uv_index: f64) -> String {
    presentation::uv_color(shared::band_uv_index(uv_index)).to_string()
}

#[wasm_bindgen]
pub fn activity_label(activity: &str) -> String {
    presentation::activity_label(Activity::from_code(activity)).to_string()
}

/// Activity codes in menu order
#[wasm_bindgen]
pub fn activity_codes() -> js_sys::Array {
    Activity::ALL
        .iter()
        .map(|a| JsValue::from_str(a.code()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_weather_json() {
        let json = r#"{"temperature":42,"humidity":30,"windSpeed":2.8,"precipitation":0,
            "heatIndex":42,"windChill":42,"uvIndex":8}"#;
        let out: serde_json::Value =
            serde_json::from_str(&classify_weather_json(json).unwrap()).unwrap();
        assert_eq!(out["category"], "very_hot");
        assert_eq!(out["severity"], 5);
        assert_eq!(out["description"], "Heat index of 42°C poses serious heat stress risk");
    }

    #[test]
    fn test_classify_weather_rejects_bad_json() {
        assert!(classify_weather_json("{\"temperature\": 1}").is_err());
        assert!(classify_weather_json("not json").is_err());
    }

    #[test]
    fn test_band_uv_index() {
        assert_eq!(band_uv_index(2.0), "Low");
        assert_eq!(band_uv_index(8.0), "Very High");
        assert_eq!(uv_color(11.0), "bg-purple-500");
    }

    #[test]
    fn test_synthetic_metrics_are_seeded() {
        let a = synthetic_metrics_json(5).unwrap();
        assert_eq!(a, synthetic_metrics_json(5).unwrap());

        let metrics: WeatherMetrics = serde_json::from_str(&a).unwrap();
        assert!((0.0..=11.0).contains(&metrics.uv_index));
    }

    #[test]
    fn test_derived_metrics_json() {
        let out: DerivedMetrics =
            serde_json::from_str(&derived_metrics_json(10.0, 60.0, 8.0).unwrap()).unwrap();
        assert_eq!(out.heat_index, 13.0);
        assert_eq!(out.wind_chill, -6.0);

        let raw: serde_json::Value =
            serde_json::from_str(&derived_metrics_json(10.0, 60.0, 8.0).unwrap()).unwrap();
        assert_eq!(raw["windChill"], -6.0);
    }

    #[test]
    fn test_risk_style_json() {
        let out: serde_json::Value =
            serde_json::from_str(&risk_style_json("very_cold").unwrap()).unwrap();
        assert_eq!(out["color"], "bg-blue-500");
        assert_eq!(out["icon"], "wind");
        assert!(risk_style_json("scorching").is_err());
    }

    #[test]
    fn test_activity_label() {
        assert_eq!(activity_label("fishing"), "🎣 Fishing");
        assert_eq!(activity_label("kayaking"), "🌟 Outdoor Activity");
    }
}
