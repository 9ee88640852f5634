//! Weather metrics snapshot and derived comfort indices

use serde::{Deserialize, Serialize};

/// Wind speed (m/s) above which wind chill lowers the perceived temperature
pub const WIND_CHILL_MIN_SPEED_MPS: f64 = 5.0;

/// A single weather snapshot fed to the risk classifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherMetrics {
    /// Air temperature in °C
    pub temperature: f64,
    /// Relative humidity in percent (0-100)
    pub humidity: f64,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Precipitation in mm
    pub precipitation: f64,
    /// Heat index in °C
    pub heat_index: f64,
    /// Wind chill in °C
    pub wind_chill: f64,
    pub uv_index: f64,
}

impl WeatherMetrics {
    /// Build a snapshot from raw readings, deriving heat index and wind chill
    pub fn from_raw(
        temperature: f64,
        humidity: f64,
        wind_speed: f64,
        precipitation: f64,
        uv_index: f64,
    ) -> Self {
        let derived = derive(temperature, humidity, wind_speed);
        Self {
            temperature,
            humidity,
            wind_speed,
            precipitation,
            heat_index: derived.heat_index,
            wind_chill: derived.wind_chill,
            uv_index,
        }
    }
}

/// Heat index and wind chill computed from raw readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetrics {
    pub heat_index: f64,
    pub wind_chill: f64,
}

/// Simplified heat index: temperature plus up to 5°C for humidity.
///
/// This is a linear proxy, not the NWS Rothfusz regression.
pub fn heat_index(temperature: f64, humidity: f64) -> f64 {
    temperature + (humidity / 100.0) * 5.0
}

/// Simplified wind chill: 2°C per m/s, only above 5 m/s
pub fn wind_chill(temperature: f64, wind_speed: f64) -> f64 {
    if wind_speed > WIND_CHILL_MIN_SPEED_MPS {
        temperature - wind_speed * 2.0
    } else {
        temperature
    }
}

/// Compute both derived indices
pub fn derive(temperature: f64, humidity: f64, wind_speed: f64) -> DerivedMetrics {
    DerivedMetrics {
        heat_index: heat_index(temperature, humidity),
        wind_chill: wind_chill(temperature, wind_speed),
    }
}
