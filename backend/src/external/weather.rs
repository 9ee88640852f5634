//! Weather API client for fetching forecast data
//!
//! Integrates with WeatherAPI.com's forecast endpoint and maps the
//! day-level aggregates onto a [`WeatherMetrics`] snapshot

use reqwest::Client;
use serde::Deserialize;
use shared::units::kph_to_mps;
use shared::{ForecastQuery, WeatherMetrics};

use crate::config::DEFAULT_WEATHER_ENDPOINT;
use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// WeatherAPI forecast response (only the fields we read)
#[derive(Debug, Default, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    forecast: Option<Forecast>,
}

#[derive(Debug, Default, Deserialize)]
struct Forecast {
    #[serde(default)]
    forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Default, Deserialize)]
struct ForecastDay {
    #[serde(default)]
    day: Option<DayConditions>,
}

/// Day-level aggregates for the requested date. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DayConditions {
    #[serde(default)]
    pub avgtemp_c: Option<f64>,
    #[serde(default)]
    pub avghumidity: Option<f64>,
    #[serde(default)]
    pub maxwind_kph: Option<f64>,
    #[serde(default)]
    pub totalprecip_mm: Option<f64>,
    #[serde(default)]
    pub uv: Option<f64>,
}

impl DayConditions {
    /// Map provider fields onto a snapshot, defaulting absent values to 0.
    ///
    /// The provider has no heat index or wind chill, so both fall back to
    /// the average temperature rather than the derived formulas.
    pub fn to_metrics(&self) -> WeatherMetrics {
        let temperature = self.avgtemp_c.unwrap_or(0.0);
        let wind_speed = match self.maxwind_kph {
            Some(kph) if kph != 0.0 => kph_to_mps(kph),
            _ => 0.0,
        };

        WeatherMetrics {
            temperature,
            humidity: self.avghumidity.unwrap_or(0.0),
            wind_speed,
            precipitation: self.totalprecip_mm.unwrap_or(0.0),
            heat_index: temperature,
            wind_chill: temperature,
            uv_index: self.uv.unwrap_or(0.0),
        }
    }
}

impl ForecastResponse {
    /// First forecast day, or an empty day when any level is missing
    fn into_first_day(self) -> DayConditions {
        self.forecast
            .and_then(|f| f.forecastday.into_iter().next())
            .and_then(|d| d.day)
            .unwrap_or_default()
    }
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_WEATHER_ENDPOINT.to_string())
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the day-level forecast for a location and date
    pub async fn get_day_forecast(&self, query: &ForecastQuery) -> AppResult<DayConditions> {
        let url = format!("{}/forecast.json", self.base_url);
        let date = query.date_param();
        tracing::debug!(location = %query.location, date = %date, "Requesting forecast");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", query.location.as_str()),
                ("dt", date.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Weather API request failed: {}", e);
                AppError::WeatherServiceUnavailable
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Weather API error: {} - {}", status, body);
            return Err(AppError::WeatherServiceUnavailable);
        }

        let data: ForecastResponse = response.json().await.map_err(|e| {
            tracing::warn!("Failed to parse forecast response: {}", e);
            AppError::WeatherServiceUnavailable
        })?;

        Ok(data.into_first_day())
    }

    /// Fetch the forecast and convert it to a metrics snapshot
    pub async fn fetch_metrics(&self, query: &ForecastQuery) -> AppResult<WeatherMetrics> {
        let day = self.get_day_forecast(query).await?;
        Ok(day.to_metrics())
    }
}
