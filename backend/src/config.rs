//! Configuration management for the Weather Risk Assessment Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with WRA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::MetricsSource;

/// Default forecast provider endpoint
pub const DEFAULT_WEATHER_ENDPOINT: &str = "https://api.weatherapi.com/v1";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Weather API configuration
    pub weather: WeatherConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Forecast API endpoint
    pub api_endpoint: String,

    /// Forecast API key, supplied by the hosting environment
    #[serde(default)]
    pub api_key: String,

    /// Where metrics come from: `live` or `synthetic`
    pub source: MetricsSource,

    /// Fixed seed for synthetic metrics; random when absent
    #[serde(default)]
    pub synthetic_seed: Option<u64>,
}

impl WeatherConfig {
    /// Live mode cannot work without a credential
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source == MetricsSource::Live && self.api_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "weather.api_key is required when weather.source is 'live' (set WRA_WEATHER__API_KEY)"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("WRA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("weather.api_endpoint", DEFAULT_WEATHER_ENDPOINT)?
            .set_default("weather.api_key", "")?
            .set_default("weather.source", "live")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (WRA_ prefix)
            .add_source(
                Environment::with_prefix("WRA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.weather.validate()?;
        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
