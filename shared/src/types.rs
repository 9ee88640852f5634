//! Common types used across the platform

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::{parse_forecast_date, validate_location};

/// Where a forecast should be fetched for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForecastQuery {
    pub location: String,
    pub date: NaiveDate,
}

impl ForecastQuery {
    /// Build a query from user input, rejecting a blank location or a
    /// date that is not `YYYY-MM-DD`
    pub fn parse(location: &str, date: &str) -> Result<Self, &'static str> {
        validate_location(location)?;
        let date = parse_forecast_date(date)?;
        Ok(Self {
            location: location.trim().to_string(),
            date,
        })
    }

    /// Date in the provider's `dt` format
    pub fn date_param(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Which adapter produced a metrics snapshot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MetricsSource {
    /// Forecast provider over HTTP
    #[default]
    Live,
    /// Randomly generated offline data
    Synthetic,
}

impl MetricsSource {
    pub fn code(&self) -> &'static str {
        match self {
            MetricsSource::Live => "live",
            MetricsSource::Synthetic => "synthetic",
        }
    }
}

impl std::str::FromStr for MetricsSource {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(MetricsSource::Live),
            "synthetic" | "offline" | "mock" => Ok(MetricsSource::Synthetic),
            _ => Err("Metrics source must be 'live' or 'synthetic'"),
        }
    }
}

/// Planned outdoor activity. Echoed back to the user; it does not change
/// the classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    Hiking,
    Camping,
    Fishing,
    Cycling,
    Running,
    Photography,
    Picnic,
    General,
}

impl Activity {
    pub const ALL: [Activity; 8] = [
        Activity::Hiking,
        Activity::Camping,
        Activity::Fishing,
        Activity::Cycling,
        Activity::Running,
        Activity::Photography,
        Activity::Picnic,
        Activity::General,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Activity::Hiking => "hiking",
            Activity::Camping => "camping",
            Activity::Fishing => "fishing",
            Activity::Cycling => "cycling",
            Activity::Running => "running",
            Activity::Photography => "photography",
            Activity::Picnic => "picnic",
            Activity::General => "general",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.code() == code)
    }
}
