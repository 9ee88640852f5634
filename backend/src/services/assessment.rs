//! Assessment service: fetch metrics, classify them, remember the outcome

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, Utc};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use shared::synthetic::{RngSource, SyntheticMetricsGenerator};
use shared::{
    band_uv_index, classify, parse_forecast_date, validate_location, validate_metrics, Activity,
    ForecastQuery, MetricsSource, RiskAssessment, UvLevel, WeatherMetrics,
};
use tokio::sync::RwLock;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::config::WeatherConfig;
use crate::error::{AppError, AppResult};
use crate::external::weather::WeatherClient;

type SeededGenerator = SyntheticMetricsGenerator<RngSource<ChaCha8Rng>>;

/// Where the service gets its metrics from
enum MetricsProvider {
    Live(WeatherClient),
    Synthetic(Mutex<SeededGenerator>),
}

/// Latest outcome plus the ticket of the request that produced it
#[derive(Debug, Default)]
struct LatestSlot {
    ticket: u64,
    state: AssessmentState,
}

/// Assessment service shared by all handlers
#[derive(Clone)]
pub struct AssessmentService {
    provider: Arc<MetricsProvider>,
    latest: Arc<RwLock<LatestSlot>>,
    tickets: Arc<AtomicU64>,
}

/// Input for requesting an assessment
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssessInput {
    pub location: String,
    pub date: String,
    /// Planned time of day, `HH:MM`
    #[validate(custom = "validate_time_of_day")]
    pub time: Option<String>,
    pub activity: Option<Activity>,
}

fn validate_time_of_day(time: &str) -> Result<(), ValidationError> {
    chrono::NaiveTime::parse_from_str(time, "%H:%M")
        .map(|_| ())
        .map_err(|_| {
            let mut err = ValidationError::new("time_format");
            err.message = Some("Time must be in HH:MM format".into());
            err
        })
}

/// A completed assessment: the snapshot and its classification together
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub assessed_at: DateTime<Utc>,
    pub location: String,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity: Option<Activity>,
    pub source: MetricsSource,
    pub metrics: WeatherMetrics,
    pub assessment: RiskAssessment,
    pub uv_level: UvLevel,
}

/// Outcome of the most recent assessment attempt.
///
/// Replaced as a whole: metrics and assessment are never visible apart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssessmentState {
    #[default]
    Empty,
    Ready(Box<AssessmentRecord>),
    Failed {
        message: String,
        failed_at: DateTime<Utc>,
    },
}

impl AssessmentService {
    /// Build a service from configuration
    pub fn from_config(config: &WeatherConfig) -> AppResult<Self> {
        config
            .validate()
            .map_err(|e| AppError::Configuration(e.to_string()))?;

        Ok(match config.source {
            MetricsSource::Live => Self::live(WeatherClient::with_base_url(
                config.api_key.clone(),
                config.api_endpoint.clone(),
            )),
            MetricsSource::Synthetic => {
                let seed = config.synthetic_seed.unwrap_or_else(rand::random);
                tracing::info!("Synthetic metrics seed: {}", seed);
                Self::synthetic(seed)
            }
        })
    }

    /// Service backed by the live forecast API
    pub fn live(client: WeatherClient) -> Self {
        Self::with_provider(MetricsProvider::Live(client))
    }

    /// Service backed by seeded synthetic metrics
    pub fn synthetic(seed: u64) -> Self {
        Self::with_provider(MetricsProvider::Synthetic(Mutex::new(
            SyntheticMetricsGenerator::seeded(seed),
        )))
    }

    fn with_provider(provider: MetricsProvider) -> Self {
        Self {
            provider: Arc::new(provider),
            latest: Arc::new(RwLock::new(LatestSlot::default())),
            tickets: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn source(&self) -> MetricsSource {
        match self.provider.as_ref() {
            MetricsProvider::Live(_) => MetricsSource::Live,
            MetricsProvider::Synthetic(_) => MetricsSource::Synthetic,
        }
    }

    /// Validate the request, fetch metrics, classify, and record the outcome.
    ///
    /// Invalid input is rejected before anything is fetched and leaves the
    /// latest state alone. A fetch failure clears it. Requests may overlap;
    /// an outcome is only recorded if no later-started request has already
    /// recorded one.
    pub async fn assess(&self, input: AssessInput) -> AppResult<AssessmentRecord> {
        let query = Self::parse_query(&input)?;
        let ticket = self.tickets.fetch_add(1, Ordering::SeqCst) + 1;

        let metrics = match self.fetch_metrics(&query).await {
            Ok(metrics) => metrics,
            Err(err) => {
                self.publish(
                    ticket,
                    AssessmentState::Failed {
                        message: "Failed to fetch weather data".to_string(),
                        failed_at: Utc::now(),
                    },
                )
                .await;
                return Err(err);
            }
        };

        let assessment = classify(&metrics);
        tracing::info!(
            location = %query.location,
            date = %query.date,
            category = %assessment.category,
            severity = assessment.severity,
            "Weather risk assessed"
        );

        let record = AssessmentRecord {
            id: Uuid::new_v4(),
            assessed_at: Utc::now(),
            location: query.location,
            date: query.date,
            time: input.time,
            activity: input.activity,
            source: self.source(),
            uv_level: band_uv_index(metrics.uv_index),
            metrics,
            assessment,
        };

        self.publish(ticket, AssessmentState::Ready(Box::new(record.clone())))
            .await;
        Ok(record)
    }

    /// Snapshot of the most recent outcome
    pub async fn latest(&self) -> AssessmentState {
        self.latest.read().await.state.clone()
    }

    /// Replace the latest state unless a newer request already did.
    async fn publish(&self, ticket: u64, state: AssessmentState) -> bool {
        let mut slot = self.latest.write().await;
        if ticket < slot.ticket {
            tracing::debug!(ticket, current = slot.ticket, "Dropping superseded assessment outcome");
            return false;
        }
        *slot = LatestSlot { ticket, state };
        true
    }

    /// Classify caller-supplied metrics without touching the latest state
    pub fn classify_metrics(&self, metrics: &WeatherMetrics) -> AppResult<RiskAssessment> {
        validate_metrics(metrics).map_err(|m| AppError::validation("metrics", m))?;
        Ok(classify(metrics))
    }

    fn parse_query(input: &AssessInput) -> AppResult<ForecastQuery> {
        validate_location(&input.location).map_err(|m| AppError::validation("location", m))?;
        let date = parse_forecast_date(&input.date).map_err(|m| AppError::validation("date", m))?;
        input.validate()?;
        Ok(ForecastQuery {
            location: input.location.trim().to_string(),
            date,
        })
    }

    async fn fetch_metrics(&self, query: &ForecastQuery) -> AppResult<WeatherMetrics> {
        match self.provider.as_ref() {
            MetricsProvider::Live(client) => client.fetch_metrics(query).await,
            MetricsProvider::Synthetic(generator) => Self::next_synthetic(generator),
        }
    }

    fn next_synthetic(generator: &Mutex<SeededGenerator>) -> AppResult<WeatherMetrics> {
        let mut generator = generator
            .lock()
            .map_err(|_| AppError::Internal("Synthetic metrics generator unavailable".to_string()))?;
        Ok(generator.next_metrics())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::RiskCategory;

    fn input(location: &str, date: &str) -> AssessInput {
        AssessInput {
            location: location.to_string(),
            date: date.to_string(),
            time: None,
            activity: None,
        }
    }

    #[test]
    fn test_synthetic_assessment_is_recorded() {
        let service = AssessmentService::synthetic(42);
        let record = tokio_test::block_on(service.assess(AssessInput {
            time: Some("12:00".to_string()),
            activity: Some(Activity::Hiking),
            ..input("Hanoi", "2024-07-01")
        }))
        .unwrap();

        assert_eq!(record.source, MetricsSource::Synthetic);
        assert_eq!(record.location, "Hanoi");
        assert_eq!(record.activity, Some(Activity::Hiking));
        assert_eq!(record.assessment, classify(&record.metrics));
        assert_eq!(record.uv_level, band_uv_index(record.metrics.uv_index));

        let latest = tokio_test::block_on(service.latest());
        assert_eq!(latest, AssessmentState::Ready(Box::new(record)));
    }

    #[test]
    fn test_same_seed_same_metrics() {
        let a = AssessmentService::synthetic(9);
        let b = AssessmentService::synthetic(9);
        let ra = tokio_test::block_on(a.assess(input("Hue", "2024-01-01"))).unwrap();
        let rb = tokio_test::block_on(b.assess(input("Hue", "2024-01-01"))).unwrap();
        assert_eq!(ra.metrics, rb.metrics);
        assert_eq!(ra.assessment, rb.assessment);
    }

    #[test]
    fn test_invalid_input_leaves_state_untouched() {
        let service = AssessmentService::synthetic(1);
        let first = tokio_test::block_on(service.assess(input("Hanoi", "2024-07-01"))).unwrap();

        for bad in [
            input("", "2024-07-01"),
            input("   ", "2024-07-01"),
            input("Hanoi", "July 1st"),
            AssessInput {
                time: Some("noon".to_string()),
                ..input("Hanoi", "2024-07-01")
            },
        ] {
            let err = tokio_test::block_on(service.assess(bad)).unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }), "{:?}", err);
        }

        let latest = tokio_test::block_on(service.latest());
        assert_eq!(latest, AssessmentState::Ready(Box::new(first)));
    }

    #[test]
    fn test_location_length_checked_after_trimming() {
        let service = AssessmentService::synthetic(3);

        let err = tokio_test::block_on(service.assess(input(&"x".repeat(201), "2024-07-01")))
            .unwrap_err();
        match err {
            AppError::Validation { field, message } => {
                assert_eq!(field, "location");
                assert_eq!(message, "Location must be at most 200 characters");
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let padded = format!("  {}  ", "y".repeat(200));
        let record = tokio_test::block_on(service.assess(input(&padded, "2024-07-01"))).unwrap();
        assert_eq!(record.location, "y".repeat(200));
    }

    #[test]
    fn test_blank_location_is_required() {
        let service = AssessmentService::synthetic(3);
        let err = tokio_test::block_on(service.assess(input("", "2024-07-01"))).unwrap_err();
        match err {
            AppError::Validation { field, message } => {
                assert_eq!(field, "location");
                assert_eq!(message, "Location is required");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_superseded_outcome_is_dropped() {
        let service = AssessmentService::synthetic(5);
        let newer = tokio_test::block_on(service.assess(input("Hanoi", "2024-07-01"))).unwrap();

        // an older request finishing late must not clobber the newer result
        let stale = AssessmentState::Failed {
            message: "Failed to fetch weather data".to_string(),
            failed_at: Utc::now(),
        };
        assert!(!tokio_test::block_on(service.publish(0, stale)));

        let latest = tokio_test::block_on(service.latest());
        assert_eq!(latest, AssessmentState::Ready(Box::new(newer)));

        let next = tokio_test::block_on(service.assess(input("Hue", "2024-07-02"))).unwrap();
        let latest = tokio_test::block_on(service.latest());
        assert_eq!(latest, AssessmentState::Ready(Box::new(next)));
    }

    #[test]
    fn test_classify_metrics_validates() {
        let service = AssessmentService::synthetic(1);
        let hot = WeatherMetrics::from_raw(42.0, 30.0, 2.0, 0.0, 8.0);
        assert_eq!(
            service.classify_metrics(&hot).unwrap().category,
            RiskCategory::VeryHot
        );

        let broken = WeatherMetrics {
            humidity: 150.0,
            ..hot
        };
        assert!(service.classify_metrics(&broken).is_err());
    }

    #[test]
    fn test_state_wire_format() {
        let json = serde_json::to_value(AssessmentState::Empty).unwrap();
        assert_eq!(json["status"], "empty");
    }
}
