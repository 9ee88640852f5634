//! Weather risk classification engine
//!
//! A snapshot passes once through the rule set and the arbiter:
//!
//! 1. [`RiskRuleSet`] collects every matching candidate in a fixed order
//! 2. [`SeverityArbiter`] keeps the most severe one (first seen on a tie)
//! 3. No candidate at all means the `ok` assessment
//!
//! Everything here is pure; the same snapshot always gives the same result.

mod arbiter;
mod rules;

pub use arbiter::SeverityArbiter;
pub use rules::*;

use crate::models::{RiskAssessment, WeatherMetrics};

/// Composition of rule set and arbiter
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskClassifier {
    rules: RiskRuleSet,
    arbiter: SeverityArbiter,
}

impl RiskClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one snapshot into exactly one assessment
    pub fn classify(&self, metrics: &WeatherMetrics) -> RiskAssessment {
        self.arbiter.arbitrate(self.rules.evaluate(metrics))
    }
}

/// Classify a snapshot with the standard rule set
pub fn classify(metrics: &WeatherMetrics) -> RiskAssessment {
    RiskClassifier::new().classify(metrics)
}
