//! Risk classification outcome models

use serde::{Deserialize, Serialize};

/// Closed set of risk outcomes, one per assessment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    VeryHot,
    VeryCold,
    VeryWindy,
    VeryWet,
    VeryUncomfortable,
    Ok,
}

impl RiskCategory {
    /// All categories in rule evaluation order, `Ok` last
    pub const ALL: [RiskCategory; 6] = [
        RiskCategory::VeryHot,
        RiskCategory::VeryCold,
        RiskCategory::VeryWindy,
        RiskCategory::VeryWet,
        RiskCategory::VeryUncomfortable,
        RiskCategory::Ok,
    ];

    /// Ranking key used by the arbiter. Windy and wet deliberately tie at 3.
    pub fn severity(&self) -> u8 {
        match self {
            RiskCategory::VeryHot => 5,
            RiskCategory::VeryCold => 4,
            RiskCategory::VeryWindy => 3,
            RiskCategory::VeryWet => 3,
            RiskCategory::VeryUncomfortable => 2,
            RiskCategory::Ok => 0,
        }
    }

    /// Fixed advisory text for the category
    pub fn recommendation(&self) -> &'static str {
        match self {
            RiskCategory::VeryHot => {
                "Avoid outdoor activities. If necessary, take frequent breaks in shade and stay hydrated."
            }
            RiskCategory::VeryCold => "Dress in layers, cover exposed skin, limit time outdoors.",
            RiskCategory::VeryWindy => "Avoid activities near trees or water. Secure loose items.",
            RiskCategory::VeryWet => {
                "Bring waterproof gear or consider rescheduling outdoor activities."
            }
            RiskCategory::VeryUncomfortable => {
                "Plan for extra water breaks and consider lighter activities."
            }
            RiskCategory::Ok => {
                "Enjoy your outdoor adventure! Remember to stay hydrated and check conditions periodically."
            }
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskCategory::VeryHot => write!(f, "very hot"),
            RiskCategory::VeryCold => write!(f, "very cold"),
            RiskCategory::VeryWindy => write!(f, "very windy"),
            RiskCategory::VeryWet => write!(f, "very wet"),
            RiskCategory::VeryUncomfortable => write!(f, "very uncomfortable"),
            RiskCategory::Ok => write!(f, "ok"),
        }
    }
}

/// Outcome of classifying one weather snapshot
///
/// Carries no presentation hints; color and icon are looked up from
/// `category` by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub category: RiskCategory,
    pub description: String,
    pub recommendation: String,
    pub severity: u8,
}

impl RiskAssessment {
    /// Assessment for `category` with its fixed severity and recommendation
    pub fn new(category: RiskCategory, description: impl Into<String>) -> Self {
        Self {
            category,
            description: description.into(),
            recommendation: category.recommendation().to_string(),
            severity: category.severity(),
        }
    }

    /// The fallback returned when no rule matched
    pub fn ok() -> Self {
        Self::new(
            RiskCategory::Ok,
            "Weather conditions are favorable for outdoor activities",
        )
    }
}

/// Render a metric the way it reads in a description: `42`, `39.9`, never `-0`
pub fn format_metric(value: f64) -> String {
    if value == 0.0 {
        // folds -0.0 into 0
        return "0".to_string();
    }
    format!("{}", value)
}
