//! Risk rules evaluated against a weather snapshot

use crate::models::{format_metric, RiskAssessment, RiskCategory, WeatherMetrics};

/// Heat index (°C) at or above which conditions are very hot
pub const VERY_HOT_HEAT_INDEX: f64 = 40.0;
/// Temperature or wind chill (°C) at or below which conditions are very cold
pub const VERY_COLD_TEMPERATURE: f64 = -10.0;
/// Wind speed (m/s) at or above which conditions are very windy
pub const VERY_WINDY_SPEED: f64 = 15.0;
/// Precipitation (mm) at or above which conditions are very wet
pub const VERY_WET_PRECIPITATION: f64 = 10.0;
/// Heat index (°C) at or above which conditions are uncomfortable
pub const UNCOMFORTABLE_HEAT_INDEX: f64 = 32.0;
/// Temperature (°C) that, with high humidity, is uncomfortable
pub const UNCOMFORTABLE_TEMPERATURE: f64 = 25.0;
/// Humidity (%) that, with a warm temperature, is uncomfortable
pub const UNCOMFORTABLE_HUMIDITY: f64 = 80.0;

/// A single risk rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskRule {
    VeryHot,
    VeryCold,
    VeryWindy,
    VeryWet,
    /// Only consulted when no other rule matched
    VeryUncomfortable,
}

impl RiskRule {
    /// Rules that fire regardless of each other, in tie-break order
    pub const INDEPENDENT: [RiskRule; 4] = [
        RiskRule::VeryHot,
        RiskRule::VeryCold,
        RiskRule::VeryWindy,
        RiskRule::VeryWet,
    ];

    pub fn category(&self) -> RiskCategory {
        match self {
            RiskRule::VeryHot => RiskCategory::VeryHot,
            RiskRule::VeryCold => RiskCategory::VeryCold,
            RiskRule::VeryWindy => RiskCategory::VeryWindy,
            RiskRule::VeryWet => RiskCategory::VeryWet,
            RiskRule::VeryUncomfortable => RiskCategory::VeryUncomfortable,
        }
    }

    /// Whether the rule's own condition holds. Every bound is inclusive.
    pub fn matches(&self, m: &WeatherMetrics) -> bool {
        match self {
            RiskRule::VeryHot => m.heat_index >= VERY_HOT_HEAT_INDEX,
            RiskRule::VeryCold => {
                m.temperature <= VERY_COLD_TEMPERATURE || m.wind_chill <= VERY_COLD_TEMPERATURE
            }
            RiskRule::VeryWindy => m.wind_speed >= VERY_WINDY_SPEED,
            RiskRule::VeryWet => m.precipitation >= VERY_WET_PRECIPITATION,
            RiskRule::VeryUncomfortable => {
                m.heat_index >= UNCOMFORTABLE_HEAT_INDEX
                    || (m.temperature >= UNCOMFORTABLE_TEMPERATURE
                        && m.humidity >= UNCOMFORTABLE_HUMIDITY)
            }
        }
    }

    fn describe(&self, m: &WeatherMetrics) -> String {
        match self {
            RiskRule::VeryHot => format!(
                "Heat index of {}°C poses serious heat stress risk",
                format_metric(m.heat_index)
            ),
            RiskRule::VeryCold => format!(
                "Temperature {}°C with wind chill {}°C",
                format_metric(m.temperature),
                format_metric(m.wind_chill)
            ),
            RiskRule::VeryWindy => format!(
                "Wind speed of {} m/s creates hazardous conditions",
                format_metric(m.wind_speed)
            ),
            RiskRule::VeryWet => format!(
                "{}mm of precipitation expected",
                format_metric(m.precipitation)
            ),
            RiskRule::VeryUncomfortable => format!(
                "High humidity ({}%) and temperature create uncomfortable conditions",
                format_metric(m.humidity)
            ),
        }
    }

    /// Candidate assessment if the rule matches
    pub fn evaluate(&self, metrics: &WeatherMetrics) -> Option<RiskAssessment> {
        self.matches(metrics)
            .then(|| RiskAssessment::new(self.category(), self.describe(metrics)))
    }
}

/// The fixed, ordered rule set
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskRuleSet;

impl RiskRuleSet {
    /// Collect every matching candidate in evaluation order.
    ///
    /// The four independent rules run first; the uncomfortable rule is
    /// tested only when none of them produced a candidate.
    pub fn evaluate(&self, metrics: &WeatherMetrics) -> Vec<RiskAssessment> {
        let mut candidates: Vec<RiskAssessment> = RiskRule::INDEPENDENT
            .iter()
            .filter_map(|rule| rule.evaluate(metrics))
            .collect();

        if candidates.is_empty() {
            candidates.extend(RiskRule::VeryUncomfortable.evaluate(metrics));
        }

        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm() -> WeatherMetrics {
        WeatherMetrics {
            temperature: 20.0,
            humidity: 50.0,
            wind_speed: 5.0,
            precipitation: 0.0,
            heat_index: 22.0,
            wind_chill: 20.0,
            uv_index: 3.0,
        }
    }

    fn categories(candidates: &[RiskAssessment]) -> Vec<RiskCategory> {
        candidates.iter().map(|c| c.category).collect()
    }

    #[test]
    fn test_calm_day_has_no_candidates() {
        assert!(RiskRuleSet.evaluate(&calm()).is_empty());
    }

    #[test]
    fn test_independent_rules_all_fire_in_order() {
        let metrics = WeatherMetrics {
            temperature: -12.0,
            heat_index: 41.0,
            wind_speed: 16.0,
            precipitation: 12.0,
            ..calm()
        };
        assert_eq!(
            categories(&RiskRuleSet.evaluate(&metrics)),
            vec![
                RiskCategory::VeryHot,
                RiskCategory::VeryCold,
                RiskCategory::VeryWindy,
                RiskCategory::VeryWet,
            ]
        );
    }

    #[test]
    fn test_cold_triggers_on_wind_chill_alone() {
        let metrics = WeatherMetrics {
            temperature: 0.0,
            wind_chill: -10.0,
            ..calm()
        };
        assert_eq!(
            categories(&RiskRuleSet.evaluate(&metrics)),
            vec![RiskCategory::VeryCold]
        );
    }

    #[test]
    fn test_uncomfortable_gated_by_other_matches() {
        let humid = WeatherMetrics {
            temperature: 25.0,
            humidity: 80.0,
            ..calm()
        };
        assert_eq!(
            categories(&RiskRuleSet.evaluate(&humid)),
            vec![RiskCategory::VeryUncomfortable]
        );

        let humid_and_wet = WeatherMetrics {
            precipitation: 10.0,
            ..humid
        };
        assert_eq!(
            categories(&RiskRuleSet.evaluate(&humid_and_wet)),
            vec![RiskCategory::VeryWet]
        );
    }

    #[test]
    fn test_uncomfortable_via_heat_index() {
        let metrics = WeatherMetrics {
            heat_index: 32.0,
            ..calm()
        };
        assert!(RiskRule::VeryUncomfortable.matches(&metrics));
        let metrics = WeatherMetrics {
            heat_index: 31.9,
            ..calm()
        };
        assert!(!RiskRule::VeryUncomfortable.matches(&metrics));
    }

    #[test]
    fn test_descriptions_reference_metrics() {
        let metrics = WeatherMetrics {
            temperature: -15.0,
            wind_chill: -21.5,
            ..calm()
        };
        let cold = RiskRule::VeryCold.evaluate(&metrics).unwrap();
        assert_eq!(cold.description, "Temperature -15°C with wind chill -21.5°C");
        assert_eq!(cold.severity, 4);

        let wet = RiskRule::VeryWet
            .evaluate(&WeatherMetrics {
                precipitation: 12.3,
                ..calm()
            })
            .unwrap();
        assert_eq!(wet.description, "12.3mm of precipitation expected");

        let humid = RiskRule::VeryUncomfortable
            .evaluate(&WeatherMetrics {
                temperature: 28.0,
                humidity: 85.0,
                ..calm()
            })
            .unwrap();
        assert_eq!(
            humid.description,
            "High humidity (85%) and temperature create uncomfortable conditions"
        );
    }
}
