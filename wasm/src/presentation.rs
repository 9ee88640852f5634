//! Display hints for the browser client
//!
//! Colors are Tailwind background classes, icons are Lucide names.

use serde::Serialize;
use shared::{Activity, RiskCategory, UvLevel};

/// Label shown when no known activity was chosen
pub const UNKNOWN_ACTIVITY_LABEL: &str = "🌟 Outdoor Activity";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskIcon {
    Thermometer,
    Wind,
    CloudRain,
    AlertTriangle,
    Sun,
}

/// Color and icon for a risk category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskStyle {
    pub color: &'static str,
    pub icon: RiskIcon,
}

pub fn risk_style(category: RiskCategory) -> RiskStyle {
    let (color, icon) = match category {
        RiskCategory::VeryHot => ("bg-red-500", RiskIcon::Thermometer),
        RiskCategory::VeryCold => ("bg-blue-500", RiskIcon::Wind),
        RiskCategory::VeryWindy => ("bg-gray-500", RiskIcon::Wind),
        RiskCategory::VeryWet => ("bg-blue-600", RiskIcon::CloudRain),
        RiskCategory::VeryUncomfortable => ("bg-orange-500", RiskIcon::AlertTriangle),
        RiskCategory::Ok => ("bg-green-500", RiskIcon::Sun),
    };
    RiskStyle { color, icon }
}

pub fn uv_color(level: UvLevel) -> &'static str {
    match level {
        UvLevel::Low => "bg-green-500",
        UvLevel::Moderate => "bg-yellow-500",
        UvLevel::High => "bg-orange-500",
        UvLevel::VeryHigh => "bg-red-500",
        UvLevel::Extreme => "bg-purple-500",
    }
}

pub fn activity_label(activity: Option<Activity>) -> &'static str {
    match activity {
        Some(Activity::Hiking) => "🥾 Hiking",
        Some(Activity::Camping) => "🏕️ Camping",
        Some(Activity::Fishing) => "🎣 Fishing",
        Some(Activity::Cycling) => "🚴 Cycling",
        Some(Activity::Running) => "🏃 Running",
        Some(Activity::Photography) => "📸 Photography",
        Some(Activity::Picnic) => "🧺 Picnic",
        Some(Activity::General) => "🌟 General Outdoor",
        None => UNKNOWN_ACTIVITY_LABEL,
    }
}
