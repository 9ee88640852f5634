//! UV index banding

use serde::{Deserialize, Serialize};

/// Qualitative UV exposure level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UvLevel {
    /// 2 and below
    Low,
    /// 2-5
    Moderate,
    /// 5-7
    High,
    /// 7-10
    VeryHigh,
    /// Above 10
    Extreme,
}

impl std::fmt::Display for UvLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UvLevel::Low => write!(f, "Low"),
            UvLevel::Moderate => write!(f, "Moderate"),
            UvLevel::High => write!(f, "High"),
            UvLevel::VeryHigh => write!(f, "Very High"),
            UvLevel::Extreme => write!(f, "Extreme"),
        }
    }
}

/// Band a UV index; each bound is an inclusive upper limit.
///
/// Negative inputs are Low. NaN fails every comparison and is Extreme.
pub fn band_uv_index(uv_index: f64) -> UvLevel {
    if uv_index <= 2.0 {
        UvLevel::Low
    } else if uv_index <= 5.0 {
        UvLevel::Moderate
    } else if uv_index <= 7.0 {
        UvLevel::High
    } else if uv_index <= 10.0 {
        UvLevel::VeryHigh
    } else {
        UvLevel::Extreme
    }
}
