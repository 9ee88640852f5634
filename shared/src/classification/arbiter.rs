//! Severity arbitration between competing candidates

use crate::models::RiskAssessment;

/// Picks one assessment out of the rule set's candidates
#[derive(Debug, Clone, Copy, Default)]
pub struct SeverityArbiter;

impl SeverityArbiter {
    /// Highest severity wins; on a tie the earliest candidate is kept.
    ///
    /// An empty candidate list yields the fixed `ok` assessment.
    pub fn arbitrate(&self, candidates: Vec<RiskAssessment>) -> RiskAssessment {
        let mut best: Option<RiskAssessment> = None;
        for candidate in candidates {
            match &best {
                // strictly greater, so the first-seen candidate survives a tie
                Some(current) if candidate.severity <= current.severity => {}
                _ => best = Some(candidate),
            }
        }
        best.unwrap_or_else(RiskAssessment::ok)
    }
}
