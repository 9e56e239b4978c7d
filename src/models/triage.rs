use serde::{Deserialize, Serialize};

use super::enums::TriageSeverity;

/// Outcome of symptom triage. `urgency` and `recommendation` always follow `severity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageResult {
    pub severity: TriageSeverity,
    pub recommendation: String,
    pub urgency: String,
    /// Lower-cased symptom texts, in input order.
    pub symptoms: Vec<String>,
}

impl TriageResult {
    pub fn new(severity: TriageSeverity, symptoms: Vec<String>) -> Self {
        Self {
            severity,
            recommendation: severity.recommendation().to_string(),
            urgency: severity.urgency().to_string(),
            symptoms,
        }
    }
}
