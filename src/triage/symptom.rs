use crate::config::ESCALATION_THRESHOLD;
use crate::models::{SymptomEntry, TriageResult};

use super::keywords::keyword_tier;
use super::TriageError;

/// Classify a list of reported symptoms.
///
/// The keyword tier decides first (critical > high > medium > low). An average
/// self-reported score of 8 or more then bumps a non-critical tier exactly one step.
pub fn evaluate(symptoms: &[SymptomEntry]) -> Result<TriageResult, TriageError> {
    if symptoms.is_empty() {
        tracing::warn!("triage rejected: empty symptom list");
        return Err(TriageError::InvalidInput(
            "Please add at least one symptom".into(),
        ));
    }
    for (index, entry) in symptoms.iter().enumerate() {
        if let Err(e) = entry.validate() {
            tracing::warn!(index, error = %e, "triage rejected: invalid symptom entry");
            return Err(e);
        }
    }

    let symptom_texts: Vec<String> = symptoms.iter().map(|s| s.symptom.to_lowercase()).collect();

    let base = keyword_tier(&symptom_texts);

    let total: u32 = symptoms.iter().map(|s| u32::from(s.severity)).sum();
    let avg_severity = f64::from(total) / symptoms.len() as f64;

    let severity = if avg_severity >= ESCALATION_THRESHOLD {
        base.escalated()
    } else {
        base
    };

    tracing::info!(
        symptom_count = symptoms.len(),
        avg_severity,
        keyword_tier = %base,
        severity = %severity,
        "symptom triage complete"
    );

    Ok(TriageResult::new(severity, symptom_texts))
}

/// Band a 1-10 score into a label. Upper bound of each band is inclusive.
pub fn severity_description(score: u8) -> &'static str {
    match score {
        0..=2 => "Mild",
        3..=4 => "Mild to Moderate",
        5..=6 => "Moderate",
        7..=8 => "Moderate to Severe",
        _ => "Severe",
    }
}
