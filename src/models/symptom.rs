use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_DURATION, SEVERITY_MAX, SEVERITY_MIN};
use crate::triage::TriageError;

/// One patient-reported complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub symptom: String,
    /// Self-reported intensity, 1-10.
    pub severity: u8,
    /// Free text ("2 hours", "3 days"). Display only.
    pub duration: String,
}

impl SymptomEntry {
    pub fn new(symptom: impl Into<String>, severity: u8, duration: impl Into<String>) -> Self {
        Self {
            symptom: symptom.into(),
            severity,
            duration: duration.into(),
        }
    }

    /// Checks the fields the classifier relies on.
    pub fn validate(&self) -> Result<(), TriageError> {
        if self.symptom.trim().is_empty() {
            return Err(TriageError::InvalidInput("Please enter a symptom".into()));
        }
        if !(SEVERITY_MIN..=SEVERITY_MAX).contains(&self.severity) {
            return Err(TriageError::InvalidInput(format!(
                "Severity must be between {SEVERITY_MIN} and {SEVERITY_MAX}"
            )));
        }
        Ok(())
    }
}

/// Raw symptom form fields, as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SymptomForm {
    pub symptom: String,
    pub severity: String,
    pub duration: String,
}

impl SymptomForm {
    /// Trims and parses the form into an entry. A blank duration becomes "1 day".
    pub fn into_entry(self) -> Result<SymptomEntry, TriageError> {
        let symptom = self.symptom.trim();
        if symptom.is_empty() {
            return Err(TriageError::InvalidInput("Please enter a symptom".into()));
        }

        let severity = self
            .severity
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|s| (SEVERITY_MIN..=SEVERITY_MAX).contains(s))
            .ok_or_else(|| {
                TriageError::InvalidInput(format!(
                    "Severity must be between {SEVERITY_MIN} and {SEVERITY_MAX}"
                ))
            })?;

        let duration = match self.duration.trim() {
            "" => DEFAULT_DURATION.to_string(),
            d => d.to_string(),
        };

        Ok(SymptomEntry {
            symptom: symptom.to_string(),
            severity,
            duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(symptom: &str, severity: &str, duration: &str) -> SymptomForm {
        SymptomForm {
            symptom: symptom.into(),
            severity: severity.into(),
            duration: duration.into(),
        }
    }

    #[test]
    fn form_trims_and_defaults_duration() {
        let entry = form("  Headache ", "5", "   ").into_entry().unwrap();
        assert_eq!(entry.symptom, "Headache");
        assert_eq!(entry.severity, 5);
        assert_eq!(entry.duration, "1 day");
    }

    #[test]
    fn form_keeps_given_duration() {
        let entry = form("Cough", "3", "2 hours").into_entry().unwrap();
        assert_eq!(entry.duration, "2 hours");
    }

    #[test]
    fn form_rejects_blank_symptom() {
        let err = form("   ", "5", "").into_entry().unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Please enter a symptom");
    }

    #[test]
    fn form_rejects_bad_severity() {
        for bad in ["0", "11", "abc", "", "-3", "7.5"] {
            let err = form("Fever", bad, "").into_entry().unwrap_err();
            assert!(
                err.to_string().contains("Severity must be between 1 and 10"),
                "severity {bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn form_accepts_bounds() {
        assert_eq!(form("Fever", "1", "").into_entry().unwrap().severity, 1);
        assert_eq!(form("Fever", " 10 ", "").into_entry().unwrap().severity, 10);
    }

    #[test]
    fn validate_checks_range() {
        assert!(SymptomEntry::new("rash", 10, "1 day").validate().is_ok());
        assert!(SymptomEntry::new("rash", 0, "1 day").validate().is_err());
        assert!(SymptomEntry::new("rash", 11, "1 day").validate().is_err());
        assert!(SymptomEntry::new(" ", 5, "1 day").validate().is_err());
    }
}
