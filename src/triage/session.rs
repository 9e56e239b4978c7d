use serde::{Deserialize, Serialize};

use crate::models::{SymptomEntry, SymptomForm, TriageResult};

use super::care::CareAction;
use super::symptom::evaluate;
use super::TriageError;

/// The symptoms being collected on the triage screen plus the last result.
///
/// Holds a single record only. Any change to the symptom list drops the
/// previous result so a stale outcome is never shown against new input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriageSession {
    symptoms: Vec<SymptomEntry>,
    result: Option<TriageResult>,
}

impl TriageSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the form and appends it. Returns the new entry.
    pub fn add_symptom(&mut self, form: SymptomForm) -> Result<&SymptomEntry, TriageError> {
        let entry = form.into_entry()?;
        self.symptoms.push(entry);
        self.result = None;
        tracing::debug!(count = self.symptoms.len(), "symptom added to session");
        Ok(&self.symptoms[self.symptoms.len() - 1])
    }

    pub fn remove_symptom(&mut self, index: usize) -> Result<SymptomEntry, TriageError> {
        if index >= self.symptoms.len() {
            return Err(TriageError::InvalidInput(format!(
                "No symptom at position {index}"
            )));
        }
        self.result = None;
        Ok(self.symptoms.remove(index))
    }

    pub fn symptoms(&self) -> &[SymptomEntry] {
        &self.symptoms
    }

    /// Classifies the collected symptoms and keeps the result.
    pub fn run(&mut self) -> Result<&TriageResult, TriageError> {
        let result = evaluate(&self.symptoms)?;
        Ok(&*self.result.insert(result))
    }

    pub fn result(&self) -> Option<&TriageResult> {
        self.result.as_ref()
    }

    /// Affordance for the current result, if one has been computed.
    pub fn care_action(&self) -> Option<CareAction> {
        self.result
            .as_ref()
            .map(|r| CareAction::for_severity(r.severity))
    }

    /// Consumes the result for attaching to a booking and clears the session.
    pub fn take_result(&mut self) -> Option<TriageResult> {
        let result = self.result.take();
        self.symptoms.clear();
        result
    }

    pub fn reset(&mut self) {
        self.symptoms.clear();
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TriageSeverity;

    fn form(symptom: &str, severity: &str) -> SymptomForm {
        SymptomForm {
            symptom: symptom.into(),
            severity: severity.into(),
            duration: String::new(),
        }
    }

    #[test]
    fn run_on_empty_session_fails() {
        let mut session = TriageSession::new();
        let err = session.run().unwrap_err();
        assert_eq!(
            err,
            TriageError::InvalidInput("Please add at least one symptom".into())
        );
        assert!(session.result().is_none());
    }

    #[test]
    fn add_then_run() {
        let mut session = TriageSession::new();
        session.add_symptom(form("Chest pain", "4")).unwrap();
        session.add_symptom(form("Nausea", "3")).unwrap();
        assert_eq!(session.symptoms().len(), 2);
        assert_eq!(session.symptoms()[1].duration, "1 day");

        let result = session.run().unwrap();
        assert_eq!(result.severity, TriageSeverity::Critical);
        assert_eq!(session.care_action(), Some(CareAction::EmergencyCall));
    }

    #[test]
    fn invalid_form_is_not_added() {
        let mut session = TriageSession::new();
        assert!(session.add_symptom(form("Fever", "12")).is_err());
        assert!(session.symptoms().is_empty());
    }

    #[test]
    fn changing_symptoms_clears_result() {
        let mut session = TriageSession::new();
        session.add_symptom(form("rash", "2")).unwrap();
        session.run().unwrap();
        assert!(session.result().is_some());

        session.add_symptom(form("sprain", "2")).unwrap();
        assert!(session.result().is_none());

        session.run().unwrap();
        session.remove_symptom(0).unwrap();
        assert!(session.result().is_none());
        assert_eq!(session.symptoms()[0].symptom, "sprain");
    }

    #[test]
    fn remove_out_of_range_fails() {
        let mut session = TriageSession::new();
        assert!(session.remove_symptom(0).is_err());
    }

    #[test]
    fn take_result_clears_session() {
        let mut session = TriageSession::new();
        session.add_symptom(form("fever", "5")).unwrap();
        session.run().unwrap();

        let result = session.take_result().unwrap();
        assert_eq!(result.severity, TriageSeverity::Medium);
        assert!(session.symptoms().is_empty());
        assert!(session.result().is_none());
        assert!(session.take_result().is_none());
    }

    #[test]
    fn reset_clears_everything() {
        let mut session = TriageSession::new();
        session.add_symptom(form("fever", "5")).unwrap();
        session.run().unwrap();
        session.reset();
        assert!(session.symptoms().is_empty());
        assert!(session.care_action().is_none());
    }
}
