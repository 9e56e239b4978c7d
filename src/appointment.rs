//! Booking boundary: the request the appointment subsystem receives.
//!
//! The engine never stores bookings or issues ticket codes. It only checks
//! that a request is well formed and that symptom-based bookings carry the
//! triage result they were made from.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{AppointmentKind, TriageResult};
use crate::triage::{CareAction, TriageError};

// ─── Types ────────────────────────────────────────────────────────────────────

/// Request to book an appointment, optionally carrying a triage outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(rename = "type")]
    pub kind: AppointmentKind,
    pub date: String, // YYYY-MM-DD
    pub time: String, // HH:MM
    pub triage_result: Option<TriageResult>,
}

/// A request that passed validation, with parsed date and time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedBooking {
    pub kind: AppointmentKind,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub symptoms: Vec<String>,
    pub triage_result: Option<TriageResult>,
    pub priority: bool,
}

// ─── Validation ───────────────────────────────────────────────────────────────

impl BookingRequest {
    pub fn validate(&self) -> Result<ValidatedBooking, TriageError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| {
            TriageError::InvalidInput("Invalid date format (expected YYYY-MM-DD)".into())
        })?;
        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M").map_err(|_| {
            TriageError::InvalidInput("Invalid time format (expected HH:MM)".into())
        })?;

        if self.kind == AppointmentKind::SymptomBased && self.triage_result.is_none() {
            tracing::warn!("booking rejected: symptom-based without triage");
            return Err(TriageError::InvalidInput(
                "Please complete the symptom triage process before booking a symptom-based appointment."
                    .into(),
            ));
        }

        // Urgency and recommendation are rederived from severity.
        let triage_result = self
            .triage_result
            .as_ref()
            .map(|r| TriageResult::new(r.severity, r.symptoms.clone()));
        let symptoms = triage_result
            .as_ref()
            .map(|r| r.symptoms.clone())
            .unwrap_or_default();
        let priority = triage_result
            .as_ref()
            .is_some_and(|r| CareAction::for_severity(r.severity).appointment_priority());

        tracing::info!(
            kind = %self.kind,
            triaged = triage_result.is_some(),
            priority,
            "booking request validated"
        );

        Ok(ValidatedBooking {
            kind: self.kind,
            date,
            time,
            symptoms,
            triage_result,
            priority,
        })
    }
}

impl ValidatedBooking {
    /// Confirmation text shown once the external store has issued a ticket.
    pub fn confirmation_message(&self, ticket_code: &str) -> String {
        let mut message = format!("Your appointment has been scheduled.\nTicket: {ticket_code}\n");
        if self.kind == AppointmentKind::SymptomBased {
            if let Some(ref result) = self.triage_result {
                message.push_str(&format!("Triage result: {}", result.recommendation));
            }
        }
        message
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
