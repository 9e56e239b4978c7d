use serde::{Deserialize, Serialize};

use crate::models::{SatsCategory, TriageSeverity};

/// What the UI surfaces after a triage outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareAction {
    /// Show the emergency-call affordance.
    EmergencyCall,
    /// Show the book-appointment affordance.
    BookAppointment,
    /// Nothing to act on now.
    Monitor,
}

impl CareAction {
    pub fn for_severity(severity: TriageSeverity) -> Self {
        match severity {
            TriageSeverity::Critical => CareAction::EmergencyCall,
            TriageSeverity::High | TriageSeverity::Medium => CareAction::BookAppointment,
            TriageSeverity::Low => CareAction::Monitor,
        }
    }

    pub fn for_sats(category: SatsCategory) -> Self {
        match category {
            SatsCategory::Red => CareAction::EmergencyCall,
            SatsCategory::Orange | SatsCategory::Yellow => CareAction::BookAppointment,
            SatsCategory::Green => CareAction::Monitor,
        }
    }

    /// Whether a booking from this outcome should be marked priority.
    pub fn appointment_priority(self) -> bool {
        !matches!(self, CareAction::Monitor)
    }
}
