//! Triage decision engine.
//!
//! Two independent, stateless classifiers:
//! 1. Symptom triage: keyword tiers over free-text complaints, bumped one step
//!    by a high average self-reported score
//! 2. SATS: vital-sign thresholds mapped to Green/Yellow/Orange/Red
//!
//! Plus care routing from either outcome and a single-record triage session.

mod care;
mod keywords;
mod sats;
mod session;
mod symptom;

pub use care::CareAction;
pub use keywords::{
    common_symptoms, matched_keyword, quick_pick_symptoms, KeywordMatch, COMMON_SYMPTOMS,
    CRITICAL_KEYWORDS, HIGH_KEYWORDS, MEDIUM_KEYWORDS,
};
pub use sats::{classify, classify_vitals};
pub use session::TriageSession;
pub use symptom::{evaluate, severity_description};

use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════════════════════

/// Every failure is a caller bug (bad input); nothing here is retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriageError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
