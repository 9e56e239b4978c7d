use serde::Serialize;

use crate::config::QUICK_PICK_COUNT;
use crate::models::TriageSeverity;

/// Any symptom containing one of these is an emergency, whatever the scores say.
pub const CRITICAL_KEYWORDS: &[&str] = &[
    "chest pain",
    "difficulty breathing",
    "severe bleeding",
    "loss of consciousness",
    "severe head injury",
    "stroke symptoms",
    "heart attack",
    "severe allergic reaction",
    "poisoning",
    "severe burns",
];

pub const HIGH_KEYWORDS: &[&str] = &[
    "severe pain",
    "high fever",
    "vomiting blood",
    "severe abdominal pain",
    "broken bone",
    "deep cut",
    "severe headache",
    "vision problems",
    "severe dizziness",
];

pub const MEDIUM_KEYWORDS: &[&str] = &[
    "moderate pain",
    "fever",
    "persistent cough",
    "nausea",
    "mild headache",
    "rash",
    "minor cut",
    "sprain",
    "cold symptoms",
];

/// Tiers in precedence order. Low has no keywords; it is the fallback.
const TIERS: [(TriageSeverity, &[&str]); 3] = [
    (TriageSeverity::Critical, CRITICAL_KEYWORDS),
    (TriageSeverity::High, HIGH_KEYWORDS),
    (TriageSeverity::Medium, MEDIUM_KEYWORDS),
];

/// Quick-pick catalog for the symptom form.
pub const COMMON_SYMPTOMS: &[&str] = &[
    "Headache",
    "Fever",
    "Cough",
    "Sore throat",
    "Nausea",
    "Abdominal pain",
    "Back pain",
    "Fatigue",
    "Dizziness",
    "Chest pain",
    "Shortness of breath",
    "Rash",
    "Joint pain",
    "Muscle pain",
    "Vomiting",
    "Diarrhea",
    "Constipation",
    "Insomnia",
    "Anxiety",
    "Depression",
];

pub fn common_symptoms() -> &'static [&'static str] {
    COMMON_SYMPTOMS
}

/// The leading slice of the catalog shown as buttons.
pub fn quick_pick_symptoms() -> &'static [&'static str] {
    &COMMON_SYMPTOMS[..QUICK_PICK_COUNT.min(COMMON_SYMPTOMS.len())]
}

/// The most urgent keyword a single symptom text contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeywordMatch {
    pub tier: TriageSeverity,
    pub phrase: &'static str,
}

/// Case-insensitive substring match against the tiers, most urgent first.
pub fn matched_keyword(text: &str) -> Option<KeywordMatch> {
    let lower = text.to_lowercase();
    TIERS.iter().find_map(|(tier, phrases)| {
        phrases
            .iter()
            .copied()
            .find(|phrase| lower.contains(phrase))
            .map(|phrase| KeywordMatch {
                tier: *tier,
                phrase,
            })
    })
}

/// Highest tier matched by any of the (already lower-cased) texts.
pub(crate) fn keyword_tier(texts: &[String]) -> TriageSeverity {
    TIERS
        .iter()
        .find(|(_, phrases)| {
            texts
                .iter()
                .any(|text| phrases.iter().any(|phrase| text.contains(phrase)))
        })
        .map(|(tier, _)| *tier)
        .unwrap_or(TriageSeverity::Low)
}
