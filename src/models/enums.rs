use crate::triage::TriageError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Variant order is significant: derived `Ord` follows declaration order.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = TriageError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(TriageError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(TriageSeverity {
    Low => "low",
    Medium => "medium",
    High => "high",
    Critical => "critical",
});

str_enum!(SatsCategory {
    Green => "Green",
    Yellow => "Yellow",
    Orange => "Orange",
    Red => "Red",
});

str_enum!(Avpu {
    Alert => "Alert",
    Voice => "Voice",
    Pain => "Pain",
    Unresponsive => "Unresponsive",
});

str_enum!(AppointmentKind {
    Routine => "routine",
    SymptomBased => "symptom-based",
});

impl TriageSeverity {
    /// One step up the scale for a high average self-reported score.
    /// Critical is only reachable by keyword, so escalation stops at High.
    pub fn escalated(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium | Self::High => Self::High,
            Self::Critical => Self::Critical,
        }
    }

    /// Patient-facing next step for this tier.
    pub fn recommendation(self) -> &'static str {
        match self {
            Self::Critical => {
                "Seek immediate emergency care. Call 911 or go to the nearest emergency room immediately."
            }
            Self::High => {
                "Seek urgent medical attention within 2-4 hours. Visit urgent care or emergency room."
            }
            Self::Medium => {
                "Schedule an appointment with your healthcare provider within 24-48 hours."
            }
            Self::Low => {
                "Monitor symptoms. Consider scheduling a routine appointment if symptoms persist."
            }
        }
    }

    /// Short urgency window shown next to the tier.
    pub fn urgency(self) -> &'static str {
        match self {
            Self::Critical => "IMMEDIATE - Call 911 now",
            Self::High => "URGENT - Seek care within 2-4 hours",
            Self::Medium => "Schedule appointment within 1-2 days",
            Self::Low => "Monitor and schedule routine appointment if needed",
        }
    }
}

impl SatsCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Green => "Routine",
            Self::Yellow => "Urgent",
            Self::Orange => "Very urgent",
            Self::Red => "Emergency",
        }
    }
}
