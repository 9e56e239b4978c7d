use crate::models::{SatsCategory, VitalSigns};

/// Upper limits per tier. A reading strictly above any limit lands in that tier.
struct SatsThresholds {
    category: SatsCategory,
    heart_rate: i32,
    respiratory_rate: i32,
    systolic_bp: i32,
    temperature: f64,
}

/// Most urgent first; first match wins.
const THRESHOLDS: [SatsThresholds; 3] = [
    SatsThresholds {
        category: SatsCategory::Red,
        heart_rate: 130,
        respiratory_rate: 30,
        systolic_bp: 200,
        temperature: 40.0,
    },
    SatsThresholds {
        category: SatsCategory::Orange,
        heart_rate: 110,
        respiratory_rate: 20,
        systolic_bp: 160,
        temperature: 38.0,
    },
    SatsThresholds {
        category: SatsCategory::Yellow,
        heart_rate: 100,
        respiratory_rate: 16,
        systolic_bp: 140,
        temperature: 37.0,
    },
];

impl SatsThresholds {
    fn exceeded_by(
        &self,
        heart_rate: i32,
        respiratory_rate: i32,
        systolic_bp: i32,
        temperature: f64,
    ) -> bool {
        heart_rate > self.heart_rate
            || respiratory_rate > self.respiratory_rate
            || systolic_bp > self.systolic_bp
            || temperature > self.temperature
    }
}

/// SATS colour from four vitals. No range checks: any number goes through the same comparisons.
pub fn classify(
    heart_rate: i32,
    respiratory_rate: i32,
    systolic_bp: i32,
    temperature: f64,
) -> SatsCategory {
    let category = THRESHOLDS
        .iter()
        .find(|t| t.exceeded_by(heart_rate, respiratory_rate, systolic_bp, temperature))
        .map(|t| t.category)
        .unwrap_or(SatsCategory::Green);

    tracing::info!(category = %category, "SATS triage complete");
    category
}

/// Same as [`classify`]; AVPU is carried on the struct but not consulted.
pub fn classify_vitals(vitals: &VitalSigns) -> SatsCategory {
    classify(
        vitals.heart_rate,
        vitals.respiratory_rate,
        vitals.systolic_bp,
        vitals.temperature,
    )
}
