use serde::{Deserialize, Serialize};

use super::enums::Avpu;
use crate::triage::TriageError;

/// One set of bedside vitals used for SATS triage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalSigns {
    /// Beats per minute.
    pub heart_rate: i32,
    /// Breaths per minute.
    pub respiratory_rate: i32,
    /// mmHg.
    #[serde(rename = "systolicBP")]
    pub systolic_bp: i32,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Carried for display; the thresholds do not read it.
    pub avpu: Avpu,
}

impl Avpu {
    /// Accepts the full level name or its initial, any case.
    pub fn parse_loose(s: &str) -> Result<Self, TriageError> {
        match s.trim().to_lowercase().as_str() {
            "a" | "alert" => Ok(Avpu::Alert),
            "v" | "voice" => Ok(Avpu::Voice),
            "p" | "pain" => Ok(Avpu::Pain),
            "u" | "unresponsive" => Ok(Avpu::Unresponsive),
            _ => Err(TriageError::InvalidEnum {
                field: "Avpu".into(),
                value: s.into(),
            }),
        }
    }
}

/// Raw vital-sign form fields, as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VitalSignsForm {
    pub heart_rate: String,
    pub respiratory_rate: String,
    pub systolic_bp: String,
    pub temperature: String,
    pub avpu: String,
}

impl VitalSignsForm {
    /// Every vital must be present and numeric. A blank AVPU means Alert.
    pub fn parse(&self) -> Result<VitalSigns, TriageError> {
        let avpu = match self.avpu.trim() {
            "" => Avpu::Alert,
            s => Avpu::parse_loose(s)?,
        };

        Ok(VitalSigns {
            heart_rate: parse_field("heart rate", &self.heart_rate)?,
            respiratory_rate: parse_field("respiratory rate", &self.respiratory_rate)?,
            systolic_bp: parse_field("systolic blood pressure", &self.systolic_bp)?,
            temperature: parse_temperature(&self.temperature)?,
            avpu,
        })
    }
}

fn parse_field(name: &str, raw: &str) -> Result<i32, TriageError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TriageError::InvalidInput(format!("{name} is required")));
    }
    raw.parse::<i32>()
        .map_err(|_| TriageError::InvalidInput(format!("{name} must be a whole number")))
}

fn parse_temperature(raw: &str) -> Result<f64, TriageError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TriageError::InvalidInput("temperature is required".into()));
    }
    match raw.parse::<f64>() {
        Ok(t) if t.is_finite() => Ok(t),
        _ => Err(TriageError::InvalidInput("temperature must be a number".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_form() -> VitalSignsForm {
        VitalSignsForm {
            heart_rate: "88".into(),
            respiratory_rate: "14".into(),
            systolic_bp: "120".into(),
            temperature: "36.8".into(),
            avpu: String::new(),
        }
    }

    #[test]
    fn parses_complete_form() {
        let vitals = make_form().parse().unwrap();
        assert_eq!(vitals.heart_rate, 88);
        assert_eq!(vitals.respiratory_rate, 14);
        assert_eq!(vitals.systolic_bp, 120);
        assert!((vitals.temperature - 36.8).abs() < f64::EPSILON);
        assert_eq!(vitals.avpu, Avpu::Alert);
    }

    #[test]
    fn missing_vital_is_rejected() {
        let mut form = make_form();
        form.respiratory_rate = "  ".into();
        let err = form.parse().unwrap_err();
        assert!(err.to_string().contains("respiratory rate is required"));
    }

    #[test]
    fn non_numeric_vital_is_rejected() {
        let mut form = make_form();
        form.heart_rate = "fast".into();
        assert!(form.parse().unwrap_err().to_string().contains("heart rate"));

        let mut form = make_form();
        form.temperature = "NaN".into();
        assert!(form.parse().is_err());
    }

    #[test]
    fn negative_values_pass_through() {
        let mut form = make_form();
        form.systolic_bp = "-5".into();
        assert_eq!(form.parse().unwrap().systolic_bp, -5);
    }

    #[test]
    fn avpu_accepts_names_and_initials() {
        assert_eq!(Avpu::parse_loose("V").unwrap(), Avpu::Voice);
        assert_eq!(Avpu::parse_loose("pain").unwrap(), Avpu::Pain);
        assert_eq!(Avpu::parse_loose(" Unresponsive ").unwrap(), Avpu::Unresponsive);
        assert!(Avpu::parse_loose("asleep").is_err());
    }

    #[test]
    fn serializes_with_ui_field_names() {
        let vitals = make_form().parse().unwrap();
        let json = serde_json::to_value(vitals).unwrap();
        assert_eq!(json["heartRate"], 88);
        assert_eq!(json["systolicBP"], 120);
        assert_eq!(json["avpu"], "Alert");
    }
}
