pub mod enums;
pub mod symptom;
pub mod triage;
pub mod vital_sign;

pub use enums::{AppointmentKind, Avpu, SatsCategory, TriageSeverity};
pub use symptom::{SymptomEntry, SymptomForm};
pub use triage::TriageResult;
pub use vital_sign::{VitalSigns, VitalSignsForm};
