pub mod appointment; // Booking boundary
pub mod config;
pub mod models;
pub mod triage; // Symptom + SATS classifiers

pub use appointment::{BookingRequest, ValidatedBooking};
pub use models::{
    AppointmentKind, Avpu, SatsCategory, SymptomEntry, SymptomForm, TriageResult,
    TriageSeverity, VitalSigns, VitalSignsForm,
};
pub use triage::{
    classify, classify_vitals, common_symptoms, evaluate, severity_description, CareAction,
    TriageError, TriageSession,
};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. `RUST_LOG` wins over the built-in filter.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let builder = tracing_subscriber::fmt().with_env_filter(
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
    );
    // Output goes through libtest capture.
    #[cfg(test)]
    let builder = builder.with_test_writer();
    let installed = builder.try_init().is_ok();

    if installed {
        tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    }
}
