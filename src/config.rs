/// Application-level constants
pub const APP_NAME: &str = "Triage Engine";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lowest and highest self-reported severity score.
pub const SEVERITY_MIN: u8 = 1;
pub const SEVERITY_MAX: u8 = 10;

/// Average self-reported severity at or above which the keyword tier is bumped one step.
pub const ESCALATION_THRESHOLD: f64 = 8.0;

/// Duration recorded when the patient leaves the field blank.
pub const DEFAULT_DURATION: &str = "1 day";

/// Number of catalog entries offered as quick-pick buttons.
pub const QUICK_PICK_COUNT: usize = 12;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "info,triage_lib=debug"
    } else {
        "warn,triage_lib=info"
    }
}
