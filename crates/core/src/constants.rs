//! Constants used throughout the vitals core crate.
//!
//! User-facing messages live here so the views and their tests agree on the exact text.

/// Default backend base URL when `VITALS_BACKEND_URL` is not set.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Default lifetime of a transient notification banner, in milliseconds.
pub const DEFAULT_NOTIFICATION_MS: u64 = 5_000;

/// Default dashboard auto-refresh interval, in seconds.
pub const DEFAULT_RELOAD_SECS: u64 = 300;

/// Default timeout for a single backend request, in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Backend path prefix for patient history lookups.
pub const PATIENT_HISTORY_PATH: &str = "patient_history";

/// Backend path for vitals submission.
pub const SUBMIT_VITALS_PATH: &str = "submit_vitals";

/// Status selector value that matches every card.
pub const STATUS_ALL: &str = "all";

pub const HISTORY_LOAD_FAILED: &str = "Error loading patient history";
pub const NO_SUMMARY: &str = "No summary available.";
pub const NO_ALERTS: &str = "No alerts";
pub const NO_RECOMMENDATIONS: &str = "No recommendations";

pub const SUBMIT_SUCCEEDED: &str = "Vitals submitted successfully!";
pub const SUBMIT_FAILED: &str = "Error submitting vitals. Please try again.";
pub const FUTURE_DATE: &str = "Date cannot be in the future";

/// Label shown on the submit control while a submission is in flight.
pub const SUBMIT_BUSY_LABEL: &str = "<span class=\"spinner-border spinner-border-sm\" role=\"status\" aria-hidden=\"true\"></span> Submitting...";

/// Default label of the submit control.
pub const SUBMIT_LABEL: &str = "Submit Vitals";

/// Separator the backend uses when it stores alert and recommendation lists as one string.
pub const LIST_SEPARATOR: &str = "; ";
