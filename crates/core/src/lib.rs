//! # Vitals Core
//!
//! Headless view layer for the vitals console.
//!
//! This crate holds everything the dashboard and entry pages do, without a browser:
//! - Typed view models for patient cards, history records and vitals submissions
//! - View objects (`DashboardView`, `EntryView`, `Modal`, `NotificationCenter`) and their
//!   event handlers
//! - HTML fragment rendering
//! - The HTTP client for the clinical backend
//!
//! **No server concerns**: routing and HTTP serving belong in the `vitals-run` binary.

pub mod backend;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod entry;
mod error;
pub mod modal;
pub mod models;
pub mod notify;
pub mod render;

pub use backend::{HttpBackend, VitalsBackend};
pub use config::UiConfig;
pub use dashboard::DashboardView;
pub use entry::{EntryView, SubmitOutcome, VitalsForm};
pub use error::{UiError, UiResult};
pub use modal::Modal;
pub use notify::{Notification, NotificationCenter, Severity};
pub use vitals_types::{RegistrationId, RiskLevel};
