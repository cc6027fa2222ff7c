//! Transient view models exchanged with the clinical backend.
//!
//! Nothing here is persisted. Each value is decoded from (or encoded into) one request, rendered
//! once and dropped.

use crate::constants::LIST_SEPARATOR;
use serde::{Deserialize, Deserializer, Serialize};
use vitals_types::RiskLevel;

/// Summary card for one patient on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientCard {
    #[serde(default)]
    pub registration_id: String,
    pub name: String,
    /// Raw risk level label, e.g. `CRITICAL`.
    pub status: String,
    /// Last line of the card's vital-sign block, e.g. `Last Recorded: 2024-03-01 10:15:00`.
    #[serde(default)]
    pub last_vital_line: String,
}

/// One row of a patient's vitals history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub bmi: f64,
    pub systolic_bp: i64,
    pub diastolic_bp: i64,
    /// Body temperature in °F.
    pub temp: f64,
    pub pulse: i64,
    #[serde(default)]
    pub risk_level: String,
    #[serde(default, deserialize_with = "string_or_list")]
    pub alerts: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Any other columns the backend sends (height, weight, pain scale...), kept so the record
    /// survives a round trip through the detail modal.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl HistoryRecord {
    pub fn risk(&self) -> RiskLevel {
        RiskLevel::from_label(&self.risk_level)
    }
}

/// Demographics block at the top of the history modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub name: String,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub last_risk_level: String,
}

/// Successful history response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientHistory {
    pub patient_info: PatientInfo,
    #[serde(default)]
    pub history: Vec<HistoryRecord>,
    /// Per-metric trend labels in the order the backend sent them.
    #[serde(default)]
    pub trend_analysis: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Body of `GET /patient_history/{id}`.
///
/// Only the object shape is accepted. A bare array of records does not decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum HistoryPayload {
    Failure { error: String },
    Success(PatientHistory),
}

/// Outbound body of `POST /submit_vitals`.
///
/// Numeric fields that could not be read from the form are sent as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsSubmission {
    pub registration_id: String,
    pub name: String,
    pub gender: String,
    pub age: Option<i64>,
    pub date: String,
    pub time: String,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub temp: Option<f64>,
    pub systolic_bp: Option<i64>,
    pub diastolic_bp: Option<i64>,
    pub pulse: Option<i64>,
    pub pain_scale: Option<i64>,
}

/// Analysis returned for an accepted submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub bmi: f64,
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "string_or_list")]
    pub alerts: Vec<String>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub recommendations: Vec<String>,
}

/// Accepts a JSON list of strings, or the backend's storage form of one `"; "`-joined string.
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Joined(String),
        List(Vec<String>),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(Raw::List(items)) => items,
        Some(Raw::Joined(joined)) if joined.trim().is_empty() => Vec::new(),
        Some(Raw::Joined(joined)) => joined.split(LIST_SEPARATOR).map(str::to_owned).collect(),
    })
}
