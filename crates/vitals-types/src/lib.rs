//! Small validated value types shared by the vitals console crates.

/// Why a registration id was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationIdError {
    #[error("Registration id cannot be blank")]
    Blank,
}

/// A patient's registration id, trimmed and never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistrationId(String);

impl RegistrationId {
    pub fn new(raw: &str) -> Result<Self, RegistrationIdError> {
        match raw.trim() {
            "" => Err(RegistrationIdError::Blank),
            id => Ok(Self(id.to_owned())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Categorical severity tag the backend attaches to a vitals record.
///
/// Only used to pick a colour. The raw label is what gets displayed and compared, so
/// anything outside the four known levels is kept as `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RiskLevel {
    Critical,
    High,
    Moderate,
    Low,
    Other(String),
}

impl RiskLevel {
    /// Classifies a raw backend label. Matching is exact (`"critical"` is `Other`).
    pub fn from_label(label: &str) -> Self {
        match label {
            "CRITICAL" => Self::Critical,
            "HIGH" => Self::High,
            "MODERATE" => Self::Moderate,
            "LOW" => Self::Low,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Bootstrap contextual colour for badges showing this level.
    pub fn badge_colour(&self) -> &'static str {
        match self {
            Self::Critical => "danger",
            Self::High => "warning",
            Self::Moderate => "info",
            Self::Low => "success",
            Self::Other(_) => "secondary",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => f.write_str("CRITICAL"),
            Self::High => f.write_str("HIGH"),
            Self::Moderate => f.write_str("MODERATE"),
            Self::Low => f.write_str("LOW"),
            Self::Other(label) => f.write_str(label),
        }
    }
}
