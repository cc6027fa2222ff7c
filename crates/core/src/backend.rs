//! HTTP client for the clinical backend.
//!
//! The views only see the [`VitalsBackend`] trait, so they can be driven by the real
//! [`HttpBackend`] in production and by in-memory stand-ins in tests.

use crate::constants::{PATIENT_HISTORY_PATH, SUBMIT_VITALS_PATH};
use crate::models::{HistoryPayload, PatientHistory, SubmissionResult, VitalsSubmission};
use crate::{UiConfig, UiError, UiResult};
use std::future::Future;
use vitals_types::RegistrationId;

/// The two backend calls the console depends on.
pub trait VitalsBackend {
    /// Fetch a patient's vitals history.
    ///
    /// An application-level `{ "error": ... }` payload comes back as [`UiError::Backend`]. A
    /// blank message is not an application error and is reported like any other bad reply.
    fn fetch_history(
        &self,
        registration_id: &RegistrationId,
    ) -> impl Future<Output = UiResult<PatientHistory>> + Send;

    /// Post one vitals snapshot and return the backend's analysis.
    ///
    /// Any non-2xx status is a failure, whatever the body says.
    fn submit_vitals(
        &self,
        submission: &VitalsSubmission,
    ) -> impl Future<Output = UiResult<SubmissionResult>> + Send;
}

/// [`VitalsBackend`] over HTTP with `reqwest`.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    cfg: UiConfig,
}

impl HttpBackend {
    /// Build a client using the configured request timeout.
    pub fn new(cfg: UiConfig) -> UiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(cfg.request_timeout())
            .build()?;
        Ok(Self { client, cfg })
    }

    pub fn config(&self) -> &UiConfig {
        &self.cfg
    }
}

impl VitalsBackend for HttpBackend {
    async fn fetch_history(&self, registration_id: &RegistrationId) -> UiResult<PatientHistory> {
        let url = self
            .cfg
            .endpoint(&[PATIENT_HISTORY_PATH, registration_id.as_str()])?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        // The history endpoint reports application errors as `{error}` with a 5xx status, so the
        // body is decoded before the status is considered.
        match serde_json::from_slice::<HistoryPayload>(&body) {
            Ok(HistoryPayload::Failure { error }) if !error.trim().is_empty() => {
                Err(UiError::Backend(error))
            }
            Ok(HistoryPayload::Failure { .. }) if !status.is_success() => {
                Err(UiError::Status(status.as_u16()))
            }
            Ok(HistoryPayload::Failure { .. }) => Err(UiError::Decode(
                <serde_json::Error as serde::de::Error>::custom("blank error message"),
            )),
            Ok(HistoryPayload::Success(history)) if status.is_success() => Ok(history),
            Ok(HistoryPayload::Success(_)) => Err(UiError::Status(status.as_u16())),
            Err(_) if !status.is_success() => Err(UiError::Status(status.as_u16())),
            Err(e) => Err(UiError::Decode(e)),
        }
    }

    async fn submit_vitals(&self, submission: &VitalsSubmission) -> UiResult<SubmissionResult> {
        let url = self.cfg.endpoint(&[SUBMIT_VITALS_PATH])?;
        tracing::debug!("POST {} for {}", url, submission.registration_id);

        let response = self.client.post(url).json(submission).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UiError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
