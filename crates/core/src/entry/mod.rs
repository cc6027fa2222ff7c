//! Entry view: the vitals form, its submission flow and the results panel.

pub mod form;
pub mod guards;

pub use form::{FieldKind, FormField, SubmitControl, VitalsForm};

use crate::backend::VitalsBackend;
use crate::constants::{FUTURE_DATE, SUBMIT_FAILED, SUBMIT_SUCCEEDED};
use crate::models::SubmissionResult;
use crate::notify::{NotificationCenter, Severity};
use chrono::NaiveDate;
use std::time::Duration;

/// Marker that makes a submission alert render as danger.
const CRITICAL_ALERT_MARKER: &str = "Critical Alert";

#[derive(Debug, Clone, PartialEq)]
pub struct ResultAlert {
    pub text: String,
    pub critical: bool,
}

/// Results of the last accepted submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsPanel {
    pub bmi: Option<f64>,
    pub summary: String,
    pub alerts: Vec<ResultAlert>,
    pub recommendations: Vec<String>,
}

impl From<SubmissionResult> for ResultsPanel {
    fn from(result: SubmissionResult) -> Self {
        Self {
            bmi: Some(result.bmi),
            summary: result.summary,
            alerts: result
                .alerts
                .into_iter()
                .map(|text| ResultAlert {
                    critical: text.contains(CRITICAL_ALERT_MARKER),
                    text,
                })
                .collect(),
            recommendations: result.recommendations,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Failed,
}

/// State of one entry page, constructed per page and passed to its handlers.
#[derive(Debug, Clone)]
pub struct EntryView {
    form: VitalsForm,
    submit: SubmitControl,
    results: ResultsPanel,
    notifications: NotificationCenter,
}

impl EntryView {
    pub fn new(form: VitalsForm, notification_delay: Duration) -> Self {
        Self {
            form,
            submit: SubmitControl::default(),
            results: ResultsPanel::default(),
            notifications: NotificationCenter::new(notification_delay),
        }
    }

    pub fn form(&self) -> &VitalsForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut VitalsForm {
        &mut self.form
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn results(&self) -> &ResultsPanel {
        &self.results
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }

    /// Submit the form to the backend.
    ///
    /// On success the results panel is replaced and the form is cleared. On any failure the
    /// form keeps its values. The submit control is re-enabled on both paths.
    pub async fn on_submit<B: VitalsBackend>(&mut self, backend: &B) -> SubmitOutcome {
        self.submit.begin();
        let submission = self.form.to_submission();

        let outcome = match backend.submit_vitals(&submission).await {
            Ok(result) => {
                self.results = ResultsPanel::from(result);
                self.notifications.show(SUBMIT_SUCCEEDED, Severity::Success);
                self.form.reset();
                SubmitOutcome::Accepted
            }
            Err(e) => {
                tracing::error!("Error submitting vitals for {}: {}", submission.registration_id, e);
                self.notifications.show(SUBMIT_FAILED, Severity::Error);
                SubmitOutcome::Failed
            }
        };

        self.submit.finish();
        outcome
    }

    /// Clamp a numeric field into its bounds. Returns `true` if the value was corrected.
    pub fn on_numeric_input(&mut self, id: &str, value: &str) -> bool {
        let Some(field) = self.form.field_mut(id) else {
            return false;
        };
        field.value = value.to_owned();
        if !field.kind.is_numeric() {
            return false;
        }
        match guards::clamp_numeric(value, field.min, field.max) {
            Some(clamped) => {
                tracing::debug!("{} clamped from {:?} to {}", id, value, clamped);
                field.value = clamped;
                true
            }
            None => false,
        }
    }

    /// Reset a future date to `today` and warn. Returns `true` if the value was corrected.
    pub fn on_date_input(&mut self, value: &str, today: NaiveDate) -> bool {
        let corrected = guards::future_date_correction(value, today);
        self.form.set("date", corrected.clone().unwrap_or_else(|| value.to_owned()));
        if corrected.is_some() {
            self.notifications.show(FUTURE_DATE, Severity::Warning);
        }
        corrected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SUBMIT_LABEL;
    use crate::models::{PatientHistory, VitalsSubmission};
    use crate::{UiError, UiResult};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use vitals_types::RegistrationId;

    struct StubBackend {
        reply: Option<SubmissionResult>,
        calls: AtomicUsize,
    }

    impl StubBackend {
        fn accepting(result: SubmissionResult) -> Self {
            Self {
                reply: Some(result),
                calls: AtomicUsize::new(0),
            }
        }

        fn rejecting() -> Self {
            Self {
                reply: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl VitalsBackend for StubBackend {
        async fn fetch_history(&self, _id: &RegistrationId) -> UiResult<PatientHistory> {
            Err(UiError::Status(501))
        }

        async fn submit_vitals(&self, _submission: &VitalsSubmission) -> UiResult<SubmissionResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone().ok_or(UiError::Status(500))
        }
    }

    fn filled_view() -> EntryView {
        let mut view = EntryView::new(VitalsForm::standard(), Duration::from_secs(5));
        let form = view.form_mut();
        form.set("registration_id", "P-001");
        form.set("name", "Ada Lovelace");
        form.set("gender", "FEMALE");
        form.set("age", "36");
        form.set("date", "2024-03-01");
        form.set("time", "10:15");
        form.set("height", "165");
        form.set("weight", "60");
        form.set("temp", "101.5");
        form.set("systolic_bp", "150");
        form.set("diastolic_bp", "95");
        form.set("pulse", "110");
        form.set("pain_scale", "3");
        view
    }

    fn result() -> SubmissionResult {
        SubmissionResult {
            bmi: 22.04,
            summary: "Fever\nTachycardia".into(),
            alerts: vec![
                "Critical Alert: High Fever detected - Possible infection".into(),
                "Alert: Stage 1 Hypertension detected - Monitor for symptoms".into(),
            ],
            recommendations: vec!["Encourage fluids".into()],
        }
    }

    #[tokio::test(start_paused = true)]
    async fn accepted_submission_fills_results_and_resets_form() {
        let mut view = filled_view();
        let backend = StubBackend::accepting(result());

        assert_eq!(view.on_submit(&backend).await, SubmitOutcome::Accepted);
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);

        let results = view.results();
        assert_eq!(results.bmi, Some(22.04));
        assert!(results.alerts[0].critical);
        assert!(!results.alerts[1].critical);
        assert!(view.form().fields().iter().all(|f| f.value.is_empty()));
        assert_eq!(view.notifications().count(Severity::Success), 1);
        assert!(!view.submit_control().is_disabled());
        assert_eq!(view.submit_control().label(), SUBMIT_LABEL);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_submission_keeps_form_and_reenables_control() {
        let mut view = filled_view();
        let before = view.form().values();
        let backend = StubBackend::rejecting();

        assert_eq!(view.on_submit(&backend).await, SubmitOutcome::Failed);
        assert_eq!(view.form().values(), before);
        assert!(!view.submit_control().is_disabled());
        assert_eq!(view.submit_control().label(), SUBMIT_LABEL);
        assert_eq!(view.notifications().count(Severity::Error), 1);
        assert_eq!(view.results(), &ResultsPanel::default());
    }

    #[tokio::test(start_paused = true)]
    async fn numeric_input_is_clamped() {
        let mut view = filled_view();
        assert!(view.on_numeric_input("pulse", "400"));
        assert_eq!(view.form().value("pulse"), "220");
        assert!(view.on_numeric_input("pain_scale", "-1"));
        assert_eq!(view.form().value("pain_scale"), "0");
        assert!(!view.on_numeric_input("pulse", "80"));
        assert_eq!(view.form().value("pulse"), "80");
        assert!(!view.on_numeric_input("name", "400"));
        assert!(view.notifications().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn future_date_is_corrected_with_one_warning() {
        let mut view = filled_view();
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        assert!(view.on_date_input("2024-04-01", today));
        assert_eq!(view.form().value("date"), "2024-03-01");
        assert_eq!(view.notifications().len(), 1);
        assert_eq!(view.notifications().count(Severity::Warning), 1);

        assert!(!view.on_date_input("2024-02-01", today));
        assert_eq!(view.form().value("date"), "2024-02-01");
        assert_eq!(view.notifications().len(), 1);
    }
}
