//! Dashboard view: patient cards, history modal and record detail modal.

pub mod cards;

pub use cards::{CardList, CardSlot, SortKey, StatusFilter};

use crate::backend::VitalsBackend;
use crate::constants::HISTORY_LOAD_FAILED;
use crate::modal::Modal;
use crate::models::{HistoryRecord, PatientCard};
use crate::{render, UiError};
use std::time::Duration;
use vitals_types::RegistrationId;

pub const HISTORY_MODAL_ID: &str = "historyModal";
pub const DETAILS_MODAL_ID: &str = "vitalDetailsModal";

/// State of one dashboard page, constructed per page and passed to its handlers.
#[derive(Debug, Clone)]
pub struct DashboardView {
    cards: CardList,
    search: String,
    status: StatusFilter,
    sort_key: SortKey,
    history_modal: Modal,
    details_modal: Modal,
    reload_interval: Duration,
}

impl DashboardView {
    pub fn new(cards: Vec<PatientCard>, reload_interval: Duration) -> Self {
        Self {
            cards: CardList::new(cards),
            search: String::new(),
            status: StatusFilter::All,
            sort_key: SortKey::Recent,
            history_modal: Modal::new(HISTORY_MODAL_ID, "Patient History"),
            details_modal: Modal::stacked(DETAILS_MODAL_ID, "Vital Sign Details"),
            reload_interval,
        }
    }

    pub fn cards(&self) -> &CardList {
        &self.cards
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn history_modal(&self) -> &Modal {
        &self.history_modal
    }

    pub fn details_modal(&self) -> &Modal {
        &self.details_modal
    }

    /// Interval of the unconditional full-page refresh.
    pub fn reload_interval(&self) -> Duration {
        self.reload_interval
    }

    pub fn on_search_input(&mut self, text: &str) {
        self.search = text.to_owned();
        self.apply_filter();
    }

    pub fn on_status_change(&mut self, value: &str) {
        self.status = StatusFilter::from_value(value);
        self.apply_filter();
    }

    pub fn on_sort_change(&mut self, value: &str) {
        self.sort_key = SortKey::from_value(value);
        self.cards.sort(self.sort_key);
    }

    fn apply_filter(&mut self) {
        tracing::debug!("filter search={:?} status={:?}", self.search, self.status);
        self.cards.filter(&self.search, &self.status);
    }

    /// Fetch and render a patient's history into the history modal.
    ///
    /// The modal is opened on every path, including failures.
    pub async fn view_patient_history<B: VitalsBackend>(
        &mut self,
        backend: &B,
        registration_id: &str,
    ) {
        let body = match RegistrationId::new(registration_id) {
            Ok(id) => match backend.fetch_history(&id).await {
                Ok(history) => render::patient_history(&history),
                Err(UiError::Backend(message)) => render::error_alert(&message),
                Err(e) => {
                    tracing::error!("Error fetching patient history for {}: {}", id, e);
                    render::error_alert(HISTORY_LOAD_FAILED)
                }
            },
            Err(e) => {
                tracing::error!("Error fetching patient history: {}", e);
                render::error_alert(HISTORY_LOAD_FAILED)
            }
        };

        self.history_modal.set_body(body);
        self.history_modal.show();
    }

    /// Render one record into the detail modal, stacked above the history modal.
    pub fn show_vital_details(&mut self, record: &HistoryRecord) {
        self.details_modal.set_body(render::record_details(record));
        self.details_modal.show();
    }
}
