//! REST handlers that expose the console views as HTML fragments.
//!
//! Every request builds a fresh view object, runs one event handler on it and renders the
//! result. No view state survives between requests.

use axum::{
    Router,
    extract::{Path, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use vitals_core::constants::STATUS_ALL;
use vitals_core::models::{HistoryRecord, PatientCard};
use vitals_core::{
    DashboardView, EntryView, HttpBackend, SubmitOutcome, UiConfig, VitalsForm, render,
};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    cfg: Arc<UiConfig>,
    backend: HttpBackend,
}

impl AppState {
    pub fn new(cfg: UiConfig, backend: HttpBackend) -> Self {
        Self {
            cfg: Arc::new(cfg),
            backend,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Current dashboard toolbar state plus the cards on the page.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CardListReq {
    #[schema(value_type = Vec<Object>)]
    pub cards: Vec<PatientCard>,
    #[serde(default)]
    pub search: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub sort: String,
}

fn default_status() -> String {
    STATUS_ALL.into()
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitVitalsReq {
    /// Raw form values keyed by input id.
    pub fields: HashMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FieldValue {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmitVitalsRes {
    pub ok: bool,
    /// Replacement results panel, present only when the submission was accepted.
    pub results_html: Option<String>,
    pub notification_html: String,
    /// Form values after the submission (all empty after a successful reset).
    pub fields: Vec<FieldValue>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ValidateReq {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidateRes {
    pub value: String,
    pub corrected: bool,
    pub notification_html: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        render_patients,
        patient_history,
        record_details,
        submit_vitals,
        validate_field,
    ),
    components(schemas(
        HealthRes,
        CardListReq,
        SubmitVitalsReq,
        SubmitVitalsRes,
        FieldValue,
        ValidateReq,
        ValidateRes,
    ))
)]
struct ApiDoc;

/// Build the console router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ui/patients", post(render_patients))
        .route(
            "/ui/patients/:registration_id/history",
            get(patient_history),
        )
        .route("/ui/records/details", post(record_details))
        .route("/ui/vitals", post(submit_vitals))
        .route("/ui/vitals/validate", post(validate_field))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint.
async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "Vitals console is alive".into(),
    })
}

#[utoipa::path(
    post,
    path = "/ui/patients",
    request_body = CardListReq,
    responses(
        (status = 200, description = "Filtered and sorted card list", content_type = "text/html", body = String)
    )
)]
/// Filter and sort the dashboard cards.
///
/// The reload interval is sent both as a `Refresh` header and as `data-reload-secs` on the
/// card grid, since a page that fetches the fragment never sees the header.
async fn render_patients(
    State(state): State<AppState>,
    Json(req): Json<CardListReq>,
) -> impl IntoResponse {
    let mut view = DashboardView::new(req.cards, state.cfg.reload_interval());
    view.on_sort_change(&req.sort);
    view.on_status_change(&req.status);
    view.on_search_input(&req.search);

    let refresh = HeaderValue::from(view.reload_interval().as_secs());
    (
        [(HeaderName::from_static("refresh"), refresh)],
        Html(render::card_list(view.cards(), view.reload_interval())),
    )
}

#[utoipa::path(
    get,
    path = "/ui/patients/{registration_id}/history",
    params(("registration_id" = String, Path, description = "Patient registration id")),
    responses(
        (status = 200, description = "History modal, including inline errors", content_type = "text/html", body = String)
    )
)]
/// Fetch a patient's history and return the opened history modal.
async fn patient_history(
    State(state): State<AppState>,
    Path(registration_id): Path<String>,
) -> Html<String> {
    let mut view = DashboardView::new(Vec::new(), state.cfg.reload_interval());
    view.view_patient_history(&state.backend, &registration_id)
        .await;
    Html(render::modal(view.history_modal()))
}

#[utoipa::path(
    post,
    path = "/ui/records/details",
    responses(
        (status = 200, description = "Detail modal for the posted history record", content_type = "text/html", body = String),
        (status = 422, description = "Body is not a history record")
    )
)]
/// Render the detail modal for a record carried by a history row.
async fn record_details(
    State(state): State<AppState>,
    Json(record): Json<HistoryRecord>,
) -> Html<String> {
    let mut view = DashboardView::new(Vec::new(), state.cfg.reload_interval());
    view.show_vital_details(&record);
    Html(render::modal(view.details_modal()))
}

#[utoipa::path(
    post,
    path = "/ui/vitals",
    request_body = SubmitVitalsReq,
    responses(
        (status = 200, description = "Outcome of the submission", body = SubmitVitalsRes)
    )
)]
/// Submit the vitals form to the backend.
async fn submit_vitals(
    State(state): State<AppState>,
    Json(req): Json<SubmitVitalsReq>,
) -> Json<SubmitVitalsRes> {
    let mut view = EntryView::new(VitalsForm::standard(), state.cfg.notification_delay());
    for (id, value) in req.fields {
        if !view.form_mut().set(&id, value) {
            tracing::debug!("ignoring unknown form field {}", id);
        }
    }

    let outcome = view.on_submit(&state.backend).await;
    let ok = outcome == SubmitOutcome::Accepted;

    Json(SubmitVitalsRes {
        ok,
        results_html: ok.then(|| render::results_panel(view.results())),
        notification_html: render::notifications(view.notifications()),
        fields: view
            .form()
            .values()
            .into_iter()
            .map(|(id, value)| FieldValue {
                id: id.into(),
                value,
            })
            .collect(),
    })
}

#[utoipa::path(
    post,
    path = "/ui/vitals/validate",
    request_body = ValidateReq,
    responses(
        (status = 200, description = "Value after the input guards ran", body = ValidateRes),
        (status = 400, description = "Unknown field")
    )
)]
/// Run the input guard for one field.
///
/// `date` is checked against today's local date; numeric fields are clamped to their bounds.
async fn validate_field(
    State(state): State<AppState>,
    Json(req): Json<ValidateReq>,
) -> Result<Json<ValidateRes>, (StatusCode, &'static str)> {
    let mut view = EntryView::new(VitalsForm::standard(), state.cfg.notification_delay());
    if view.form().field(&req.field).is_none() {
        return Err((StatusCode::BAD_REQUEST, "Unknown field"));
    }

    let corrected = if req.field == "date" {
        view.on_date_input(&req.value, chrono::Local::now().date_naive())
    } else {
        view.on_numeric_input(&req.field, &req.value)
    };

    let notifications = view.notifications();
    Ok(Json(ValidateRes {
        value: view.form().value(&req.field).to_owned(),
        corrected,
        notification_html: (!notifications.is_empty())
            .then(|| render::notifications(notifications)),
    }))
}
