//! HTML fragment renderers for the dashboard and entry views.
//!
//! Markup targets Bootstrap 5 classes. Every interpolated value goes through [`escape_html`].

use crate::constants::{NO_ALERTS, NO_RECOMMENDATIONS, NO_SUMMARY};
use crate::dashboard::CardList;
use crate::entry::ResultsPanel;
use crate::modal::Modal;
use crate::models::{HistoryRecord, PatientHistory};
use crate::notify::{Notification, NotificationCenter};
use std::fmt::Write;
use std::time::Duration;
use vitals_types::RiskLevel;

/// Marker that makes a history alert render as danger.
const CRITICAL_MARKER: &str = "Critical";

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape text and turn newlines into `<br>`.
pub fn multiline(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

pub fn risk_badge(label: &str) -> String {
    format!(
        "<span class=\"badge bg-{}\">{}</span>",
        RiskLevel::from_label(label).badge_colour(),
        escape_html(label)
    )
}

/// Badge colour for a trend label: rising is bad, falling is good.
pub fn trend_colour(label: &str) -> &'static str {
    if label.contains("increasing") {
        "danger"
    } else if label.contains("decreasing") {
        "success"
    } else {
        "info"
    }
}

pub fn error_alert(message: &str) -> String {
    format!(
        "<div class=\"alert alert-danger\">{}</div>",
        escape_html(message)
    )
}

/// Patient info card, history table and (if present) trend panel.
pub fn patient_history(history: &PatientHistory) -> String {
    let info = &history.patient_info;
    let mut out = String::new();

    let _ = write!(
        out,
        "<div class=\"card mb-4\"><div class=\"card-header\"><h5 class=\"mb-0\">Patient Information</h5></div>\
         <div class=\"card-body\"><div class=\"row\">\
         <div class=\"col-md-3\"><p><strong>Name:</strong> {}</p></div>\
         <div class=\"col-md-3\"><p><strong>Age:</strong> {}</p></div>\
         <div class=\"col-md-3\"><p><strong>Gender:</strong> {}</p></div>\
         <div class=\"col-md-3\"><p><strong>Last Risk Level:</strong> {}</p></div>\
         </div></div></div>",
        escape_html(&info.name),
        info.age.map(|a| a.to_string()).unwrap_or_default(),
        escape_html(&info.gender),
        risk_badge(&info.last_risk_level),
    );

    out.push_str(
        "<table class=\"table table-striped table-hover\"><thead><tr>\
         <th>Date</th><th>Time</th><th>BMI</th><th>BP</th><th>Temp</th><th>Pulse</th>\
         <th>Risk Level</th><th>Actions</th></tr></thead><tbody>",
    );
    for record in &history.history {
        history_row(&mut out, record);
    }
    out.push_str("</tbody></table>");

    if let Some(trends) = &history.trend_analysis {
        out.push_str(
            "<div class=\"card mt-4\"><div class=\"card-header\"><h5 class=\"mb-0\">Trend Analysis</h5></div>\
             <div class=\"card-body\"><div class=\"row\"><div class=\"col-md-6\">\
             <h6>Vital Signs Trends</h6><ul class=\"list-group\">",
        );
        for (metric, value) in trends {
            let label = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let _ = write!(
                out,
                "<li class=\"list-group-item d-flex justify-content-between align-items-center\">\
                 {}<span class=\"badge bg-{}\">{}</span></li>",
                escape_html(metric),
                trend_colour(&label),
                escape_html(&label),
            );
        }
        out.push_str("</ul></div></div></div></div>");
    }

    out
}

fn history_row(out: &mut String, record: &HistoryRecord) {
    // The whole record rides along on the button so the detail modal needs no second fetch.
    let payload = serde_json::to_string(record).unwrap_or_default();
    let _ = write!(
        out,
        "<tr><td>{}</td><td>{}</td><td>{:.1}</td><td>{}/{}</td><td>{}°F</td><td>{}</td><td>{}</td>\
         <td><button class=\"btn btn-sm btn-info\" data-action=\"record-details\" data-record=\"{}\">View Details</button></td></tr>",
        escape_html(&record.date),
        escape_html(&record.time),
        record.bmi,
        record.systolic_bp,
        record.diastolic_bp,
        record.temp,
        record.pulse,
        risk_badge(&record.risk_level),
        escape_html(&payload),
    );
}

/// Summary, alerts and recommendations of a single history record.
pub fn record_details(record: &HistoryRecord) -> String {
    let summary = record
        .summary
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(NO_SUMMARY);

    let alerts = if record.alerts.is_empty() {
        format!("<div class=\"alert alert-success\">{NO_ALERTS}</div>")
    } else {
        let items: String = record
            .alerts
            .iter()
            .map(|alert| {
                let class = if alert.contains(CRITICAL_MARKER) {
                    "alert-danger"
                } else {
                    "alert-warning"
                };
                format!("<li class=\"alert {class} mb-2\">{}</li>", escape_html(alert))
            })
            .collect();
        format!("<ul class=\"list-unstyled\">{items}</ul>")
    };

    let recommendations = if record.recommendations.is_empty() {
        format!("<div class=\"alert alert-success\">{NO_RECOMMENDATIONS}</div>")
    } else {
        let items: String = record
            .recommendations
            .iter()
            .map(|rec| format!("<li class=\"recommendation-item\">{}</li>", escape_html(rec)))
            .collect();
        format!("<ul class=\"list-unstyled\">{items}</ul>")
    };

    format!(
        "<div class=\"card mb-3\"><div class=\"card-header\"><h6 class=\"mb-0\">Summary</h6></div>\
         <div class=\"card-body\"><pre style=\"white-space: pre-wrap; font-family: inherit; background: none; border: none; padding: 0; margin: 0;\">{}</pre></div></div>\
         <div class=\"card mb-3\"><div class=\"card-header\"><h6 class=\"mb-0\">Alerts</h6></div><div class=\"card-body\">{alerts}</div></div>\
         <div class=\"card\"><div class=\"card-header\"><h6 class=\"mb-0\">Recommendations</h6></div><div class=\"card-body\">{recommendations}</div></div>",
        escape_html(summary),
    )
}

pub fn modal(modal: &Modal) -> String {
    format!(
        "<div class=\"modal fade{show}\" id=\"{id}\" tabindex=\"-1\" data-open=\"{open}\" data-level=\"{level}\" style=\"z-index: {z};{display}\">\
         <div class=\"modal-dialog modal-xl\"><div class=\"modal-content\">\
         <div class=\"modal-header\"><h5 class=\"modal-title\">{title}</h5>\
         <button type=\"button\" class=\"btn-close\" data-bs-dismiss=\"modal\" aria-label=\"Close\"></button></div>\
         <div class=\"modal-body\">{body}</div></div></div></div>",
        show = if modal.is_open() { " show" } else { "" },
        id = modal.id(),
        open = modal.is_open(),
        level = modal.level(),
        z = 1055 + 10 * u32::from(modal.level()),
        display = if modal.is_open() { " display: block;" } else { "" },
        title = escape_html(modal.title()),
        body = modal.body(),
    )
}

/// The dashboard card grid. `data-reload-secs` tells the page when to reload itself.
pub fn card_list(cards: &CardList, reload_interval: Duration) -> String {
    let mut out = format!(
        "<div id=\"patient-list\" class=\"row\" data-reload-secs=\"{}\">",
        reload_interval.as_secs()
    );
    for slot in cards.slots() {
        let card = &slot.card;
        let _ = write!(
            out,
            "<div class=\"col-md-6\" style=\"display: {}\">\
             <div class=\"card patient-card\" data-status=\"{}\"><div class=\"card-body\">\
             <h3>{}</h3>{}<div class=\"vital-signs\"><p>{}</p></div>\
             <button class=\"btn btn-sm btn-primary\" data-action=\"view-history\" data-registration-id=\"{}\">View History</button>\
             </div></div></div>",
            if slot.visible { "block" } else { "none" },
            escape_html(&card.status),
            escape_html(&card.name),
            risk_badge(&card.status),
            escape_html(&card.last_vital_line),
            escape_html(&card.registration_id),
        );
    }
    out.push_str("</div>");
    out
}

/// One banner. The page hides it after `lifetime` unless it is closed first.
pub fn notification(notification: &Notification, lifetime: Duration) -> String {
    format!(
        "<div class=\"alert alert-{} alert-dismissible fade show position-fixed top-0 end-0 m-3\" \
         style=\"z-index: 1050\" role=\"alert\" data-notification-id=\"{}\" \
         data-bs-autohide=\"true\" data-bs-delay=\"{}\">{}\
         <button type=\"button\" class=\"btn-close\" data-bs-dismiss=\"alert\" aria-label=\"Close\"></button></div>",
        notification.severity.alert_class(),
        notification.id,
        lifetime.as_millis(),
        escape_html(&notification.message),
    )
}

/// Every banner still active in `center`, each carrying the centre's delay.
pub fn notifications(center: &NotificationCenter) -> String {
    center
        .active()
        .iter()
        .map(|n| notification(n, center.delay()))
        .collect()
}

pub fn results_panel(results: &ResultsPanel) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<div id=\"results\"><p><strong>BMI:</strong> <span id=\"bmi\">{}</span></p>\
         <div id=\"summary\">{}</div><div id=\"alerts\">",
        results.bmi.map(|b| b.to_string()).unwrap_or_default(),
        multiline(&results.summary),
    );
    for alert in &results.alerts {
        let _ = write!(
            out,
            "<div class=\"alert {}\">{}</div>",
            if alert.critical { "alert-danger" } else { "alert-warning" },
            escape_html(&alert.text),
        );
    }
    out.push_str("</div><div id=\"recommendations\">");
    for rec in &results.recommendations {
        let _ = write!(
            out,
            "<div class=\"recommendation-item\">{}</div>",
            escape_html(rec)
        );
    }
    out.push_str("</div></div>");
    out
}
