//! Input guards run on every input event of the entry form.

use super::form::parse_decimal;
use chrono::NaiveDate;

/// Clamp a numeric input into `[min, max]`.
///
/// The value is read the same way a submission reads it, so `"120F"` counts as 120. Returns
/// the corrected value when a bound was crossed, `None` when the input is left as is (in range,
/// unparseable, or the crossed side has no bound).
pub fn clamp_numeric(raw: &str, min: Option<f64>, max: Option<f64>) -> Option<String> {
    let value = parse_decimal(raw)?;
    match (min, max) {
        (Some(min), _) if value < min => Some(format_number(min)),
        (_, Some(max)) if value > max => Some(format_number(max)),
        _ => None,
    }
}

/// Returns today's date as `YYYY-MM-DD` when `raw` names a date after `today`.
///
/// Values that are not a `YYYY-MM-DD` date are left alone.
pub fn future_date_correction(raw: &str, today: NaiveDate) -> Option<String> {
    let selected = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()?;
    (selected > today).then(|| today.format("%Y-%m-%d").to_string())
}

/// Whole bounds print without a fractional part, the way an input element shows them.
fn format_number(value: f64) -> String {
    format!("{value}")
}
