//! The vitals entry form and its submit control.

use crate::constants::{SUBMIT_BUSY_LABEL, SUBMIT_LABEL};
use crate::models::VitalsSubmission;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Select,
    Integer,
    Decimal,
    Date,
    Time,
}

impl FieldKind {
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Decimal)
    }
}

/// One input of the form. `min`/`max` mirror the HTML attributes of numeric inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub id: &'static str,
    pub kind: FieldKind,
    pub value: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FormField {
    fn new(id: &'static str, kind: FieldKind) -> Self {
        Self {
            id,
            kind,
            value: String::new(),
            min: None,
            max: None,
        }
    }

    fn bounded(id: &'static str, kind: FieldKind, min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::new(id, kind)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VitalsForm {
    fields: Vec<FormField>,
}

impl VitalsForm {
    /// The standard vitals-entry form with its declared bounds.
    pub fn standard() -> Self {
        use FieldKind::*;
        Self {
            fields: vec![
                FormField::new("registration_id", Text),
                FormField::new("name", Text),
                FormField::new("gender", Select),
                FormField::bounded("age", Integer, 0.0, 120.0),
                FormField::new("date", Date),
                FormField::new("time", Time),
                FormField::bounded("height", Decimal, 30.0, 250.0),
                FormField::bounded("weight", Decimal, 1.0, 350.0),
                FormField::bounded("temp", Decimal, 90.0, 110.0),
                FormField::bounded("systolic_bp", Integer, 50.0, 250.0),
                FormField::bounded("diastolic_bp", Integer, 30.0, 150.0),
                FormField::bounded("pulse", Integer, 30.0, 220.0),
                FormField::bounded("pain_scale", Integer, 0.0, 10.0),
            ],
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn field_mut(&mut self, id: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    /// Value of a field, or `""` for an unknown id.
    pub fn value(&self, id: &str) -> &str {
        self.field(id).map(|f| f.value.as_str()).unwrap_or("")
    }

    /// Set a field's raw value. Returns `false` for an unknown id.
    pub fn set(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.field_mut(id) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Clear every field.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    /// Snapshot of `(id, value)` pairs in form order.
    pub fn values(&self) -> Vec<(&'static str, String)> {
        self.fields.iter().map(|f| (f.id, f.value.clone())).collect()
    }

    /// Gather and coerce the fields into an outbound submission.
    pub fn to_submission(&self) -> VitalsSubmission {
        VitalsSubmission {
            registration_id: self.value("registration_id").to_owned(),
            name: self.value("name").to_owned(),
            gender: self.value("gender").to_owned(),
            age: parse_int(self.value("age")),
            date: self.value("date").to_owned(),
            time: self.value("time").to_owned(),
            height: parse_decimal(self.value("height")),
            weight: parse_decimal(self.value("weight")),
            temp: parse_decimal(self.value("temp")),
            systolic_bp: parse_int(self.value("systolic_bp")),
            diastolic_bp: parse_int(self.value("diastolic_bp")),
            pulse: parse_int(self.value("pulse")),
            pain_scale: parse_int(self.value("pain_scale")),
        }
    }
}

/// The form's submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    label: String,
    disabled: bool,
    saved_label: Option<String>,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self::new(SUBMIT_LABEL)
    }
}

impl SubmitControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            saved_label: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disable the control and swap in the busy label, remembering the current one.
    pub fn begin(&mut self) {
        self.saved_label = Some(std::mem::replace(&mut self.label, SUBMIT_BUSY_LABEL.into()));
        self.disabled = true;
    }

    /// Re-enable the control and restore the label saved by [`SubmitControl::begin`].
    pub fn finish(&mut self) {
        if let Some(label) = self.saved_label.take() {
            self.label = label;
        }
        self.disabled = false;
    }
}

/// Leading integer of `raw`, the way `parseInt` reads it: `"72.5"` is 72, `"12abc"` is 12.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = split_sign(s);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    format!("{sign}{}", &digits[..end]).parse().ok()
}

/// Leading decimal of `raw`, the way `parseFloat` reads it: `"98.6F"` is 98.6, `".5"` is 0.5.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let (sign, rest) = split_sign(s);

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, c) in rest.char_indices() {
        match c {
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
            }
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }

    let mut number = rest[..end].to_owned();
    // Optional exponent, only kept when it has digits.
    let tail = &rest[end..];
    if let Some(exp) = tail.strip_prefix(|c: char| c == 'e' || c == 'E') {
        let (exp_sign, exp_digits) = split_sign(exp);
        let len = exp_digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(exp_digits.len());
        if len > 0 {
            number.push('e');
            number.push_str(exp_sign);
            number.push_str(&exp_digits[..len]);
        }
    }

    format!("{sign}{number}").parse().ok()
}

fn split_sign(s: &str) -> (&'static str, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        ("-", rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        ("", rest)
    } else {
        ("", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_int_reads_leading_digits() {
        assert_eq!(parse_int("72"), Some(72));
        assert_eq!(parse_int(" 72.9"), Some(72));
        assert_eq!(parse_int("12abc"), Some(12));
        assert_eq!(parse_int("-4"), Some(-4));
        assert_eq!(parse_int("+4"), Some(4));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
    }

    #[test]
    fn parse_decimal_reads_leading_number() {
        assert_eq!(parse_decimal("98.6"), Some(98.6));
        assert_eq!(parse_decimal("98.6F"), Some(98.6));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("5."), Some(5.0));
        assert_eq!(parse_decimal("1e2"), Some(100.0));
        assert_eq!(parse_decimal("1e"), Some(1.0));
        assert_eq!(parse_decimal("-2.5"), Some(-2.5));
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal(""), None);
    }

    #[test]
    fn to_submission_coerces_fields() {
        let mut form = VitalsForm::standard();
        for (id, value) in [
            ("registration_id", "P-001"),
            ("name", "Ada Lovelace"),
            ("gender", "FEMALE"),
            ("age", "36"),
            ("date", "2024-03-01"),
            ("time", "10:15"),
            ("height", "165.5"),
            ("weight", "60"),
            ("temp", "98.6"),
            ("systolic_bp", "120"),
            ("diastolic_bp", "80"),
            ("pulse", "72"),
            ("pain_scale", ""),
        ] {
            assert!(form.set(id, value), "unknown field {id}");
        }

        let submission = form.to_submission();
        assert_eq!(submission.registration_id, "P-001");
        assert_eq!(submission.age, Some(36));
        assert_eq!(submission.height, Some(165.5));
        assert_eq!(submission.weight, Some(60.0));
        assert_eq!(submission.pain_scale, None);
    }

    #[test]
    fn reset_clears_all_fields() {
        let mut form = VitalsForm::standard();
        form.set("name", "Ada");
        form.set("pulse", "72");
        form.reset();
        assert!(form.fields().iter().all(|f| f.value.is_empty()));
    }

    #[test]
    fn unknown_field_is_not_set() {
        let mut form = VitalsForm::standard();
        assert!(!form.set("blood_type", "O+"));
        assert_eq!(form.value("blood_type"), "");
    }

    #[test]
    fn submit_control_restores_original_label() {
        let mut control = SubmitControl::new("Save");
        control.begin();
        assert!(control.is_disabled());
        assert_eq!(control.label(), SUBMIT_BUSY_LABEL);

        control.finish();
        assert!(!control.is_disabled());
        assert_eq!(control.label(), "Save");
    }
}
