//! Schema-less record model shared by every list page.
//!
//! A page converts its typed entities into [`Record`]s once, and from then on
//! filtering, sorting and pagination work on field names only.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Display format for dates inside records (search and plain-text output)
pub const DATE_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Scalar value of a single record field.
///
/// Serialized with an explicit kind tag, so text that looks like a date stays text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Date(Option<NaiveDateTime>),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::Date(d) => *d,
            _ => None,
        }
    }

    /// Text shown to the user and matched by free-text search.
    ///
    /// Whole numbers are printed without a fractional part, null dates as an empty string.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            FieldValue::Bool(b) => (if *b { "yes" } else { "no" }).to_string(),
            FieldValue::Date(Some(d)) => d.format(DATE_DISPLAY_FORMAT).to_string(),
            FieldValue::Date(None) => String::new(),
        }
    }

    /// Empty text and null dates count as "no value"
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::Date(d) => d.is_none(),
            _ => false,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Date(None) => 0,
            FieldValue::Bool(_) => 1,
            FieldValue::Number(_) => 2,
            FieldValue::Date(Some(_)) => 3,
            FieldValue::Text(_) => 4,
        }
    }

    /// Total order used by sortable columns.
    ///
    /// Values of the same kind compare naturally (text case-insensitively first),
    /// different kinds compare by kind so mixed columns still sort deterministically.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        FieldValue::Date(Some(value))
    }
}

impl From<Option<NaiveDateTime>> for FieldValue {
    fn from(value: Option<NaiveDateTime>) -> Self {
        FieldValue::Date(value)
    }
}

/// One row of business data: field name -> scalar value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: &str, value: impl Into<FieldValue>) {
        self.fields.insert(field.to_string(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_text)
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(FieldValue::as_number)
    }

    pub fn date(&self, field: &str) -> Option<NaiveDateTime> {
        self.get(field).and_then(FieldValue::as_date)
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::from(42.0).display(), "42");
        assert_eq!(FieldValue::from(19.9).display(), "19.9");
        assert_eq!(FieldValue::from(dt(2024, 3, 15)).display(), "2024-03-15 10:30");
        assert_eq!(FieldValue::Date(None).display(), "");
        assert_eq!(FieldValue::from("Dupont").display(), "Dupont");
    }

    #[test]
    fn test_total_cmp_text_is_case_insensitive() {
        let a = FieldValue::from("apple");
        let b = FieldValue::from("Banana");
        assert_eq!(a.total_cmp(&b), Ordering::Less);
        assert_eq!(b.total_cmp(&a), Ordering::Greater);
    }

    #[test]
    fn test_total_cmp_null_dates_first() {
        let none = FieldValue::Date(None);
        let some = FieldValue::from(dt(2024, 1, 1));
        assert_eq!(none.total_cmp(&some), Ordering::Less);
        assert_eq!(
            FieldValue::from(dt(2024, 1, 2)).total_cmp(&some),
            Ordering::Greater
        );
    }

    #[test]
    fn test_record_builder() {
        let record = Record::new()
            .with("id", 7i64)
            .with("lastname", "Dupont")
            .with("active", true);
        assert_eq!(record.number("id"), Some(7.0));
        assert_eq!(record.text("lastname"), Some("Dupont"));
        assert_eq!(record.get("active"), Some(&FieldValue::Bool(true)));
        assert!(record.get("missing").is_none());
    }

    #[test]
    fn test_record_json_keeps_field_kinds() {
        let record = Record::new()
            .with("name", "Mug")
            .with("price", 12.5)
            .with("note", "2024-03-15T10:30:00")
            .with("created_at", dt(2024, 3, 15))
            .with("reminder_sent_at", None::<NaiveDateTime>);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], serde_json::json!({ "type": "text", "value": "Mug" }));
        assert_eq!(json["reminder_sent_at"], serde_json::json!({ "type": "date", "value": null }));

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
        assert_eq!(back.text("note"), Some("2024-03-15T10:30:00"));
        assert_eq!(back.date("created_at"), Some(dt(2024, 3, 15)));
    }
}
