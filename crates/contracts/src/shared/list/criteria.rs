use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::shared::records::{FieldValue, DATE_DISPLAY_FORMAT};

/// Одно условие фильтрации списка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Criterion {
    /// Date field within [start, end], both bounds inclusive
    DateWithin {
        field: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Exact field match (site id, status, ...)
    Equals { field: String, value: FieldValue },

    /// Case-insensitive substring search across several fields
    Contains { term: String, fields: Vec<String> },
}

impl Criterion {
    pub fn date_within(field: &str, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Criterion::DateWithin {
            field: field.to_string(),
            start,
            end,
        }
    }

    pub fn equals(field: &str, value: impl Into<FieldValue>) -> Self {
        Criterion::Equals {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn contains(term: &str, fields: &[&str]) -> Self {
        Criterion::Contains {
            term: term.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Пустое условие ничего не ограничивает (пустой поиск, "все сайты")
    pub fn is_empty(&self) -> bool {
        match self {
            Criterion::DateWithin { .. } => false,
            Criterion::Equals { value, .. } => {
                matches!(value, FieldValue::Text(s) if s.trim().is_empty())
            }
            Criterion::Contains { term, fields } => term.trim().is_empty() || fields.is_empty(),
        }
    }

    /// Generate human-readable display text
    pub fn display_text(&self) -> String {
        match self {
            Criterion::DateWithin { field, start, end } => format!(
                "{}: {} .. {}",
                field,
                start.format(DATE_DISPLAY_FORMAT),
                end.format(DATE_DISPLAY_FORMAT)
            ),
            Criterion::Equals { field, value } => format!("{} = {}", field, value.display()),
            Criterion::Contains { term, fields } => {
                format!("{} contains \"{}\"", fields.join(" | "), term.trim())
            }
        }
    }
}

/// Набор условий, объединённых через AND
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    pub items: Vec<Criterion>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a criterion; empty ones are dropped
    pub fn and(mut self, criterion: Criterion) -> Self {
        if !criterion.is_empty() {
            self.items.push(criterion);
        }
        self
    }

    pub fn and_maybe(self, criterion: Option<Criterion>) -> Self {
        match criterion {
            Some(c) => self.and(c),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.iter().all(Criterion::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.items.iter()
    }

    pub fn display_text(&self) -> String {
        self.items
            .iter()
            .filter(|c| !c.is_empty())
            .map(Criterion::display_text)
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}
