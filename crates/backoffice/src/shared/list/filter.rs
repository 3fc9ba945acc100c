//! Единый механизм фильтрации списков (AND по всем условиям)

use contracts::shared::list::{Criteria, Criterion};
use contracts::shared::records::{FieldValue, Record};
use std::borrow::Borrow;

/// Предикат над записью
pub trait Predicate {
    fn matches(&self, record: &Record) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&Record) -> bool,
{
    fn matches(&self, record: &Record) -> bool {
        self(record)
    }
}

impl Predicate for Criterion {
    fn matches(&self, record: &Record) -> bool {
        if self.is_empty() {
            return true;
        }
        match self {
            Criterion::DateWithin { field, start, end } => match record.date(field) {
                Some(date) => *start <= date && date <= *end,
                None => false,
            },
            Criterion::Equals { field, value } => match record.get(field) {
                Some(actual) => values_equal(actual, value),
                None => false,
            },
            Criterion::Contains { term, fields } => {
                let needle = term.trim().to_lowercase();
                fields.iter().any(|field| {
                    record
                        .get(field)
                        .map(|value| searchable_text(value).contains(&needle))
                        .unwrap_or(false)
                })
            }
        }
    }
}

impl Predicate for Criteria {
    fn matches(&self, record: &Record) -> bool {
        self.iter().all(|criterion| criterion.matches(record))
    }
}

/// Объединение произвольных предикатов через AND
pub struct All<'a> {
    predicates: Vec<&'a dyn Predicate>,
}

impl<'a> All<'a> {
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    pub fn and(mut self, predicate: &'a dyn Predicate) -> Self {
        self.predicates.push(predicate);
        self
    }
}

impl Default for All<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Predicate for All<'_> {
    fn matches(&self, record: &Record) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }
}

/// Фильтрует записи, сохраняя исходный порядок.
///
/// Работает как с владеющими записями, так и со ссылками, поэтому результат
/// можно отфильтровать повторно.
pub fn filter_records<R, P>(records: impl IntoIterator<Item = R>, predicate: &P) -> Vec<R>
where
    R: Borrow<Record>,
    P: Predicate + ?Sized,
{
    records
        .into_iter()
        .filter(|record| predicate.matches(<R as Borrow<Record>>::borrow(record)))
        .collect()
}

fn values_equal(actual: &FieldValue, expected: &FieldValue) -> bool {
    match (actual, expected) {
        (FieldValue::Number(a), FieldValue::Number(b)) => a == b,
        // Select controls hand over ids as text
        (FieldValue::Number(_), FieldValue::Text(b)) => actual.display() == b.trim(),
        (FieldValue::Text(a), FieldValue::Number(_)) => a.trim() == expected.display(),
        _ => actual == expected,
    }
}

fn searchable_text(value: &FieldValue) -> String {
    match value {
        FieldValue::Bool(_) => String::new(),
        other => other.display().to_lowercase(),
    }
}
