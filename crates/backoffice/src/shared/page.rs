//! Страница списка: колонки, поиск, фильтр по дате и сайту.
//!
//! Состояние фильтров (`PageState`) принадлежит вызывающей стороне; страница
//! только вычисляет видимый набор строк.

use chrono::NaiveDateTime;
use contracts::shared::list::{Criteria, Criterion, SortState, TablePage};
use contracts::shared::period::PeriodSelection;
use contracts::shared::records::Record;
use serde::Serialize;
use std::borrow::Borrow;

use super::config::Config;
use super::list::{column_total, filter_records, present, ColumnDef};
use super::period::PeriodResolver;

/// Filter, sort and pagination state of one page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageState {
    pub period: PeriodSelection,
    pub site_id: Option<i64>,
    pub search: String,
    pub sort: SortState,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl PageState {
    pub fn with_period(mut self, period: PeriodSelection) -> Self {
        self.period = period;
        self.page = 1;
        self
    }

    pub fn with_site(mut self, site_id: Option<i64>) -> Self {
        self.site_id = site_id;
        self.page = 1;
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self.page = 1;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Клик по заголовку колонки
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort.toggle(key);
    }
}

/// Shared knobs of every list page
#[derive(Debug, Clone, Copy)]
pub struct ListSettings {
    pub resolver: PeriodResolver,
    pub min_search_chars: usize,
    pub page_size: usize,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            resolver: PeriodResolver::default(),
            min_search_chars: 1,
            page_size: 25,
        }
    }
}

impl From<&Config> for ListSettings {
    fn from(config: &Config) -> Self {
        Self {
            resolver: PeriodResolver::new(config.calendar.week_start),
            min_search_chars: config.search.min_chars,
            page_size: config.table.page_size,
        }
    }
}

/// Page result ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub id: &'static str,
    pub title: &'static str,
    /// Human-readable active filters
    pub filters: String,
    pub table: TablePage,
    /// (column key, sum over the filtered set)
    pub totals: Vec<(String, f64)>,
}

pub struct PageDef {
    pub id: &'static str,
    pub title: &'static str,
    pub records: fn() -> &'static [Record],
    pub columns: Vec<ColumnDef>,
    pub search_fields: Vec<&'static str>,
    /// Field used by the period filter; pages without one ignore the period
    pub date_field: Option<&'static str>,
    pub site_field: Option<&'static str>,
    pub default_sort: SortState,
    /// Columns summed in the totals row
    pub totals: Vec<&'static str>,
}

impl PageDef {
    pub fn initial_state(&self, settings: &ListSettings) -> PageState {
        PageState {
            period: PeriodSelection::All,
            site_id: None,
            search: String::new(),
            sort: self.default_sort.clone(),
            page: 1,
            page_size: settings.page_size,
        }
    }

    /// Собирает условия фильтрации из состояния страницы
    pub fn criteria(
        &self,
        state: &PageState,
        settings: &ListSettings,
        now: NaiveDateTime,
    ) -> Criteria {
        let period = match self.date_field {
            Some(field) => settings
                .resolver
                .resolve_selection(&state.period, now)
                .map(|p| Criterion::date_within(field, p.start, p.end)),
            None => None,
        };

        let site = match (self.site_field, state.site_id) {
            (Some(field), Some(site_id)) => Some(Criterion::equals(field, site_id)),
            _ => None,
        };

        let term = state.search.trim();
        let search = if term.chars().count() < settings.min_search_chars.max(1) {
            if !term.is_empty() {
                tracing::debug!(
                    "Search term '{}' shorter than {} chars, ignored",
                    term,
                    settings.min_search_chars
                );
            }
            None
        } else {
            Some(Criterion::contains(term, &self.search_fields))
        };

        Criteria::new()
            .and_maybe(period)
            .and_maybe(site)
            .and_maybe(search)
    }

    /// Period resolver -> record filter -> tabular view over the page's own records
    pub fn view(&self, state: &PageState, settings: &ListSettings, now: NaiveDateTime) -> PageView {
        self.view_records((self.records)(), state, settings, now)
    }

    pub fn view_records<R>(
        &self,
        records: &[R],
        state: &PageState,
        settings: &ListSettings,
        now: NaiveDateTime,
    ) -> PageView
    where
        R: Borrow<Record>,
    {
        let criteria = self.criteria(state, settings, now);
        let visible = filter_records(records.iter().map(<R as Borrow<Record>>::borrow), &criteria);
        tracing::debug!(
            page = self.id,
            total = records.len(),
            visible = visible.len(),
            "List filtered"
        );

        let table = present(&visible, &self.columns, &state.sort, state.page, state.page_size);
        let totals = self
            .totals
            .iter()
            .filter_map(|key| self.columns.iter().find(|c| c.key == *key))
            .map(|column| (column.key.clone(), column_total(&visible, column)))
            .collect();

        PageView {
            id: self.id,
            title: self.title,
            filters: criteria.display_text(),
            table,
            totals,
        }
    }
}
