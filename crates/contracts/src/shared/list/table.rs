use serde::{Deserialize, Serialize};

use crate::shared::records::FieldValue;

/// Направление сортировки
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

/// Текущая сортировка списка (хранится на стороне UI)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Column key; `None` keeps the original order
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(key: &str, direction: SortDirection) -> Self {
        Self {
            key: Some(key.to_string()),
            direction,
        }
    }

    pub fn ascending(key: &str) -> Self {
        Self::by(key, SortDirection::Ascending)
    }

    pub fn descending(key: &str) -> Self {
        Self::by(key, SortDirection::Descending)
    }

    /// Клик по заголовку: та же колонка меняет направление, другая сортируется по возрастанию
    pub fn toggle(&mut self, key: &str) {
        if self.key.as_deref() == Some(key) {
            self.direction = self.direction.toggled();
        } else {
            self.key = Some(key.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    /// Индикатор сортировки для заголовка
    pub fn indicator(&self, key: &str) -> &'static str {
        if self.key.as_deref() == Some(key) {
            if self.direction.is_ascending() {
                " ▲"
            } else {
                " ▼"
            }
        } else {
            " ⇅"
        }
    }
}

/// Column header as rendered above the rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnHeader {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    /// Empty for non-sortable columns
    pub indicator: String,
}

/// One displayed row: cell values in column order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<FieldValue>,
}

/// Sorted, paginated projection of the filtered records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePage {
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<TableRow>,
    /// Size of the whole filtered set, not of this page
    pub total_count: usize,
    pub total_pages: usize,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
}

impl TablePage {
    pub fn column_index(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }

    /// Values of one column across the page rows
    pub fn column_values(&self, key: &str) -> Vec<&FieldValue> {
        match self.column_index(key) {
            Some(idx) => self.rows.iter().filter_map(|r| r.cells.get(idx)).collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_same_column_flips_direction() {
        let mut sort = SortState::default();
        sort.toggle("price");
        assert_eq!(sort, SortState::ascending("price"));
        sort.toggle("price");
        assert_eq!(sort, SortState::descending("price"));
        sort.toggle("price");
        assert_eq!(sort, SortState::ascending("price"));
    }

    #[test]
    fn test_toggle_other_column_resets_to_ascending() {
        let mut sort = SortState::descending("price");
        sort.toggle("name");
        assert_eq!(sort, SortState::ascending("name"));
    }

    #[test]
    fn test_indicator() {
        let sort = SortState::descending("price");
        assert_eq!(sort.indicator("price"), " ▼");
        assert_eq!(sort.indicator("name"), " ⇅");
        assert_eq!(SortState::ascending("name").indicator("name"), " ▲");
    }
}
