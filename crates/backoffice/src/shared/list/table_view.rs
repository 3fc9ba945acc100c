//! Sorted, paginated projection of filtered records

use contracts::shared::list::{ColumnHeader, SortState, TablePage, TableRow};
use contracts::shared::records::{FieldValue, Record};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

pub type Accessor = Arc<dyn Fn(&Record) -> FieldValue + Send + Sync>;
pub type Comparator = Arc<dyn Fn(&FieldValue, &FieldValue) -> Ordering + Send + Sync>;

/// Описание колонки таблицы
#[derive(Clone)]
pub struct ColumnDef {
    pub key: String,
    pub label: String,
    accessor: Accessor,
    /// Колонка без компаратора не сортируется
    comparator: Option<Comparator>,
}

impl fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.is_sortable())
            .finish()
    }
}

impl ColumnDef {
    /// Column reading the record field named `key`; missing fields read as a null date
    pub fn field(key: &str, label: &str) -> Self {
        let field = key.to_string();
        Self {
            key: key.to_string(),
            label: label.to_string(),
            accessor: Arc::new(move |record: &Record| {
                record.get(&field).cloned().unwrap_or(FieldValue::Date(None))
            }),
            comparator: None,
        }
    }

    /// Column with a computed value
    pub fn computed<F>(key: &str, label: &str, accessor: F) -> Self
    where
        F: Fn(&Record) -> FieldValue + Send + Sync + 'static,
    {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            accessor: Arc::new(accessor),
            comparator: None,
        }
    }

    /// Sortable with the natural order of [`FieldValue`]
    pub fn sortable(mut self) -> Self {
        self.comparator = Some(Arc::new(|a: &FieldValue, b: &FieldValue| a.total_cmp(b)));
        self
    }

    pub fn sort_with<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&FieldValue, &FieldValue) -> Ordering + Send + Sync + 'static,
    {
        self.comparator = Some(Arc::new(comparator));
        self
    }

    pub fn is_sortable(&self) -> bool {
        self.comparator.is_some()
    }

    pub fn value(&self, record: &Record) -> FieldValue {
        (self.accessor)(record)
    }

    fn header(&self, sort: &SortState) -> ColumnHeader {
        ColumnHeader {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.is_sortable(),
            indicator: if self.is_sortable() {
                sort.indicator(&self.key).to_string()
            } else {
                String::new()
            },
        }
    }
}

/// Stable sort by the column named in `sort`.
///
/// Unknown or non-sortable keys leave the order untouched. Descending order reverses
/// the comparison only, so equal keys keep their relative order in both directions.
pub fn sort_records<R>(records: &mut [R], columns: &[ColumnDef], sort: &SortState)
where
    R: Borrow<Record>,
{
    let Some(key) = sort.key.as_deref() else {
        return;
    };
    let Some(column) = columns.iter().find(|c| c.key == key) else {
        tracing::debug!("Unknown sort column '{}', original order kept", key);
        return;
    };
    let Some(comparator) = column.comparator.as_ref() else {
        tracing::debug!("Column '{}' is not sortable, original order kept", key);
        return;
    };

    let ascending = sort.direction.is_ascending();
    records.sort_by(|a, b| {
        let va = column.value(<R as Borrow<Record>>::borrow(a));
        let vb = column.value(<R as Borrow<Record>>::borrow(b));
        let cmp = comparator(&va, &vb);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort, paginate and project records into table rows.
///
/// `page` is 1-based (0 is read as 1). A page past the end yields no rows while
/// `total_count` still reports the size of the whole input.
pub fn present<R>(
    records: &[R],
    columns: &[ColumnDef],
    sort: &SortState,
    page: usize,
    page_size: usize,
) -> TablePage
where
    R: Borrow<Record>,
{
    let mut ordered: Vec<&Record> = records.iter().map(<R as Borrow<Record>>::borrow).collect();
    sort_records(&mut ordered, columns, sort);

    let page = page.max(1);
    let total_count = ordered.len();
    let total_pages = if page_size == 0 {
        0
    } else {
        total_count.div_ceil(page_size)
    };

    let offset = (page - 1).saturating_mul(page_size);
    let rows = ordered
        .into_iter()
        .skip(offset)
        .take(page_size)
        .map(|record| TableRow {
            cells: columns.iter().map(|c| c.value(record)).collect(),
        })
        .collect();

    TablePage {
        columns: columns.iter().map(|c| c.header(sort)).collect(),
        rows,
        total_count,
        total_pages,
        page,
        page_size,
    }
}

/// Sum of the numeric values of a column over all records (totals row)
pub fn column_total<R>(records: &[R], column: &ColumnDef) -> f64
where
    R: Borrow<Record>,
{
    records
        .iter()
        .filter_map(|r| column.value(<R as Borrow<Record>>::borrow(r)).as_number())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list::SortDirection;

    fn products(n: i64) -> Vec<Record> {
        (1..=n)
            .map(|i| {
                Record::new()
                    .with("id", i)
                    .with("name", format!("Product {:02}", i))
                    // three price buckets to produce ties
                    .with("price", ((i % 3) * 10) as f64)
            })
            .collect()
    }

    fn columns() -> Vec<ColumnDef> {
        vec![
            ColumnDef::field("id", "ID").sortable(),
            ColumnDef::field("name", "Name").sortable(),
            ColumnDef::field("price", "Price").sortable(),
            ColumnDef::field("note", "Note"),
        ]
    }

    fn ids(page: &TablePage) -> Vec<f64> {
        page.column_values("id")
            .into_iter()
            .filter_map(FieldValue::as_number)
            .collect()
    }

    #[test]
    fn test_pagination_last_partial_page() {
        let records = products(25);
        let page = present(&records, &columns(), &SortState::ascending("id"), 3, 10);
        assert_eq!(page.rows.len(), 5);
        assert_eq!(page.total_count, 25);
        assert_eq!(page.total_pages, 3);
        assert_eq!(ids(&page), vec![21.0, 22.0, 23.0, 24.0, 25.0]);
    }

    #[test]
    fn test_pagination_beyond_range() {
        let records = products(25);
        let page = present(&records, &columns(), &SortState::ascending("id"), 10, 10);
        assert!(page.rows.is_empty());
        assert_eq!(page.total_count, 25);
    }

    #[test]
    fn test_page_zero_reads_as_first_page() {
        let records = products(5);
        let page = present(&records, &columns(), &SortState::default(), 0, 2);
        assert_eq!(page.page, 1);
        assert_eq!(ids(&page), vec![1.0, 2.0]);
    }

    #[test]
    fn test_zero_page_size() {
        let records = products(5);
        let page = present(&records, &columns(), &SortState::default(), 1, 0);
        assert!(page.rows.is_empty());
        assert_eq!(page.total_count, 5);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let records = products(9);
        let asc = present(&records, &columns(), &SortState::ascending("price"), 1, 100);
        // price 0: 3,6,9; price 10: 1,4,7; price 20: 2,5,8
        assert_eq!(ids(&asc), vec![3.0, 6.0, 9.0, 1.0, 4.0, 7.0, 2.0, 5.0, 8.0]);

        let desc = present(&records, &columns(), &SortState::descending("price"), 1, 100);
        assert_eq!(ids(&desc), vec![2.0, 5.0, 8.0, 1.0, 4.0, 7.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn test_sort_idempotent_and_toggle_twice_restores() {
        let records = products(12);
        let cols = columns();
        let mut sort = SortState::default();
        sort.toggle("price");
        let first = present(&records, &cols, &sort, 1, 100);
        let again = present(&records, &cols, &sort, 1, 100);
        assert_eq!(first, again);

        sort.toggle("price");
        assert_eq!(sort.direction, SortDirection::Descending);
        sort.toggle("price");
        let restored = present(&records, &cols, &sort, 1, 100);
        assert_eq!(ids(&first), ids(&restored));
    }

    #[test]
    fn test_sorting_sorted_records_again_is_noop() {
        let mut records = products(10);
        let sort = SortState::descending("price");
        sort_records(&mut records, &columns(), &sort);
        let once = records.clone();
        sort_records(&mut records, &columns(), &sort);
        assert_eq!(once, records);
    }

    #[test]
    fn test_non_sortable_and_unknown_columns_keep_order() {
        let records = products(6);
        let by_note = present(&records, &columns(), &SortState::descending("note"), 1, 10);
        assert_eq!(ids(&by_note), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let unknown = present(&records, &columns(), &SortState::descending("color"), 1, 10);
        assert_eq!(ids(&unknown), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_headers_and_missing_cells() {
        let records = products(1);
        let page = present(&records, &columns(), &SortState::ascending("name"), 1, 10);
        let sortable: Vec<bool> = page.columns.iter().map(|c| c.sortable).collect();
        assert_eq!(sortable, vec![true, true, true, false]);
        assert_eq!(page.columns[1].indicator, " ▲");
        assert_eq!(page.columns[0].indicator, " ⇅");
        assert_eq!(page.columns[3].indicator, "");
        assert_eq!(page.rows[0].cells[3], FieldValue::Date(None));
    }

    #[test]
    fn test_custom_comparator_and_computed_column() {
        let records = products(4);
        let cols = vec![
            ColumnDef::field("id", "ID"),
            ColumnDef::computed("label", "Label", |r: &Record| {
                FieldValue::text(r.text("name").unwrap_or_default().to_uppercase())
            })
            .sort_with(|a: &FieldValue, b: &FieldValue| b.total_cmp(a)),
        ];
        let page = present(&records, &cols, &SortState::ascending("label"), 1, 10);
        assert_eq!(ids(&page), vec![4.0, 3.0, 2.0, 1.0]);
        assert_eq!(page.rows[0].cells[1], FieldValue::text("PRODUCT 04"));
    }

    #[test]
    fn test_column_total_covers_all_records() {
        let records = products(6);
        let price = ColumnDef::field("price", "Price");
        // prices: 10, 20, 0, 10, 20, 0
        assert_eq!(column_total(&records, &price), 60.0);
        assert_eq!(column_total(&records, &ColumnDef::field("name", "Name")), 0.0);
    }
}
