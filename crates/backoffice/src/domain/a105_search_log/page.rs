use contracts::shared::list::SortState;

use super::records;
use crate::shared::list::ColumnDef;
use crate::shared::page::PageDef;

pub fn page() -> PageDef {
    PageDef {
        id: "search-logs",
        title: "Search logs",
        records,
        columns: vec![
            ColumnDef::field("searched_at", "Date").sortable(),
            ColumnDef::field("query", "Query").sortable(),
            ColumnDef::field("results_count", "Results").sortable(),
            ColumnDef::field("client_id", "Customer"),
        ],
        search_fields: vec!["query"],
        date_field: Some("searched_at"),
        site_field: Some("site_id"),
        default_sort: SortState::descending("searched_at"),
        totals: Vec::new(),
    }
}
