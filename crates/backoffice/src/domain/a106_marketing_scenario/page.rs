use contracts::shared::list::SortState;

use super::records;
use crate::shared::list::ColumnDef;
use crate::shared::page::PageDef;

pub fn page() -> PageDef {
    PageDef {
        id: "scenarios",
        title: "Marketing scenarios",
        records,
        columns: vec![
            ColumnDef::field("name", "Scenario").sortable(),
            ColumnDef::field("kind", "Type").sortable(),
            ColumnDef::field("subject", "Subject"),
            ColumnDef::field("active", "Active").sortable(),
            ColumnDef::field("sent_count", "Sent").sortable(),
            ColumnDef::field("last_run_at", "Last run").sortable(),
        ],
        search_fields: vec!["name", "subject", "utm_campaign"],
        // Scenarios are listed regardless of the period
        date_field: None,
        site_field: Some("site_id"),
        default_sort: SortState::ascending("name"),
        totals: vec!["sent_count"],
    }
}
