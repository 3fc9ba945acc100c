use contracts::shared::list::SortState;
use contracts::shared::records::FieldValue;

use super::records;
use crate::shared::list::ColumnDef;
use crate::shared::page::PageDef;

pub fn page() -> PageDef {
    PageDef {
        id: "carts",
        title: "Carts",
        records,
        columns: vec![
            ColumnDef::field("id", "Cart").sortable(),
            ColumnDef::field("client_email", "Customer").sortable(),
            ColumnDef::field("items_count", "Items").sortable(),
            ColumnDef::field("total", "Total").sortable(),
            ColumnDef::field("updated_at", "Last activity").sortable(),
            ColumnDef::computed("reminder", "Reminder", |record| {
                let abandoned = matches!(record.get("abandoned"), Some(FieldValue::Bool(true)));
                FieldValue::text(match (abandoned, record.date("reminder_sent_at")) {
                    (false, _) => "-",
                    (true, None) => "Pending",
                    (true, Some(_)) => "Sent",
                })
            })
            .sortable(),
            ColumnDef::field("reminder_sent_at", "Reminder sent").sortable(),
        ],
        search_fields: vec!["client_email"],
        date_field: Some("updated_at"),
        site_field: Some("site_id"),
        default_sort: SortState::descending("updated_at"),
        totals: vec!["total"],
    }
}
