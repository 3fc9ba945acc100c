use contracts::shared::list::SortState;

use super::records;
use crate::shared::list::ColumnDef;
use crate::shared::page::PageDef;

pub fn page() -> PageDef {
    PageDef {
        id: "orders",
        title: "Orders",
        records,
        columns: vec![
            ColumnDef::field("reference", "Order").sortable(),
            ColumnDef::field("created_at", "Date").sortable(),
            ColumnDef::field("client_name", "Customer").sortable(),
            ColumnDef::field("status", "Status").sortable(),
            ColumnDef::field("items_count", "Items").sortable(),
            ColumnDef::field("total", "Total").sortable(),
            ColumnDef::field("payment_method", "Payment"),
        ],
        search_fields: vec!["reference", "client_name", "status"],
        date_field: Some("created_at"),
        site_field: Some("site_id"),
        default_sort: SortState::descending("created_at"),
        totals: vec!["items_count", "total"],
    }
}
