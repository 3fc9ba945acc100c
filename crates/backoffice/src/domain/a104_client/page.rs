use contracts::shared::list::SortState;

use super::records;
use crate::shared::list::ColumnDef;
use crate::shared::page::PageDef;

pub fn page() -> PageDef {
    PageDef {
        id: "clients",
        title: "Customers",
        records,
        columns: vec![
            ColumnDef::field("id", "ID").sortable(),
            ColumnDef::field("firstname", "First name").sortable(),
            ColumnDef::field("lastname", "Last name").sortable(),
            ColumnDef::field("email", "Email"),
            ColumnDef::field("orders_count", "Orders").sortable(),
            ColumnDef::field("total_spent", "Spent").sortable(),
            ColumnDef::field("newsletter", "Newsletter"),
            ColumnDef::field("created_at", "Registered").sortable(),
        ],
        search_fields: vec!["firstname", "lastname", "email"],
        date_field: Some("created_at"),
        site_field: Some("site_id"),
        default_sort: SortState::descending("created_at"),
        totals: vec!["orders_count", "total_spent"],
    }
}
