use contracts::shared::list::SortState;
use contracts::shared::records::FieldValue;

use super::records;
use crate::shared::list::ColumnDef;
use crate::shared::page::PageDef;

pub fn page() -> PageDef {
    PageDef {
        id: "products",
        title: "Products",
        records,
        columns: vec![
            ColumnDef::field("id", "ID").sortable(),
            ColumnDef::field("sku", "SKU").sortable(),
            ColumnDef::field("name", "Name").sortable(),
            ColumnDef::field("brand", "Brand").sortable(),
            ColumnDef::field("category", "Category"),
            ColumnDef::field("price", "Price").sortable(),
            ColumnDef::field("stock", "Stock").sortable(),
            ColumnDef::computed("availability", "Availability", |record| {
                let active = matches!(record.get("active"), Some(FieldValue::Bool(true)));
                let stock = record.number("stock").unwrap_or(0.0);
                FieldValue::text(match (active, stock > 0.0) {
                    (false, _) => "Disabled",
                    (true, false) => "Out of stock",
                    (true, true) => "In stock",
                })
            }),
            ColumnDef::field("created_at", "Created").sortable(),
        ],
        search_fields: vec!["sku", "name", "brand", "category"],
        date_field: Some("created_at"),
        site_field: Some("site_id"),
        default_sort: SortState::ascending("name"),
        totals: vec!["stock"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::mock::anchor;
    use crate::shared::page::ListSettings;

    #[test]
    fn test_availability_column() {
        let page = page();
        let settings = ListSettings::default();
        let state = page.initial_state(&settings).with_search("candle");
        let view = page.view(&state, &settings, anchor());
        let availability: Vec<String> = view
            .table
            .column_values("availability")
            .into_iter()
            .map(FieldValue::display)
            .collect();
        // sorted by name: cedar, fig
        assert_eq!(availability, vec!["Out of stock", "In stock"]);
        assert_eq!(view.totals, vec![("stock".to_string(), 210.0)]);
    }

    #[test]
    fn test_site_filter() {
        let page = page();
        let settings = ListSettings::default();
        let state = page.initial_state(&settings).with_site(Some(2));
        let view = page.view(&state, &settings, anchor());
        assert_eq!(view.table.total_count, 5);
    }
}
