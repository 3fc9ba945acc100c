//! Plain-text and JSON rendering of a page view

use super::format::{format_cell, format_money};
use super::page::PageView;

pub fn render_json(views: &[PageView]) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(views)?)
}

pub fn render_text(view: &PageView) -> String {
    let table = &view.table;
    let headers: Vec<String> = table
        .columns
        .iter()
        .map(|c| format!("{}{}", c.label, c.indicator))
        .collect();
    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.cells.iter().map(format_cell).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&format!("== {} ==\n", view.title));
    if !view.filters.is_empty() {
        out.push_str(&format!("Filters: {}\n", view.filters));
    }
    out.push_str(&join_padded(&headers, &widths));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    for row in &cells {
        out.push_str(&join_padded(row, &widths));
        out.push('\n');
    }
    if !view.totals.is_empty() {
        let totals: Vec<String> = view
            .totals
            .iter()
            .map(|(key, sum)| format!("{} = {}", key, format_money(*sum)))
            .collect();
        out.push_str(&format!("Totals: {}\n", totals.join(", ")));
    }
    out.push_str(&format!(
        "Page {} / {} ({} rows)\n",
        table.page,
        table.total_pages.max(1),
        table.total_count
    ));
    out
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list::ColumnDef;
    use crate::shared::page::{ListSettings, PageDef};
    use chrono::NaiveDate;
    use contracts::shared::list::SortState;
    use contracts::shared::records::Record;

    fn no_records() -> &'static [Record] {
        &[]
    }

    fn view() -> PageView {
        let page = PageDef {
            id: "products",
            title: "Products",
            records: no_records,
            columns: vec![
                ColumnDef::field("name", "Name").sortable(),
                ColumnDef::field("price", "Price"),
            ],
            search_fields: vec!["name"],
            date_field: None,
            site_field: None,
            default_sort: SortState::ascending("name"),
            totals: vec!["price"],
        };
        let records = vec![
            Record::new().with("name", "Vase").with("price", 1250.0),
            Record::new().with("name", "Mug").with("price", 12.9),
        ];
        let settings = ListSettings::default();
        let state = page.initial_state(&settings);
        let now = NaiveDate::from_ymd_opt(2024, 3, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        page.view_records(&records, &state, &settings, now)
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&view());
        let expected = "== Products ==\n\
                        Name ▲ | Price\n\
                        -------+------\n\
                        Mug    | 12.90\n\
                        Vase   | 1 250\n\
                        Totals: price = 1 262.90\n\
                        Page 1 / 1 (2 rows)\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&[view()]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], "products");
        assert_eq!(value[0]["table"]["total_count"], 2);
        assert_eq!(value[0]["table"]["rows"][0]["cells"][0]["value"], "Mug");
        assert_eq!(value[0]["table"]["rows"][0]["cells"][1]["type"], "number");
    }
}
