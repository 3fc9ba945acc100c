use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::shared::records::Record;

/// Товар каталога
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    /// Сайт (витрина), на котором опубликован товар
    pub site_id: i64,
    /// Артикул
    pub sku: String,
    pub name: String,
    pub brand: String,
    pub category: String,
    /// Цена с НДС
    pub price: f64,
    pub stock: i64,
    pub active: bool,
    pub created_at: NaiveDateTime,
}

impl From<&Product> for Record {
    fn from(p: &Product) -> Self {
        Record::new()
            .with("id", p.id)
            .with("site_id", p.site_id)
            .with("sku", p.sku.as_str())
            .with("name", p.name.as_str())
            .with("brand", p.brand.as_str())
            .with("category", p.category.as_str())
            .with("price", p.price)
            .with("stock", p.stock)
            .with("active", p.active)
            .with("created_at", p.created_at)
    }
}
