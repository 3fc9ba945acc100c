use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::OrderStatus;
use crate::shared::records::Record;

/// Заказ покупателя
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Номер заказа, как его видит покупатель
    pub reference: String,
    pub site_id: i64,
    /// Ссылка на клиента (не проверяется)
    pub client_id: i64,
    pub client_name: String,
    pub status: OrderStatus,
    pub items_count: i64,
    pub total: f64,
    pub payment_method: String,
    pub created_at: NaiveDateTime,
}

impl From<&Order> for Record {
    fn from(o: &Order) -> Self {
        Record::new()
            .with("id", o.id)
            .with("reference", o.reference.as_str())
            .with("site_id", o.site_id)
            .with("client_id", o.client_id)
            .with("client_name", o.client_name.as_str())
            .with("status", o.status.display_name())
            .with("items_count", o.items_count)
            .with("total", o.total)
            .with("payment_method", o.payment_method.as_str())
            .with("created_at", o.created_at)
    }
}
