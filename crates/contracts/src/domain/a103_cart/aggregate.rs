use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::shared::records::Record;

/// Корзина покупателя (в том числе брошенная)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub id: i64,
    pub site_id: i64,
    pub client_id: i64,
    pub client_email: String,
    pub items_count: i64,
    pub total: f64,
    pub updated_at: NaiveDateTime,
    pub abandoned: bool,
    /// Когда ушло напоминание о брошенной корзине
    pub reminder_sent_at: Option<NaiveDateTime>,
}

impl From<&Cart> for Record {
    fn from(c: &Cart) -> Self {
        Record::new()
            .with("id", c.id)
            .with("site_id", c.site_id)
            .with("client_id", c.client_id)
            .with("client_email", c.client_email.as_str())
            .with("items_count", c.items_count)
            .with("total", c.total)
            .with("updated_at", c.updated_at)
            .with("abandoned", c.abandoned)
            .with("reminder_sent_at", c.reminder_sent_at)
    }
}
