use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::shared::records::Record;

/// Запись журнала поиска по витрине
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchLog {
    pub id: i64,
    pub site_id: i64,
    pub query: String,
    pub results_count: i64,
    /// Клиент, если он был авторизован
    pub client_id: Option<i64>,
    pub searched_at: NaiveDateTime,
}

impl From<&SearchLog> for Record {
    fn from(s: &SearchLog) -> Self {
        let mut record = Record::new()
            .with("id", s.id)
            .with("site_id", s.site_id)
            .with("query", s.query.as_str())
            .with("results_count", s.results_count)
            .with("searched_at", s.searched_at);
        if let Some(client_id) = s.client_id {
            record.insert("client_id", client_id);
        }
        record
    }
}
