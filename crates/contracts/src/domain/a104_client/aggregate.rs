use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::shared::records::Record;

/// Клиент магазина
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub site_id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub birthday: Option<NaiveDate>,
    pub newsletter: bool,
    pub orders_count: i64,
    pub total_spent: f64,
    pub created_at: NaiveDateTime,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

impl From<&Client> for Record {
    fn from(c: &Client) -> Self {
        Record::new()
            .with("id", c.id)
            .with("site_id", c.site_id)
            .with("firstname", c.firstname.as_str())
            .with("lastname", c.lastname.as_str())
            .with("email", c.email.as_str())
            .with("birthday", c.birthday.and_then(|d| d.and_hms_opt(0, 0, 0)))
            .with("newsletter", c.newsletter)
            .with("orders_count", c.orders_count)
            .with("total_spent", c.total_spent)
            .with("created_at", c.created_at)
    }
}
