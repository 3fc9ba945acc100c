use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::enums::ScenarioKind;
use crate::shared::records::Record;

/// Сценарий маркетинговой автоматизации (письмо по событию)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketingScenario {
    pub id: i64,
    pub site_id: i64,
    pub kind: ScenarioKind,
    pub name: String,
    pub subject: String,
    /// Body template with `{firstname}`, `{lastname}` and `{cart_total}` placeholders
    pub body: String,
    /// Call-to-action link, scheme optional
    pub cta_link: String,
    pub utm_campaign: String,
    pub active: bool,
    pub sent_count: i64,
    pub last_run_at: Option<NaiveDateTime>,
}

impl From<&MarketingScenario> for Record {
    fn from(s: &MarketingScenario) -> Self {
        Record::new()
            .with("id", s.id)
            .with("site_id", s.site_id)
            .with("kind", s.kind.display_name())
            .with("name", s.name.as_str())
            .with("subject", s.subject.as_str())
            .with("cta_link", s.cta_link.as_str())
            .with("utm_campaign", s.utm_campaign.as_str())
            .with("active", s.active)
            .with("sent_count", s.sent_count)
            .with("last_run_at", s.last_run_at)
    }
}
