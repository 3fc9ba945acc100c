//! Предпросмотр писем маркетинговых сценариев

use chrono::{Datelike, NaiveDateTime};
use contracts::domain::a103_cart::Cart;
use contracts::domain::a104_client::Client;
use contracts::domain::a106_marketing_scenario::MarketingScenario;
use contracts::enums::ScenarioKind;
use contracts::shared::list::{Criteria, Criterion};
use contracts::shared::records::{FieldValue, Record};
use contracts::shared::utm::UtmParams;
use serde::Serialize;

use crate::domain::{a103_cart, a104_client};
use crate::shared::config::UtmConfig;
use crate::shared::format::format_money;
use crate::shared::list::{All, Predicate};
use crate::shared::utm::tracked_link_or_omit;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailPreview {
    pub scenario_id: i64,
    pub to: String,
    pub subject: String,
    pub body: String,
    /// `None` when the scenario link is malformed
    pub link: Option<String>,
}

/// Who would receive the scenario email if it ran at `now`
#[derive(Debug, Clone, Copy)]
pub struct Recipient {
    pub client: &'static Client,
    pub cart: Option<&'static Cart>,
}

pub fn utm_params(scenario: &MarketingScenario, utm: &UtmConfig) -> UtmParams {
    UtmParams::new()
        .source(&utm.source)
        .medium(&utm.medium)
        .campaign(&scenario.utm_campaign)
        .content(scenario.kind.code())
}

pub fn render_preview(
    scenario: &MarketingScenario,
    client: &Client,
    cart: Option<&Cart>,
    utm: &UtmConfig,
) -> EmailPreview {
    let cart_total = cart.map(|c| format_money(c.total)).unwrap_or_default();
    let fill = |template: &str| {
        template
            .replace("{firstname}", &client.firstname)
            .replace("{lastname}", &client.lastname)
            .replace("{cart_total}", &cart_total)
    };

    EmailPreview {
        scenario_id: scenario.id,
        to: client.email.clone(),
        subject: fill(&scenario.subject),
        body: fill(&scenario.body),
        link: tracked_link_or_omit(&scenario.cta_link, &utm_params(scenario, utm)),
    }
}

/// Получатели сценария: именинники дня или брошенные корзины без напоминания
pub fn recipients(scenario: &MarketingScenario, now: NaiveDateTime) -> Vec<Recipient> {
    let same_site = Criteria::new().and(Criterion::equals("site_id", scenario.site_id));

    match scenario.kind {
        ScenarioKind::Birthday => {
            let today = now.date();
            let birthday_today = |record: &Record| {
                record
                    .date("birthday")
                    .map(|b| b.month() == today.month() && b.day() == today.day())
                    .unwrap_or(false)
            };
            let predicate = All::new().and(&same_site).and(&birthday_today);
            matching(a104_client::mock::clients(), a104_client::records(), &predicate)
                .into_iter()
                .map(|client| Recipient { client, cart: None })
                .collect()
        }
        ScenarioKind::CartAbandonment => {
            let waiting = |record: &Record| {
                record.get("abandoned") == Some(&FieldValue::Bool(true))
                    && record.date("reminder_sent_at").is_none()
            };
            let predicate = All::new().and(&same_site).and(&waiting);
            matching(a103_cart::mock::carts(), a103_cart::records(), &predicate)
                .into_iter()
                .filter_map(|cart| {
                    a104_client::mock::find(cart.client_id).map(|client| Recipient {
                        client,
                        cart: Some(cart),
                    })
                })
                .collect()
        }
    }
}

/// Entities whose record matches; `records[i]` is built from `entities[i]`
fn matching<T>(
    entities: &'static [T],
    records: &'static [Record],
    predicate: &dyn Predicate,
) -> Vec<&'static T> {
    entities
        .iter()
        .zip(records)
        .filter(|(_, record)| predicate.matches(record))
        .map(|(entity, _)| entity)
        .collect()
}

/// Previews for every current recipient of the scenario
pub fn previews(
    scenario: &MarketingScenario,
    utm: &UtmConfig,
    now: NaiveDateTime,
) -> Vec<EmailPreview> {
    recipients(scenario, now)
        .into_iter()
        .map(|r| render_preview(scenario, r.client, r.cart, utm))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a106_marketing_scenario::mock;
    use crate::shared::mock::anchor;

    fn utm() -> UtmConfig {
        UtmConfig {
            source: "backoffice".to_string(),
            medium: "email".to_string(),
        }
    }

    #[test]
    fn test_birthday_preview() {
        let scenario = mock::find(1).unwrap();
        let client = a104_client::mock::find(1).unwrap();
        let preview = render_preview(scenario, client, None, &utm());
        assert_eq!(preview.to, "marie.dupont@example.com");
        assert_eq!(preview.subject, "Happy birthday, Marie!");
        assert_eq!(
            preview.body,
            "Dear Marie Dupont, enjoy 15% off your next order today."
        );
        assert_eq!(
            preview.link.as_deref(),
            Some(
                "https://boutique.example.com/anniversaire?utm_source=backoffice\
                 &utm_medium=email&utm_campaign=birthday&utm_content=birthday"
            )
        );
    }

    #[test]
    fn test_cart_preview_uses_cart_total() {
        let scenario = mock::find(3).unwrap();
        let cart = a103_cart::mock::carts().iter().find(|c| c.id == 502).unwrap();
        let client = a104_client::mock::find(cart.client_id).unwrap();
        let preview = render_preview(scenario, client, Some(cart), &utm());
        assert_eq!(preview.subject, "Léa, your cart is waiting");
        assert_eq!(preview.body, "Your cart of 168.40 EUR is still saved for you.");
    }

    #[test]
    fn test_malformed_link_is_omitted() {
        let scenario = mock::find(4).unwrap();
        let client = a104_client::mock::find(5).unwrap();
        let preview = render_preview(scenario, client, None, &utm());
        assert_eq!(preview.link, None);
        assert_eq!(preview.body, "Bonjour Camille, votre panier de  EUR est toujours là.");
    }

    #[test]
    fn test_birthday_recipients_include_todays_birthday() {
        let scenario = mock::find(1).unwrap();
        let ids: Vec<i64> = recipients(scenario, anchor())
            .iter()
            .map(|r| r.client.id)
            .collect();
        assert!(ids.contains(&11));
        assert!(recipients(scenario, anchor())
            .iter()
            .all(|r| r.client.site_id == 1 && r.cart.is_none()));
    }

    #[test]
    fn test_cart_recipients_skip_reminded_carts() {
        let site_1 = mock::find(3).unwrap();
        let carts: Vec<i64> = recipients(site_1, anchor())
            .iter()
            .filter_map(|r| r.cart.map(|c| c.id))
            .collect();
        assert_eq!(carts, vec![502]);

        let site_2 = mock::find(4).unwrap();
        let carts: Vec<i64> = recipients(site_2, anchor())
            .iter()
            .filter_map(|r| r.cart.map(|c| c.id))
            .collect();
        assert_eq!(carts, vec![507]);
        assert_eq!(previews(site_2, &utm(), anchor()).len(), 1);
    }
}
