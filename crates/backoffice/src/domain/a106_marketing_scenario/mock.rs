use contracts::domain::a106_marketing_scenario::MarketingScenario;
use contracts::enums::ScenarioKind;
use contracts::shared::records::Record;
use once_cell::sync::Lazy;

use crate::shared::mock::days_ago;

static SCENARIOS: Lazy<Vec<MarketingScenario>> = Lazy::new(build_scenarios);
static RECORDS: Lazy<Vec<Record>> = Lazy::new(|| SCENARIOS.iter().map(Record::from).collect());

pub fn scenarios() -> &'static [MarketingScenario] {
    &SCENARIOS
}

pub fn records() -> &'static [Record] {
    &RECORDS
}

pub fn find(id: i64) -> Option<&'static MarketingScenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

fn build_scenarios() -> Vec<MarketingScenario> {
    vec![
        MarketingScenario {
            id: 1,
            site_id: 1,
            kind: ScenarioKind::Birthday,
            name: "Birthday offer".to_string(),
            subject: "Happy birthday, {firstname}!".to_string(),
            body: "Dear {firstname} {lastname}, enjoy 15% off your next order today.".to_string(),
            cta_link: "boutique.example.com/anniversaire".to_string(),
            utm_campaign: "birthday".to_string(),
            active: true,
            sent_count: 128,
            last_run_at: Some(days_ago(0, 7, 0)),
        },
        MarketingScenario {
            id: 2,
            site_id: 2,
            kind: ScenarioKind::Birthday,
            name: "Birthday offer (BE)".to_string(),
            subject: "Joyeux anniversaire {firstname} !".to_string(),
            body: "{firstname}, un cadeau vous attend dans votre espace client.".to_string(),
            cta_link: "https://boutique.example.be/anniversaire?ref=mail".to_string(),
            utm_campaign: "birthday-be".to_string(),
            active: true,
            sent_count: 41,
            last_run_at: Some(days_ago(0, 7, 0)),
        },
        MarketingScenario {
            id: 3,
            site_id: 1,
            kind: ScenarioKind::CartAbandonment,
            name: "Cart reminder, 24h".to_string(),
            subject: "{firstname}, your cart is waiting".to_string(),
            body: "Your cart of {cart_total} EUR is still saved for you.".to_string(),
            cta_link: "boutique.example.com/panier".to_string(),
            utm_campaign: "cart-reminder".to_string(),
            active: true,
            sent_count: 356,
            last_run_at: Some(days_ago(1, 19, 0)),
        },
        MarketingScenario {
            id: 4,
            site_id: 2,
            kind: ScenarioKind::CartAbandonment,
            name: "Cart reminder (draft)".to_string(),
            subject: "Votre panier vous attend".to_string(),
            body: "Bonjour {firstname}, votre panier de {cart_total} EUR est toujours là.".to_string(),
            cta_link: "lien à définir".to_string(),
            utm_campaign: "cart-reminder-be".to_string(),
            active: false,
            sent_count: 0,
            last_run_at: None,
        },
    ]
}
