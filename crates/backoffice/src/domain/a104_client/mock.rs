use chrono::{Datelike, NaiveDate};
use contracts::domain::a104_client::Client;
use contracts::shared::records::Record;
use once_cell::sync::Lazy;

use crate::shared::mock::{anchor, days_ago};

static CLIENTS: Lazy<Vec<Client>> = Lazy::new(build_clients);
static RECORDS: Lazy<Vec<Record>> = Lazy::new(|| CLIENTS.iter().map(Record::from).collect());

pub fn clients() -> &'static [Client] {
    &CLIENTS
}

pub fn records() -> &'static [Record] {
    &RECORDS
}

pub fn find(id: i64) -> Option<&'static Client> {
    CLIENTS.iter().find(|c| c.id == id)
}

fn build_clients() -> Vec<Client> {
    // (id, site, firstname, lastname, birthday (m, d), newsletter, orders, spent, created days ago)
    let rows: [(i64, i64, &str, &str, Option<(u32, u32)>, bool, i64, f64, i64); 12] = [
        (1, 1, "Marie", "Dupont", Some((4, 12)), true, 6, 412.80, 420),
        (2, 1, "Jean", "Martin", Some((11, 3)), false, 2, 89.90, 310),
        (3, 2, "Sophie", "Bernard", None, true, 9, 1290.45, 600),
        (4, 1, "Luc", "Dupontel", Some((1, 27)), true, 1, 24.99, 45),
        (5, 2, "Camille", "Leroy", Some((7, 19)), false, 0, 0.0, 12),
        (6, 1, "Hugo", "Moreau", Some((2, 8)), true, 4, 268.00, 200),
        (7, 2, "Chloé", "Fournier", None, false, 3, 156.70, 95),
        (8, 1, "Paul", "Girard", Some((9, 30)), true, 12, 2045.10, 900),
        (9, 1, "Léa", "Dupond", Some((5, 5)), true, 1, 39.00, 6),
        (10, 2, "Nicolas", "Lambert", Some((12, 24)), false, 5, 377.35, 150),
        (11, 1, "Emma", "Roux", None, true, 0, 0.0, 2),
        (12, 2, "Thomas", "Vincent", Some((3, 15)), true, 7, 845.60, 540),
    ];

    let mut clients: Vec<Client> = rows
        .iter()
        .map(
            |&(id, site_id, firstname, lastname, birthday, newsletter, orders, spent, created)| {
                Client {
                    id,
                    site_id,
                    firstname: firstname.to_string(),
                    lastname: lastname.to_string(),
                    email: format!(
                        "{}.{}@example.com",
                        firstname.to_lowercase(),
                        lastname.to_lowercase()
                    ),
                    birthday: birthday.and_then(|(m, d)| NaiveDate::from_ymd_opt(1990, m, d)),
                    newsletter,
                    orders_count: orders,
                    total_spent: spent,
                    created_at: days_ago(created, 10, 15),
                }
            },
        )
        .collect();

    // Emma's birthday is the anchor day, so the birthday scenario always has a recipient
    let today = anchor().date();
    if let Some(emma) = clients.iter_mut().find(|c| c.id == 11) {
        emma.birthday = NaiveDate::from_ymd_opt(1996, today.month(), today.day());
    }

    clients
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_match_clients() {
        assert_eq!(records().len(), clients().len());
        assert_eq!(records()[0].text("lastname"), Some("Dupont"));
        assert_eq!(find(9).map(|c| c.email.as_str()), Some("léa.dupond@example.com"));
        assert!(find(99).is_none());
    }
}
