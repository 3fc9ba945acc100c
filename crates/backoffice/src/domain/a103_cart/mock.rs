use contracts::domain::a103_cart::Cart;
use contracts::shared::records::Record;
use once_cell::sync::Lazy;

use crate::domain::a104_client;
use crate::shared::mock::days_ago;

static CARTS: Lazy<Vec<Cart>> = Lazy::new(build_carts);
static RECORDS: Lazy<Vec<Record>> = Lazy::new(|| CARTS.iter().map(Record::from).collect());

pub fn carts() -> &'static [Cart] {
    &CARTS
}

pub fn records() -> &'static [Record] {
    &RECORDS
}

fn build_carts() -> Vec<Cart> {
    // (id, client, items, total, updated days ago, abandoned, reminder days ago)
    let rows: [(i64, i64, i64, f64, i64, bool, Option<i64>); 10] = [
        (501, 2, 1, 24.50, 0, false, None),
        (502, 9, 3, 168.40, 1, true, None),
        (503, 7, 2, 63.00, 2, true, Some(1)),
        (504, 11, 1, 129.00, 3, true, Some(2)),
        (505, 1, 4, 97.80, 5, false, None),
        (506, 6, 2, 47.50, 8, true, Some(7)),
        (507, 10, 1, 189.00, 12, true, None),
        (508, 4, 2, 36.90, 20, false, None),
        (509, 9, 1, 18.50, 31, true, Some(30)),
        (510, 3, 6, 412.00, 45, true, Some(44)),
    ];

    rows.iter()
        .map(|&(id, client_id, items, total, updated, abandoned, reminder)| {
            let (site_id, client_email) = match a104_client::mock::find(client_id) {
                Some(client) => (client.site_id, client.email.clone()),
                None => (1, String::new()),
            };
            Cart {
                id,
                site_id,
                client_id,
                client_email,
                items_count: items,
                total,
                updated_at: days_ago(updated, 18, 5),
                abandoned,
                reminder_sent_at: reminder.map(|days| days_ago(days, 19, 0)),
            }
        })
        .collect()
}
