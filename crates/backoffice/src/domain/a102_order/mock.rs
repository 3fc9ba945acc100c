use contracts::domain::a102_order::Order;
use contracts::enums::OrderStatus;
use contracts::shared::records::Record;
use once_cell::sync::Lazy;

use crate::domain::a104_client;
use crate::shared::mock::days_ago;

static ORDERS: Lazy<Vec<Order>> = Lazy::new(build_orders);
static RECORDS: Lazy<Vec<Record>> = Lazy::new(|| ORDERS.iter().map(Record::from).collect());

pub fn orders() -> &'static [Order] {
    &ORDERS
}

pub fn records() -> &'static [Record] {
    &RECORDS
}

fn build_orders() -> Vec<Order> {
    use OrderStatus::*;

    // (id, client, status, items, total, payment, created days ago, hour)
    let rows: [(i64, i64, OrderStatus, i64, f64, &str, i64, u32); 20] = [
        (1001, 1, Delivered, 2, 37.40, "card", 88, 14),
        (1002, 3, Delivered, 1, 189.00, "paypal", 75, 9),
        (1003, 8, Refunded, 3, 96.50, "card", 61, 18),
        (1004, 6, Delivered, 1, 59.00, "card", 40, 11),
        (1005, 12, Cancelled, 2, 48.00, "transfer", 33, 16),
        (1006, 2, Delivered, 4, 89.90, "card", 29, 20),
        (1007, 8, Shipped, 1, 129.00, "card", 21, 8),
        (1008, 10, Delivered, 2, 63.00, "paypal", 18, 13),
        (1009, 1, Shipped, 3, 112.40, "card", 14, 19),
        (1010, 4, Delivered, 1, 24.99, "card", 12, 10),
        (1011, 7, Paid, 2, 52.50, "paypal", 9, 15),
        (1012, 3, Paid, 5, 301.20, "card", 7, 12),
        (1013, 9, Pending, 1, 39.00, "transfer", 6, 22),
        (1014, 12, Shipped, 2, 147.00, "card", 5, 9),
        (1015, 6, Paid, 1, 18.50, "card", 4, 17),
        (1016, 8, Pending, 3, 220.00, "transfer", 3, 8),
        (1017, 10, Paid, 1, 34.00, "paypal", 2, 21),
        (1018, 1, Pending, 2, 41.40, "card", 1, 10),
        (1019, 3, Paid, 1, 72.00, "card", 0, 8),
        (1020, 99, Pending, 1, 12.90, "card", 0, 9),
    ];

    rows.iter()
        .map(|&(id, client_id, status, items, total, payment, days, hour)| {
            // Client references are informational; unknown ids keep a placeholder name
            let (site_id, client_name) = match a104_client::mock::find(client_id) {
                Some(client) => (client.site_id, client.full_name()),
                None => (1, format!("Client #{}", client_id)),
            };
            Order {
                id,
                reference: format!("CMD-{}", id),
                site_id,
                client_id,
                client_name,
                status,
                items_count: items,
                total,
                payment_method: payment.to_string(),
                created_at: days_ago(days, hour, 30),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_client_is_not_an_error() {
        let order = orders().iter().find(|o| o.id == 1020).unwrap();
        assert_eq!(order.client_name, "Client #99");
        assert_eq!(records().len(), 20);
    }
}
