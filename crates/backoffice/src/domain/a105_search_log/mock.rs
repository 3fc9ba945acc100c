use contracts::domain::a105_search_log::SearchLog;
use contracts::shared::records::Record;
use once_cell::sync::Lazy;

use crate::shared::mock::days_ago;

static SEARCH_LOGS: Lazy<Vec<SearchLog>> = Lazy::new(build_search_logs);
static RECORDS: Lazy<Vec<Record>> = Lazy::new(|| SEARCH_LOGS.iter().map(Record::from).collect());

pub fn records() -> &'static [Record] {
    &RECORDS
}

fn build_search_logs() -> Vec<SearchLog> {
    // (id, site, query, results, client, days ago, hour)
    let rows: [(i64, i64, &str, i64, Option<i64>, i64, u32); 15] = [
        (1, 1, "mug", 2, Some(1), 0, 9),
        (2, 1, "candle fig", 1, None, 0, 11),
        (3, 2, "lamp", 2, Some(3), 1, 14),
        (4, 1, "teapot", 1, None, 1, 16),
        (5, 2, "rug jute", 1, Some(10), 2, 10),
        (6, 1, "cushion", 2, Some(6), 3, 20),
        (7, 1, "vase blue", 0, None, 4, 8),
        (8, 2, "candle", 2, None, 6, 13),
        (9, 1, "plates", 0, Some(9), 8, 17),
        (10, 1, "mug", 2, None, 10, 12),
        (11, 2, "brass lamp", 1, Some(12), 15, 18),
        (12, 1, "gift card", 0, None, 22, 9),
        (13, 1, "espresso", 1, Some(2), 27, 21),
        (14, 2, "linen", 1, None, 40, 15),
        (15, 1, "Mug", 2, Some(8), 95, 10),
    ];

    rows.iter()
        .map(|&(id, site_id, query, results_count, client_id, days, hour)| SearchLog {
            id,
            site_id,
            query: query.to_string(),
            results_count,
            client_id,
            searched_at: days_ago(days, hour, 0),
        })
        .collect()
}
