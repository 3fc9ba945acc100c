pub mod a101_product;
pub mod a102_order;
pub mod a103_cart;
pub mod a104_client;
pub mod a105_search_log;
pub mod a106_marketing_scenario;

use crate::shared::page::PageDef;

/// Все страницы списков в порядке бокового меню
pub fn all_pages() -> Vec<PageDef> {
    vec![
        a101_product::page(),
        a102_order::page(),
        a103_cart::page(),
        a104_client::page(),
        a105_search_log::page(),
        a106_marketing_scenario::page(),
    ]
}
