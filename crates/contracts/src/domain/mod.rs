pub mod a101_product;
pub mod a102_order;
pub mod a103_cart;
pub mod a104_client;
pub mod a105_search_log;
pub mod a106_marketing_scenario;
