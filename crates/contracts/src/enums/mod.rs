pub mod order_status;
pub mod scenario_kind;

pub use order_status::OrderStatus;
pub use scenario_kind::ScenarioKind;
