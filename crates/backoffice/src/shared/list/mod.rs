pub mod filter;
pub mod table_view;

pub use filter::{filter_records, All, Predicate};
pub use table_view::{column_total, present, sort_records, ColumnDef};
