pub mod list;
pub mod period;
pub mod records;
pub mod utm;
