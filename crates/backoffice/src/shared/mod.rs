pub mod config;
pub mod format;
pub mod list;
pub mod mock;
pub mod page;
pub mod period;
pub mod render;
pub mod utm;
