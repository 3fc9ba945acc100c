pub mod mock;
pub mod page;

pub use mock::records;
pub use page::page;
