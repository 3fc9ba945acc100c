pub mod mock;
pub mod page;
pub mod preview;

pub use mock::records;
pub use page::page;
