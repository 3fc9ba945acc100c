pub mod criteria;
pub mod table;

pub use criteria::*;
pub use table::*;
