pub mod page;
pub mod table;

pub use page::DsrPerformancePage;
pub use table::DsrTable;
