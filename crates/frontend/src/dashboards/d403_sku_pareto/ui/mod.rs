pub mod chart;
pub mod page;

pub use chart::SkuParetoChart;
pub use page::ProductsPage;
