pub mod chart;
pub mod page;

pub use chart::SalesChart;
pub use page::AnalyticsPage;
