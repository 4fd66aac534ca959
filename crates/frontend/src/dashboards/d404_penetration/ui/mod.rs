mod heatmap;

pub use heatmap::PenetrationHeatmap;
