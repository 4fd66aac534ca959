pub mod d401_kpi;
pub mod d402_sales_series;
pub mod d403_sku_pareto;
pub mod d404_penetration;
pub mod d405_dsr_stats;
pub mod d406_hierarchy;
