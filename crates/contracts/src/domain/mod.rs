pub mod a001_hierarchy;
pub mod a002_dsr;
pub mod a003_product;
pub mod a004_outlet;
pub mod a005_alert;
