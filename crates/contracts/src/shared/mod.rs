pub mod config;
pub mod filters;
pub mod math;
pub mod mock_data;
pub mod navigation;
pub mod sorting;
