pub mod components;
pub mod date_utils;
pub mod export;
pub mod filters;
pub mod icons;
pub mod list_utils;
pub mod scope;
