pub mod aggregate;

pub use aggregate::{Area, Region, Territory};
