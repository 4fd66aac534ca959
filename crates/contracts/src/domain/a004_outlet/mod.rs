pub mod aggregate;

pub use aggregate::Outlet;
