pub mod aggregate;

pub use aggregate::Dsr;
