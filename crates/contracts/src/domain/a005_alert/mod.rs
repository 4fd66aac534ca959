pub mod aggregate;

pub use aggregate::{Alert, AlertEntity};
