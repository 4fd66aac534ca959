pub mod alert_severity;
pub mod channel;
pub mod date_range_kind;
pub mod outlet_type;

pub use alert_severity::AlertSeverity;
pub use channel::Channel;
pub use date_range_kind::DateRangeKind;
pub use outlet_type::OutletType;
