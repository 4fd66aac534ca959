use serde::{Deserialize, Serialize};

/// Symbolic date range selection of the global filter bar.
///
/// Any value may be selected from any other; switching to `Custom` does not
/// set dates by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateRangeKind {
    #[serde(rename = "last7")]
    Last7,
    #[default]
    #[serde(rename = "last30")]
    Last30,
    #[serde(rename = "last90")]
    Last90,
    #[serde(rename = "custom")]
    Custom,
}

impl DateRangeKind {
    pub fn code(&self) -> &'static str {
        match self {
            DateRangeKind::Last7 => "last7",
            DateRangeKind::Last30 => "last30",
            DateRangeKind::Last90 => "last90",
            DateRangeKind::Custom => "custom",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DateRangeKind::Last7 => "Last 7 days",
            DateRangeKind::Last30 => "Last 30 days",
            DateRangeKind::Last90 => "Last 90 days",
            DateRangeKind::Custom => "Custom range",
        }
    }

    /// Length of a rolling window in calendar days, `None` for `Custom`
    pub fn days(&self) -> Option<u64> {
        match self {
            DateRangeKind::Last7 => Some(7),
            DateRangeKind::Last30 => Some(30),
            DateRangeKind::Last90 => Some(90),
            DateRangeKind::Custom => None,
        }
    }

    pub fn all() -> Vec<DateRangeKind> {
        vec![
            DateRangeKind::Last7,
            DateRangeKind::Last30,
            DateRangeKind::Last90,
            DateRangeKind::Custom,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "last7" => Some(DateRangeKind::Last7),
            "last30" => Some(DateRangeKind::Last30),
            "last90" => Some(DateRangeKind::Last90),
            "custom" => Some(DateRangeKind::Custom),
            _ => None,
        }
    }
}
