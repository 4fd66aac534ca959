use serde::{Deserialize, Serialize};

/// Alert severity, named after the colour it is rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Red,
    Orange,
    Green,
}

impl AlertSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            AlertSeverity::Red => "Critical",
            AlertSeverity::Orange => "Warning",
            AlertSeverity::Green => "Success",
        }
    }

    /// CSS modifier used by the alerts feed
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertSeverity::Red => "alert-red",
            AlertSeverity::Orange => "alert-orange",
            AlertSeverity::Green => "alert-green",
        }
    }
}
