use crate::enums::AlertSeverity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of record an alert points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertEntity {
    Region,
    Area,
    Territory,
    Dsr,
    Outlet,
    Product,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub severity: AlertSeverity,
    pub title: String,
    pub description: String,
    pub entity_type: AlertEntity,
    pub entity_id: String,
    pub timestamp: DateTime<Utc>,
}
