use crate::enums::{Channel, OutletType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outlet {
    pub id: String,
    pub name: String,
    pub address: String,
    pub channel: Channel,
    #[serde(rename = "type")]
    pub outlet_type: OutletType,
    pub dsr_id: String,
    pub last_purchase_date: NaiveDate,
    pub total_revenue: f64,
    pub is_lapsed: bool,
    pub contact_phone: String,
    /// SKU ids the outlet stocks
    pub skus: Vec<String>,
}

impl Outlet {
    pub fn stocks(&self, sku_id: &str) -> bool {
        self.skus.iter().any(|s| s == sku_id)
    }
}
