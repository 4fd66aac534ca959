//! Bundled sales dataset.
//!
//! Every view reads from [`MOCK`]; nothing mutates it.

use crate::domain::a001_hierarchy::{Area, Region, Territory};
use crate::domain::a002_dsr::Dsr;
use crate::domain::a003_product::Product;
use crate::domain::a004_outlet::Outlet;
use crate::domain::a005_alert::{Alert, AlertEntity};
use crate::enums::{AlertSeverity, Channel, OutletType};
use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;

#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub regions: Vec<Region>,
    pub areas: Vec<Area>,
    pub territories: Vec<Territory>,
    pub dsrs: Vec<Dsr>,
    pub products: Vec<Product>,
    pub outlets: Vec<Outlet>,
    pub alerts: Vec<Alert>,
}

pub static MOCK: Lazy<Dataset> = Lazy::new(Dataset::mock);

impl Dataset {
    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn area(&self, id: &str) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }

    pub fn territory(&self, id: &str) -> Option<&Territory> {
        self.territories.iter().find(|t| t.id == id)
    }

    pub fn dsr(&self, id: &str) -> Option<&Dsr> {
        self.dsrs.iter().find(|d| d.id == id)
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn outlet(&self, id: &str) -> Option<&Outlet> {
        self.outlets.iter().find(|o| o.id == id)
    }

    pub fn areas_in<'a>(&'a self, region_id: &'a str) -> impl Iterator<Item = &'a Area> + 'a {
        self.areas.iter().filter(move |a| a.region_id == region_id)
    }

    /// `(area_id, region_id)` of a territory
    pub fn ancestry(&self, territory_id: &str) -> Option<(&str, &str)> {
        let territory = self.territory(territory_id)?;
        let area = self.area(&territory.area_id)?;
        Some((area.id.as_str(), area.region_id.as_str()))
    }

    /// Display name of any hierarchy node, DSR, outlet or product id
    pub fn entity_name(&self, id: &str) -> Option<&str> {
        self.region(id)
            .map(|r| r.name.as_str())
            .or_else(|| self.area(id).map(|a| a.name.as_str()))
            .or_else(|| self.territory(id).map(|t| t.name.as_str()))
            .or_else(|| self.dsr(id).map(|d| d.name.as_str()))
            .or_else(|| self.outlet(id).map(|o| o.name.as_str()))
            .or_else(|| self.product(id).map(|p| p.name.as_str()))
    }

    pub fn mock() -> Self {
        Self {
            regions: vec![
                Region::new("R1", "North Region"),
                Region::new("R2", "South Region"),
                Region::new("R3", "West Region"),
            ],
            areas: vec![
                Area::new("A1", "Delhi NCR", "R1"),
                Area::new("A2", "UP West", "R1"),
                Area::new("A3", "Karnataka", "R2"),
                Area::new("A4", "Tamil Nadu", "R2"),
                Area::new("A5", "Maharashtra", "R3"),
            ],
            territories: vec![
                Territory::new("T1", "Central Delhi", "A1"),
                Territory::new("T2", "South Delhi", "A1"),
                Territory::new("T3", "Gurgaon", "A1"),
                Territory::new("T4", "Noida", "A2"),
                Territory::new("T5", "Ghaziabad", "A2"),
                Territory::new("T6", "Bangalore Central", "A3"),
                Territory::new("T7", "Bangalore South", "A3"),
                Territory::new("T8", "Chennai North", "A4"),
                Territory::new("T9", "Chennai South", "A4"),
                Territory::new("T10", "Mumbai Central", "A5"),
                Territory::new("T11", "Pune", "A5"),
            ],
            dsrs: vec![
                dsr("DSR1", "Rahul Sharma", "+91 98765 43210", "T1", 45, 234_500.0, 250_000.0, 212_000.0, "2024-01-15"),
                dsr("DSR2", "Priya Singh", "+91 98765 43211", "T1", 52, 289_000.0, 275_000.0, 264_500.0, "2024-01-15"),
                dsr("DSR3", "Amit Kumar", "+91 98765 43212", "T2", 38, 178_000.0, 200_000.0, 186_000.0, "2024-01-14"),
                dsr("DSR4", "Neha Gupta", "+91 98765 43213", "T3", 61, 345_000.0, 320_000.0, 301_000.0, "2024-01-15"),
                dsr("DSR5", "Vikram Patel", "+91 98765 43214", "T4", 42, 198_000.0, 220_000.0, 207_500.0, "2024-01-13"),
                dsr("DSR6", "Sunita Devi", "+91 98765 43215", "T5", 55, 267_000.0, 260_000.0, 249_000.0, "2024-01-15"),
                dsr("DSR7", "Rajesh Verma", "+91 98765 43216", "T6", 48, 312_000.0, 300_000.0, 284_000.0, "2024-01-15"),
                dsr("DSR8", "Anita Rao", "+91 98765 43217", "T7", 39, 189_000.0, 210_000.0, 176_500.0, "2024-01-14"),
                dsr("DSR9", "Mohammed Ali", "+91 98765 43218", "T8", 57, 278_000.0, 280_000.0, 269_000.0, "2024-01-15"),
                dsr("DSR10", "Kavitha Nair", "+91 98765 43219", "T9", 44, 223_000.0, 240_000.0, 231_000.0, "2024-01-12"),
            ],
            products: vec![
                Product::new("SKU1", "Premium Biscuits 200g", "Biscuits", 45.0, "pack"),
                Product::new("SKU2", "Chocolate Cookies 150g", "Biscuits", 55.0, "pack"),
                Product::new("SKU3", "Instant Noodles 70g", "Noodles", 14.0, "pack"),
                Product::new("SKU4", "Masala Noodles 4-pack", "Noodles", 50.0, "pack"),
                Product::new("SKU5", "Hair Oil 100ml", "Personal Care", 85.0, "bottle"),
                Product::new("SKU6", "Shampoo 200ml", "Personal Care", 120.0, "bottle"),
                Product::new("SKU7", "Detergent Powder 1kg", "Home Care", 95.0, "pack"),
                Product::new("SKU8", "Floor Cleaner 500ml", "Home Care", 65.0, "bottle"),
                Product::new("SKU9", "Tea 250g", "Beverages", 110.0, "pack"),
                Product::new("SKU10", "Coffee 100g", "Beverages", 145.0, "jar"),
            ],
            outlets: vec![
                outlet("O1", "Sharma General Store", "123 Main Road, Central Delhi", Channel::GeneralTrade, OutletType::Kirana, "DSR1", "2024-01-14", 45_000.0, false, "+91 11 2345 6789", &["SKU1", "SKU3", "SKU5", "SKU7"]),
                outlet("O2", "Gupta Provisions", "45 Market Street, Central Delhi", Channel::GeneralTrade, OutletType::Kirana, "DSR1", "2023-12-10", 32_000.0, true, "+91 11 2345 6790", &["SKU1", "SKU2"]),
                outlet("O3", "Metro Supermart", "78 Ring Road, South Delhi", Channel::ModernTrade, OutletType::Supermarket, "DSR2", "2024-01-15", 125_000.0, false, "+91 11 2345 6791", &["SKU1", "SKU2", "SKU3", "SKU4", "SKU5", "SKU6", "SKU7", "SKU8"]),
                outlet("O4", "Quick Mart", "22 DLF Phase 2, Gurgaon", Channel::ModernTrade, OutletType::Supermarket, "DSR4", "2024-01-13", 89_000.0, false, "+91 124 456 7890", &["SKU1", "SKU3", "SKU5", "SKU9"]),
                outlet("O5", "Hotel Grand Palace", "99 MG Road, Gurgaon", Channel::Horeca, OutletType::Hotel, "DSR4", "2024-01-10", 67_000.0, false, "+91 124 456 7891", &["SKU9", "SKU10"]),
                outlet("O6", "Singh Traders", "15 Sector 18, Noida", Channel::GeneralTrade, OutletType::Kirana, "DSR5", "2023-12-20", 28_000.0, true, "+91 120 234 5678", &["SKU1", "SKU7"]),
                outlet("O7", "Family Bazaar", "88 Mahatma Gandhi Road, Bangalore", Channel::ModernTrade, OutletType::Supermarket, "DSR7", "2024-01-15", 156_000.0, false, "+91 80 4567 8901", &["SKU1", "SKU2", "SKU3", "SKU4", "SKU5", "SKU6", "SKU7", "SKU8", "SKU9", "SKU10"]),
                outlet("O8", "Corner Shop", "33 Anna Nagar, Chennai", Channel::GeneralTrade, OutletType::Kirana, "DSR9", "2024-01-11", 19_000.0, false, "+91 44 2345 6789", &["SKU1", "SKU3"]),
            ],
            alerts: vec![
                alert(
                    "AL1",
                    AlertSeverity::Red,
                    "Critical Revenue Drop",
                    "Product Premium Biscuits 200g is −35% vs last month in Territory Central Delhi while the region is +10%. Top outlets: Gupta Provisions (−80%), Singh Traders (−60%).",
                    AlertEntity::Territory,
                    "T1",
                    "2024-01-15T09:30:00Z",
                ),
                alert(
                    "AL2",
                    AlertSeverity::Orange,
                    "Low SKU Penetration",
                    "SKU Coffee 100g is sold in only 12% of outlets versus category average 68%. Consider promotional push in South Delhi.",
                    AlertEntity::Product,
                    "SKU10",
                    "2024-01-15T08:15:00Z",
                ),
                alert(
                    "AL3",
                    AlertSeverity::Orange,
                    "Lapsed Outlets Alert",
                    "8 outlets in Noida territory have no purchases in last 30 days. Follow up required.",
                    AlertEntity::Territory,
                    "T4",
                    "2024-01-14T16:45:00Z",
                ),
                alert(
                    "AL4",
                    AlertSeverity::Green,
                    "Target Achievement",
                    "DSR Neha Gupta has exceeded monthly target by 8% in Gurgaon territory. Revenue: ₹3,45,000.",
                    AlertEntity::Dsr,
                    "DSR4",
                    "2024-01-14T14:20:00Z",
                ),
                alert(
                    "AL5",
                    AlertSeverity::Red,
                    "DSR Inactive",
                    "DSR Kavitha Nair has not logged activity for 3 days in Chennai South territory.",
                    AlertEntity::Dsr,
                    "DSR10",
                    "2024-01-15T07:00:00Z",
                ),
                alert(
                    "AL6",
                    AlertSeverity::Green,
                    "New Outlet Onboarded",
                    "Metro Supermart successfully onboarded with 8 SKUs. First order value: ₹1,25,000.",
                    AlertEntity::Outlet,
                    "O3",
                    "2024-01-13T11:30:00Z",
                ),
            ],
        }
    }
}

fn day(value: &str) -> NaiveDate {
    value.parse().unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn dsr(
    id: &str,
    name: &str,
    phone: &str,
    territory_id: &str,
    outlets: u32,
    revenue: f64,
    target: f64,
    previous_revenue: f64,
    last_active: &str,
) -> Dsr {
    Dsr {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        territory_id: territory_id.to_string(),
        outlets,
        revenue,
        target,
        previous_revenue,
        last_active: day(last_active),
    }
}

#[allow(clippy::too_many_arguments)]
fn outlet(
    id: &str,
    name: &str,
    address: &str,
    channel: Channel,
    outlet_type: OutletType,
    dsr_id: &str,
    last_purchase_date: &str,
    total_revenue: f64,
    is_lapsed: bool,
    contact_phone: &str,
    skus: &[&str],
) -> Outlet {
    Outlet {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        channel,
        outlet_type,
        dsr_id: dsr_id.to_string(),
        last_purchase_date: day(last_purchase_date),
        total_revenue,
        is_lapsed,
        contact_phone: contact_phone.to_string(),
        skus: skus.iter().map(|s| s.to_string()).collect(),
    }
}

fn alert(
    id: &str,
    severity: AlertSeverity,
    title: &str,
    description: &str,
    entity_type: AlertEntity,
    entity_id: &str,
    timestamp: &str,
) -> Alert {
    Alert {
        id: id.to_string(),
        severity,
        title: title.to_string(),
        description: description.to_string(),
        entity_type,
        entity_id: entity_id.to_string(),
        timestamp: timestamp.parse::<DateTime<Utc>>().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shape() {
        assert_eq!(MOCK.regions.len(), 3);
        assert_eq!(MOCK.areas.len(), 5);
        assert_eq!(MOCK.territories.len(), 11);
        assert_eq!(MOCK.dsrs.len(), 10);
        assert_eq!(MOCK.products.len(), 10);
        assert_eq!(MOCK.outlets.len(), 8);
        assert_eq!(MOCK.alerts.len(), 6);
    }

    #[test]
    fn test_references_resolve() {
        for area in &MOCK.areas {
            assert!(MOCK.region(&area.region_id).is_some(), "{}", area.id);
        }
        for territory in &MOCK.territories {
            assert!(MOCK.area(&territory.area_id).is_some(), "{}", territory.id);
        }
        for dsr in &MOCK.dsrs {
            assert!(MOCK.territory(&dsr.territory_id).is_some(), "{}", dsr.id);
        }
        for outlet in &MOCK.outlets {
            assert!(MOCK.dsr(&outlet.dsr_id).is_some(), "{}", outlet.id);
            for sku in &outlet.skus {
                assert!(MOCK.product(sku).is_some(), "{}", sku);
            }
        }
    }

    #[test]
    fn test_dates_parsed() {
        assert_eq!(
            MOCK.dsr("DSR10").map(|d| d.last_active),
            NaiveDate::from_ymd_opt(2024, 1, 12)
        );
        let first = &MOCK.alerts[0];
        assert_eq!(first.timestamp.to_rfc3339(), "2024-01-15T09:30:00+00:00");
    }

    #[test]
    fn test_ancestry() {
        assert_eq!(MOCK.ancestry("T4"), Some(("A2", "R1")));
        assert_eq!(MOCK.ancestry("T11"), Some(("A5", "R3")));
        assert_eq!(MOCK.ancestry("T99"), None);
        assert_eq!(MOCK.entity_name("SKU10"), Some("Coffee 100g"));
    }
}
