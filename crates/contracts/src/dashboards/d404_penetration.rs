use super::d400_scope::DataScope;
use crate::shared::config::AppConfig;
use crate::shared::math::percent_of;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenetrationCell {
    pub outlet_id: String,
    pub outlet_name: String,
    pub sku_id: String,
    pub sku_name: String,
    pub has_sku: bool,
    /// Outlet's last purchase, only where the SKU is stocked
    pub last_purchase: Option<NaiveDate>,
}

/// Outlet x SKU grid, rows in outlet order, columns in product order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenetrationMatrix {
    pub outlets: Vec<(String, String)>,
    pub skus: Vec<(String, String)>,
    pub cells: Vec<PenetrationCell>,
    /// Stocked cells over all cells, 0 for an empty grid
    pub overall: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuPenetration {
    pub sku_id: String,
    pub sku_name: String,
    pub outlets_stocking: usize,
    pub outlets_total: usize,
    pub percent: Option<i64>,
}

/// First outlets x first products in view
pub fn penetration_matrix(scope: &DataScope) -> PenetrationMatrix {
    let outlets: Vec<_> = scope.outlets.iter().take(AppConfig::PENETRATION_GRID).collect();
    let products: Vec<_> = scope.products.iter().take(AppConfig::PENETRATION_GRID).collect();

    let cells: Vec<PenetrationCell> = outlets
        .iter()
        .flat_map(|outlet| {
            products.iter().map(move |product| {
                let has_sku = outlet.stocks(&product.id);
                PenetrationCell {
                    outlet_id: outlet.id.clone(),
                    outlet_name: outlet.name.clone(),
                    sku_id: product.id.clone(),
                    sku_name: product.name.clone(),
                    has_sku,
                    last_purchase: has_sku.then_some(outlet.last_purchase_date),
                }
            })
        })
        .collect();

    let stocked = cells.iter().filter(|c| c.has_sku).count();

    PenetrationMatrix {
        outlets: outlets.iter().map(|o| (o.id.clone(), o.name.clone())).collect(),
        skus: products.iter().map(|p| (p.id.clone(), p.name.clone())).collect(),
        overall: percent_of(stocked as f64, cells.len() as f64).unwrap_or(0),
        cells,
    }
}

impl PenetrationMatrix {
    pub fn cell(&self, outlet_id: &str, sku_id: &str) -> Option<&PenetrationCell> {
        self.cells
            .iter()
            .find(|c| c.outlet_id == outlet_id && c.sku_id == sku_id)
    }

    pub fn stocked_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.has_sku).count()
    }
}

/// Per product, across every outlet in view
pub fn sku_penetration(scope: &DataScope) -> Vec<SkuPenetration> {
    let outlets_total = scope.outlets.len();
    scope
        .products
        .iter()
        .map(|product| {
            let outlets_stocking = scope
                .outlets
                .iter()
                .filter(|o| o.stocks(&product.id))
                .count();
            SkuPenetration {
                sku_id: product.id.clone(),
                sku_name: product.name.clone(),
                outlets_stocking,
                outlets_total,
                percent: percent_of(outlets_stocking as f64, outlets_total as f64),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_scope::resolve_scope;
    use crate::shared::filters::{FilterUpdate, Filters};
    use crate::shared::mock_data::MOCK;

    #[test]
    fn test_full_dataset_grid() {
        let scope = resolve_scope(None, &Filters::default(), &MOCK);
        let matrix = penetration_matrix(&scope);
        assert_eq!(matrix.outlets.len(), 6);
        assert_eq!(matrix.skus.len(), 6);
        assert_eq!(matrix.cells.len(), 36);
        // O1 3, O2 2, O3 6, O4 3, O5 0, O6 1
        assert_eq!(matrix.stocked_cells(), 15);
        assert_eq!(matrix.overall, 42);
    }

    #[test]
    fn test_last_purchase_only_when_stocked() {
        let scope = resolve_scope(None, &Filters::default(), &MOCK);
        let matrix = penetration_matrix(&scope);
        let stocked = matrix.cell("O1", "SKU1").unwrap();
        assert!(stocked.has_sku);
        assert_eq!(stocked.last_purchase, NaiveDate::from_ymd_opt(2024, 1, 14));
        let missing = matrix.cell("O1", "SKU2").unwrap();
        assert!(!missing.has_sku);
        assert_eq!(missing.last_purchase, None);
    }

    #[test]
    fn test_empty_grid_is_zero() {
        let mut filters = Filters::default();
        filters.apply(FilterUpdate::Territory(Some("T11".into())));
        let scope = resolve_scope(None, &filters, &MOCK);
        let matrix = penetration_matrix(&scope);
        assert!(matrix.cells.is_empty());
        assert_eq!(matrix.overall, 0);
    }

    #[test]
    fn test_sku_penetration() {
        let scope = resolve_scope(None, &Filters::default(), &MOCK);
        let rows = sku_penetration(&scope);
        let sku1 = rows.iter().find(|r| r.sku_id == "SKU1").unwrap();
        assert_eq!(sku1.outlets_stocking, 7);
        assert_eq!(sku1.percent, Some(88));
        let sku10 = rows.iter().find(|r| r.sku_id == "SKU10").unwrap();
        assert_eq!(sku10.percent, Some(25));
    }
}
