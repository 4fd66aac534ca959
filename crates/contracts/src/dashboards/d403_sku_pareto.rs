use super::d400_scope::DataScope;
use crate::domain::a003_product::Product;
use crate::shared::math::round1;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParetoEntry {
    pub id: String,
    pub name: String,
    pub revenue: f64,
    /// Percent of total, one decimal
    pub share: f64,
    /// Running sum of the unrounded shares, rounded to one decimal
    pub cumulative_share: f64,
}

/// Revenue attributed to each product in view. Each outlet's revenue is split
/// evenly across every SKU it stocks.
pub fn sku_revenue<'a>(scope: &DataScope<'a>) -> Vec<(&'a Product, f64)> {
    scope
        .products
        .iter()
        .map(|product| {
            let revenue = scope
                .outlets
                .iter()
                .filter(|o| o.stocks(&product.id))
                .map(|o| o.total_revenue / o.skus.len() as f64)
                .sum::<f64>();
            (*product, revenue.round())
        })
        .collect()
}

/// Products by attributed revenue, highest first. Ties keep catalogue order.
/// Zero total revenue yields zero shares.
pub fn sku_pareto(scope: &DataScope) -> Vec<ParetoEntry> {
    let mut revenue = sku_revenue(scope);
    revenue.sort_by(|a, b| b.1.total_cmp(&a.1));
    pareto_from(revenue.into_iter().map(|(p, r)| (p.id.clone(), p.name.clone(), r)))
}

/// Shares for an already ordered list of `(id, name, revenue)`
pub fn pareto_from(rows: impl IntoIterator<Item = (String, String, f64)>) -> Vec<ParetoEntry> {
    let rows: Vec<(String, String, f64)> = rows.into_iter().collect();
    let total: f64 = rows.iter().map(|(_, _, r)| r).sum();
    let mut cumulative = 0.0;

    rows.into_iter()
        .map(|(id, name, revenue)| {
            let share = if total > 0.0 {
                revenue / total * 100.0
            } else {
                0.0
            };
            cumulative += share;
            ParetoEntry {
                id,
                name,
                revenue,
                share: round1(share),
                cumulative_share: round1(cumulative),
            }
        })
        .collect()
}

/// Combined share of the first `n` entries
pub fn top_share(entries: &[ParetoEntry], n: usize) -> f64 {
    round1(entries.iter().take(n).map(|e| e.share).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_scope::resolve_scope;
    use crate::shared::filters::{FilterUpdate, Filters};
    use crate::shared::mock_data::MOCK;

    #[test]
    fn test_cumulative_ends_at_hundred() {
        let scope = resolve_scope(None, &Filters::default(), &MOCK);
        let pareto = sku_pareto(&scope);
        assert_eq!(pareto.len(), 10);
        let last = pareto.last().unwrap();
        assert!((last.cumulative_share - 100.0).abs() < 0.05);
        for pair in pareto.windows(2) {
            assert!(pair[0].revenue >= pair[1].revenue);
            assert!(pair[0].cumulative_share <= pair[1].cumulative_share);
        }
    }

    #[test]
    fn test_sku1_leads_full_dataset() {
        let scope = resolve_scope(None, &Filters::default(), &MOCK);
        assert_eq!(sku_pareto(&scope)[0].id, "SKU1");
    }

    #[test]
    fn test_attribution_splits_outlet_revenue() {
        let mut filters = Filters::default();
        filters.apply(FilterUpdate::Dsr(Some("DSR1".into())));
        let scope = resolve_scope(None, &filters, &MOCK);
        let revenue = sku_revenue(&scope);
        // O1 45000 over 4 SKUs, O2 32000 over 2 SKUs
        let sku1 = revenue.iter().find(|(p, _)| p.id == "SKU1").map(|(_, r)| *r);
        let sku2 = revenue.iter().find(|(p, _)| p.id == "SKU2").map(|(_, r)| *r);
        assert_eq!(sku1, Some(27_250.0));
        assert_eq!(sku2, Some(16_000.0));
    }

    #[test]
    fn test_zero_total_gives_zero_shares() {
        let entries = pareto_from(vec![
            ("A".to_string(), "A".to_string(), 0.0),
            ("B".to_string(), "B".to_string(), 0.0),
        ]);
        assert!(entries.iter().all(|e| e.share == 0.0 && e.cumulative_share == 0.0));
        assert!(pareto_from(Vec::new()).is_empty());
    }

    #[test]
    fn test_rounding() {
        let entries = pareto_from(vec![
            ("A".to_string(), "A".to_string(), 1.0),
            ("B".to_string(), "B".to_string(), 1.0),
            ("C".to_string(), "C".to_string(), 1.0),
        ]);
        assert_eq!(entries[0].share, 33.3);
        assert_eq!(entries[1].cumulative_share, 66.7);
        assert_eq!(entries[2].cumulative_share, 100.0);
        assert_eq!(top_share(&entries, 2), 66.6);
    }
}
