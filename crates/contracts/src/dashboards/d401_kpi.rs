use super::d400_scope::DataScope;
use super::d403_sku_pareto::sku_revenue;
use crate::shared::math::{percent_of, trend_percent};
use serde::{Deserialize, Serialize};

/// Headline figures of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub revenue: f64,
    pub target: f64,
    /// `None` without a positive target
    pub attainment: Option<i64>,
    pub previous_revenue: f64,
    /// `None` without previous-period revenue
    pub revenue_trend: Option<i64>,
    pub avg_selling_price: Option<f64>,
    pub penetration: Option<i64>,
    pub outlets_total: usize,
    pub outlets_active: usize,
    pub outlets_lapsed: usize,
}

pub fn kpi_summary(scope: &DataScope) -> KpiSummary {
    let revenue = scope.revenue();
    let target = scope.target();
    let previous_revenue = scope.previous_revenue();
    let outlets_lapsed = scope.outlets.iter().filter(|o| o.is_lapsed).count();

    KpiSummary {
        revenue,
        target,
        attainment: percent_of(revenue, target),
        previous_revenue,
        revenue_trend: trend_percent(revenue, previous_revenue),
        avg_selling_price: avg_selling_price(scope),
        penetration: penetration_percent(scope),
        outlets_total: scope.outlets.len(),
        outlets_active: scope.outlets.len() - outlets_lapsed,
        outlets_lapsed,
    }
}

/// Price of the scoped catalogue weighted by attributed SKU revenue. Falls
/// back to the plain mean when no revenue is attributed.
pub fn avg_selling_price(scope: &DataScope) -> Option<f64> {
    if scope.products.is_empty() {
        return None;
    }
    let revenue = sku_revenue(scope);
    let weight: f64 = revenue.iter().map(|(_, r)| r).sum();
    let value = if weight > 0.0 {
        revenue
            .iter()
            .map(|(product, r)| product.price * r)
            .sum::<f64>()
            / weight
    } else {
        scope.products.iter().map(|p| p.price).sum::<f64>() / scope.products.len() as f64
    };
    Some(value.round())
}

/// Share of outlet x SKU pairs in view where the outlet stocks the SKU
pub fn penetration_percent(scope: &DataScope) -> Option<i64> {
    let cells = scope.outlets.len() * scope.products.len();
    let stocked = scope
        .outlets
        .iter()
        .map(|o| scope.products.iter().filter(|p| o.stocks(&p.id)).count())
        .sum::<usize>();
    percent_of(stocked as f64, cells as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_scope::resolve_scope;
    use crate::shared::filters::{FilterUpdate, Filters};
    use crate::shared::mock_data::MOCK;
    use crate::system::roles::Role;
    use crate::system::session::Session;

    #[test]
    fn test_dsr_kpis() {
        let session = Session::for_role(Role::Dsr, "");
        let scope = resolve_scope(Some(&session), &Filters::default(), &MOCK);
        let kpi = kpi_summary(&scope);
        assert_eq!(kpi.revenue, 234_500.0);
        assert_eq!(kpi.target, 250_000.0);
        assert_eq!(kpi.attainment, Some(94));
        assert_eq!(kpi.outlets_total, 2);
        assert_eq!(kpi.outlets_lapsed, 1);
        assert_eq!(kpi.outlets_active, 1);
        // 212000 -> 234500
        assert_eq!(kpi.revenue_trend, Some(11));
    }

    #[test]
    fn test_empty_scope_has_no_ratios() {
        let session = Session::for_role(Role::Tsm, "");
        let mut filters = Filters::default();
        filters.apply(FilterUpdate::Territory(Some("T9".into())));
        let scope = resolve_scope(Some(&session), &filters, &MOCK);
        let kpi = kpi_summary(&scope);
        assert_eq!(kpi.revenue, 0.0);
        assert_eq!(kpi.attainment, None);
        assert_eq!(kpi.revenue_trend, None);
        assert_eq!(kpi.penetration, None);
        assert_eq!(kpi.outlets_total, 0);
    }

    #[test]
    fn test_penetration() {
        let session = Session::for_role(Role::Dsr, "");
        let scope = resolve_scope(Some(&session), &Filters::default(), &MOCK);
        // O1 stocks 4 of 10, O2 stocks 2 of 10
        assert_eq!(penetration_percent(&scope), Some(30));
    }

    #[test]
    fn test_avg_selling_price_falls_back_to_mean() {
        let mut filters = Filters::default();
        filters.apply(FilterUpdate::SkuIds(vec!["SKU3".into(), "SKU10".into()]));
        filters.apply(FilterUpdate::Territory(Some("T11".into())));
        let scope = resolve_scope(None, &filters, &MOCK);
        assert_eq!(avg_selling_price(&scope), Some(80.0));
    }
}
