//! Records in view for a signed-in user and the current filters.
//!
//! The session narrows the hierarchy to the user's own nodes; the filters
//! narrow it further. A filter outside the session scope yields an empty
//! scope, never a wider one.

use crate::domain::a001_hierarchy::{Area, Region, Territory};
use crate::domain::a002_dsr::Dsr;
use crate::domain::a003_product::Product;
use crate::domain::a004_outlet::Outlet;
use crate::domain::a005_alert::{Alert, AlertEntity};
use crate::shared::filters::Filters;
use crate::shared::mock_data::Dataset;
use crate::system::session::Session;

#[derive(Debug, Clone)]
pub struct DataScope<'a> {
    pub data: &'a Dataset,
    pub regions: Vec<&'a Region>,
    pub areas: Vec<&'a Area>,
    pub territories: Vec<&'a Territory>,
    pub dsrs: Vec<&'a Dsr>,
    pub outlets: Vec<&'a Outlet>,
    pub products: Vec<&'a Product>,
}

/// Hierarchy constraints from one source (session or filters)
#[derive(Debug, Clone, Copy, Default)]
struct Bounds<'s> {
    region_id: Option<&'s str>,
    area_id: Option<&'s str>,
    territory_id: Option<&'s str>,
    dsr_id: Option<&'s str>,
}

impl<'s> Bounds<'s> {
    fn from_session(session: Option<&'s Session>) -> Self {
        match session {
            Some(s) => Self {
                region_id: s.region_id.as_deref(),
                area_id: s.area_id.as_deref(),
                territory_id: s.territory_id.as_deref(),
                dsr_id: s.dsr_id.as_deref(),
            },
            None => Self::default(),
        }
    }

    fn from_filters(filters: &'s Filters) -> Self {
        Self {
            region_id: filters.region_id.as_deref(),
            area_id: filters.area_id.as_deref(),
            territory_id: filters.territory_id.as_deref(),
            dsr_id: filters.dsr_id.as_deref(),
        }
    }

    fn admits_territory(&self, data: &Dataset, territory: &Territory) -> bool {
        let Some((area_id, region_id)) = data.ancestry(&territory.id) else {
            return false;
        };
        self.region_id.map_or(true, |id| id == region_id)
            && self.area_id.map_or(true, |id| id == area_id)
            && self.territory_id.map_or(true, |id| id == territory.id)
    }

    fn admits_dsr(&self, dsr: &Dsr) -> bool {
        self.dsr_id.map_or(true, |id| id == dsr.id)
    }
}

/// Session scope intersected with the filter scope
pub fn resolve_scope<'a>(
    session: Option<&Session>,
    filters: &Filters,
    data: &'a Dataset,
) -> DataScope<'a> {
    let session_bounds = Bounds::from_session(session);
    let filter_bounds = Bounds::from_filters(filters);

    let territories: Vec<&Territory> = data
        .territories
        .iter()
        .filter(|t| session_bounds.admits_territory(data, t) && filter_bounds.admits_territory(data, t))
        .collect();

    let areas: Vec<&Area> = data
        .areas
        .iter()
        .filter(|a| territories.iter().any(|t| t.area_id == a.id))
        .collect();

    let regions: Vec<&Region> = data
        .regions
        .iter()
        .filter(|r| areas.iter().any(|a| a.region_id == r.id))
        .collect();

    let dsrs: Vec<&Dsr> = data
        .dsrs
        .iter()
        .filter(|d| territories.iter().any(|t| t.id == d.territory_id))
        .filter(|d| session_bounds.admits_dsr(d) && filter_bounds.admits_dsr(d))
        .collect();

    let outlets: Vec<&Outlet> = data
        .outlets
        .iter()
        .filter(|o| dsrs.iter().any(|d| d.id == o.dsr_id))
        .filter(|o| filters.channel.map_or(true, |c| c == o.channel))
        .collect();

    let products: Vec<&Product> = data
        .products
        .iter()
        .filter(|p| filters.sku_ids.is_empty() || filters.sku_ids.iter().any(|id| *id == p.id))
        .collect();

    DataScope {
        data,
        regions,
        areas,
        territories,
        dsrs,
        outlets,
        products,
    }
}

/// Regions the session may pick in the filter bar
pub fn selectable_regions<'a>(session: Option<&Session>, data: &'a Dataset) -> Vec<&'a Region> {
    resolve_scope(session, &Filters::default(), data).regions
}

impl<'a> DataScope<'a> {
    pub fn revenue(&self) -> f64 {
        self.dsrs.iter().map(|d| d.revenue).sum()
    }

    pub fn target(&self) -> f64 {
        self.dsrs.iter().map(|d| d.target).sum()
    }

    pub fn previous_revenue(&self) -> f64 {
        self.dsrs.iter().map(|d| d.previous_revenue).sum()
    }

    pub fn contains_dsr(&self, id: &str) -> bool {
        self.dsrs.iter().any(|d| d.id == id)
    }

    /// Alerts about records in view, newest first
    pub fn alerts(&self) -> Vec<&'a Alert> {
        let mut alerts: Vec<&Alert> = self
            .data
            .alerts
            .iter()
            .filter(|alert| self.covers(alert.entity_type, &alert.entity_id))
            .collect();
        alerts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        alerts
    }

    fn covers(&self, entity: AlertEntity, id: &str) -> bool {
        match entity {
            AlertEntity::Region => self.regions.iter().any(|r| r.id == id),
            AlertEntity::Area => self.areas.iter().any(|a| a.id == id),
            AlertEntity::Territory => self.territories.iter().any(|t| t.id == id),
            AlertEntity::Dsr => self.contains_dsr(id),
            AlertEntity::Outlet => self.outlets.iter().any(|o| o.id == id),
            AlertEntity::Product => self.products.iter().any(|p| p.id == id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Channel;
    use crate::shared::filters::FilterUpdate;
    use crate::shared::mock_data::MOCK;
    use crate::system::roles::Role;

    fn dsr_ids(scope: &DataScope) -> Vec<String> {
        scope.dsrs.iter().map(|d| d.id.clone()).collect()
    }

    fn outlet_ids(scope: &DataScope) -> Vec<String> {
        scope.outlets.iter().map(|o| o.id.clone()).collect()
    }

    #[test]
    fn test_no_session_sees_everything() {
        let scope = resolve_scope(None, &Filters::default(), &MOCK);
        assert_eq!(scope.regions.len(), 3);
        assert_eq!(scope.territories.len(), 11);
        assert_eq!(scope.dsrs.len(), 10);
        assert_eq!(scope.outlets.len(), 8);
        assert_eq!(scope.products.len(), 10);
    }

    #[test]
    fn test_rsm_sees_own_region() {
        let session = Session::for_role(Role::Rsm, "");
        let scope = resolve_scope(Some(&session), &Filters::default(), &MOCK);
        assert_eq!(scope.regions.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["R1"]);
        assert_eq!(
            dsr_ids(&scope),
            vec!["DSR1", "DSR2", "DSR3", "DSR4", "DSR5", "DSR6"]
        );
    }

    #[test]
    fn test_dsr_sees_own_outlets() {
        let session = Session::for_role(Role::Dsr, "");
        let scope = resolve_scope(Some(&session), &Filters::default(), &MOCK);
        assert_eq!(dsr_ids(&scope), vec!["DSR1"]);
        assert_eq!(outlet_ids(&scope), vec!["O1", "O2"]);
    }

    #[test]
    fn test_filter_outside_session_is_empty() {
        let session = Session::for_role(Role::Asm, "");
        let mut filters = Filters::default();
        filters.apply(FilterUpdate::Region(Some("R2".into())));
        let scope = resolve_scope(Some(&session), &filters, &MOCK);
        assert!(scope.dsrs.is_empty());
        assert!(scope.regions.is_empty());
        assert_eq!(scope.revenue(), 0.0);
    }

    #[test]
    fn test_channel_and_sku_filters() {
        let mut filters = Filters::default();
        filters.apply(FilterUpdate::Channel(Some(Channel::ModernTrade)));
        filters.apply(FilterUpdate::SkuIds(vec!["SKU9".into(), "SKU10".into()]));
        let scope = resolve_scope(None, &filters, &MOCK);
        assert_eq!(outlet_ids(&scope), vec!["O3", "O4", "O7"]);
        assert_eq!(scope.products.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["SKU9", "SKU10"]);
        assert_eq!(scope.dsrs.len(), 10);
    }

    #[test]
    fn test_alerts_follow_scope() {
        let session = Session::for_role(Role::Dsr, "");
        let scope = resolve_scope(Some(&session), &Filters::default(), &MOCK);
        let alerts: Vec<&str> = scope.alerts().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(alerts, vec!["AL1", "AL2"]);

        let all = resolve_scope(None, &Filters::default(), &MOCK).alerts();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].id, "AL1");
        assert_eq!(all[5].id, "AL6");
    }

    #[test]
    fn test_selectable_regions() {
        let asm = Session::for_role(Role::Asm, "");
        let regions = selectable_regions(Some(&asm), &MOCK);
        assert_eq!(regions.len(), 1);
        assert_eq!(selectable_regions(None, &MOCK).len(), 3);
    }
}
