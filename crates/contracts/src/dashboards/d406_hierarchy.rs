//! Region -> Area -> Territory tree with revenue roll-ups.
//!
//! Built from a resolved scope, so nodes without any DSR in view are still
//! listed when their territory is in scope; their totals are zero.

use super::d400_scope::DataScope;
use crate::domain::a002_dsr::Dsr;
use crate::shared::math::percent_of;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rollup {
    pub revenue: f64,
    pub target: f64,
    pub dsr_count: usize,
}

impl Rollup {
    fn from_dsrs<'a>(dsrs: impl IntoIterator<Item = &'a Dsr>) -> Self {
        dsrs.into_iter().fold(
            Rollup {
                revenue: 0.0,
                target: 0.0,
                dsr_count: 0,
            },
            |acc, d| Rollup {
                revenue: acc.revenue + d.revenue,
                target: acc.target + d.target,
                dsr_count: acc.dsr_count + 1,
            },
        )
    }

    fn sum<'a>(parts: impl IntoIterator<Item = &'a Rollup>) -> Self {
        parts.into_iter().fold(
            Rollup {
                revenue: 0.0,
                target: 0.0,
                dsr_count: 0,
            },
            |acc, r| Rollup {
                revenue: acc.revenue + r.revenue,
                target: acc.target + r.target,
                dsr_count: acc.dsr_count + r.dsr_count,
            },
        )
    }

    pub fn achievement(&self) -> Option<i64> {
        percent_of(self.revenue, self.target)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerritoryNode {
    pub id: String,
    pub name: String,
    pub dsrs: Vec<Dsr>,
    pub rollup: Rollup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaNode {
    pub id: String,
    pub name: String,
    pub territories: Vec<TerritoryNode>,
    pub rollup: Rollup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionNode {
    pub id: String,
    pub name: String,
    pub areas: Vec<AreaNode>,
    pub rollup: Rollup,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchyCounts {
    pub regions: usize,
    pub areas: usize,
    pub territories: usize,
    pub dsrs: usize,
}

/// One row of the regional performance table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionPerformance {
    pub id: String,
    pub name: String,
    pub revenue: f64,
    pub target: f64,
    pub achievement: Option<i64>,
    /// Share of the revenue of all regions in view
    pub share: Option<i64>,
}

pub fn hierarchy_tree(scope: &DataScope) -> Vec<RegionNode> {
    scope
        .regions
        .iter()
        .map(|region| {
            let areas: Vec<AreaNode> = scope
                .areas
                .iter()
                .filter(|a| a.region_id == region.id)
                .map(|area| {
                    let territories: Vec<TerritoryNode> = scope
                        .territories
                        .iter()
                        .filter(|t| t.area_id == area.id)
                        .map(|territory| {
                            let dsrs: Vec<Dsr> = scope
                                .dsrs
                                .iter()
                                .filter(|d| d.territory_id == territory.id)
                                .map(|d| (*d).clone())
                                .collect();
                            TerritoryNode {
                                id: territory.id.clone(),
                                name: territory.name.clone(),
                                rollup: Rollup::from_dsrs(&dsrs),
                                dsrs,
                            }
                        })
                        .collect();
                    AreaNode {
                        id: area.id.clone(),
                        name: area.name.clone(),
                        rollup: Rollup::sum(territories.iter().map(|t| &t.rollup)),
                        territories,
                    }
                })
                .collect();
            RegionNode {
                id: region.id.clone(),
                name: region.name.clone(),
                rollup: Rollup::sum(areas.iter().map(|a| &a.rollup)),
                areas,
            }
        })
        .collect()
}

pub fn hierarchy_counts(scope: &DataScope) -> HierarchyCounts {
    HierarchyCounts {
        regions: scope.regions.len(),
        areas: scope.areas.len(),
        territories: scope.territories.len(),
        dsrs: scope.dsrs.len(),
    }
}

pub fn regional_performance(tree: &[RegionNode]) -> Vec<RegionPerformance> {
    let total: f64 = tree.iter().map(|r| r.rollup.revenue).sum();
    tree.iter()
        .map(|region| RegionPerformance {
            id: region.id.clone(),
            name: region.name.clone(),
            revenue: region.rollup.revenue,
            target: region.rollup.target,
            achievement: region.rollup.achievement(),
            share: percent_of(region.rollup.revenue, total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_scope::resolve_scope;
    use crate::shared::filters::Filters;
    use crate::shared::mock_data::MOCK;
    use crate::system::roles::Role;
    use crate::system::session::Session;

    #[test]
    fn test_full_tree_shape() {
        let scope = resolve_scope(None, &Filters::default(), &MOCK);
        let tree = hierarchy_tree(&scope);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree[0].areas.len(), 2);
        assert_eq!(tree[0].areas[0].territories.len(), 3);
        assert_eq!(tree[0].areas[0].territories[0].dsrs.len(), 2);
        // Pune has no DSRs
        let pune = &tree[2].areas[0].territories[1];
        assert_eq!(pune.name, "Pune");
        assert_eq!(pune.rollup.dsr_count, 0);
        assert_eq!(pune.rollup.achievement(), None);
    }

    #[test]
    fn test_rollups_add_up() {
        let scope = resolve_scope(None, &Filters::default(), &MOCK);
        let tree = hierarchy_tree(&scope);
        let north = &tree[0];
        // DSR1..DSR6
        assert_eq!(north.rollup.revenue, 1_511_500.0);
        assert_eq!(north.rollup.dsr_count, 6);
        let area_sum: f64 = north.areas.iter().map(|a| a.rollup.revenue).sum();
        assert_eq!(area_sum, north.rollup.revenue);
        let grand: f64 = tree.iter().map(|r| r.rollup.revenue).sum();
        assert_eq!(grand, scope.revenue());
    }

    #[test]
    fn test_counts_follow_session() {
        let session = Session::for_role(Role::Asm, "");
        let scope = resolve_scope(Some(&session), &Filters::default(), &MOCK);
        assert_eq!(
            hierarchy_counts(&scope),
            HierarchyCounts {
                regions: 1,
                areas: 1,
                territories: 3,
                dsrs: 4,
            }
        );
    }

    #[test]
    fn test_regional_performance() {
        let scope = resolve_scope(None, &Filters::default(), &MOCK);
        let rows = regional_performance(&hierarchy_tree(&scope));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].revenue, 0.0);
        assert_eq!(rows[2].achievement, None);
        assert_eq!(rows[2].share, Some(0));
        assert!(regional_performance(&[]).is_empty());
    }
}
