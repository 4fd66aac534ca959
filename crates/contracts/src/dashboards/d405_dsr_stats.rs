use super::d400_scope::DataScope;
use crate::domain::a002_dsr::Dsr;
use crate::shared::math::percent_of;
use crate::shared::sorting::{sort_list, SortState};
use serde::{Deserialize, Serialize};

/// Summary strip of the DSR performance page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DsrStats {
    pub total: usize,
    pub total_revenue: f64,
    pub total_target: f64,
    pub achievement: Option<i64>,
    pub on_target: usize,
    pub below_target: usize,
    pub on_target_share: Option<i64>,
}

pub fn dsr_stats<'a>(dsrs: impl IntoIterator<Item = &'a Dsr>) -> DsrStats {
    let mut stats = DsrStats {
        total: 0,
        total_revenue: 0.0,
        total_target: 0.0,
        achievement: None,
        on_target: 0,
        below_target: 0,
        on_target_share: None,
    };

    for dsr in dsrs {
        stats.total += 1;
        stats.total_revenue += dsr.revenue;
        stats.total_target += dsr.target;
        if dsr.is_on_target() {
            stats.on_target += 1;
        } else {
            stats.below_target += 1;
        }
    }

    stats.achievement = percent_of(stats.total_revenue, stats.total_target);
    stats.on_target_share = percent_of(stats.on_target as f64, stats.total as f64);
    stats
}

/// DSRs in view matching `query`, ordered by `sort`
pub fn search_dsrs<'a>(scope: &DataScope<'a>, query: &str, sort: SortState) -> Vec<&'a Dsr> {
    let mut rows: Vec<&Dsr> = scope
        .dsrs
        .iter()
        .copied()
        .filter(|d| d.matches(query))
        .collect();
    sort_list(&mut rows, sort);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_scope::resolve_scope;
    use crate::shared::filters::Filters;
    use crate::shared::mock_data::MOCK;
    use crate::shared::sorting::{SortField, SortOrder};
    use crate::system::roles::Role;
    use crate::system::session::Session;

    #[test]
    fn test_stats_for_territory() {
        let session = Session::for_role(Role::Tsm, "");
        let scope = resolve_scope(Some(&session), &Filters::default(), &MOCK);
        let stats = dsr_stats(scope.dsrs.iter().copied());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.total_revenue, 523_500.0);
        assert_eq!(stats.total_target, 525_000.0);
        assert_eq!(stats.achievement, Some(100));
        assert_eq!(stats.on_target, 1);
        assert_eq!(stats.below_target, 1);
        assert_eq!(stats.on_target_share, Some(50));
    }

    #[test]
    fn test_empty_stats() {
        let stats = dsr_stats(std::iter::empty());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.achievement, None);
        assert_eq!(stats.on_target_share, None);
    }

    #[test]
    fn test_full_dataset_on_target() {
        let stats = dsr_stats(MOCK.dsrs.iter());
        // DSR2, DSR4, DSR6, DSR7
        assert_eq!(stats.on_target, 4);
        assert_eq!(stats.below_target, 6);
    }

    #[test]
    fn test_search_and_sort() {
        let scope = resolve_scope(None, &Filters::default(), &MOCK);
        let sort = SortState {
            field: SortField::Revenue,
            order: SortOrder::Desc,
        };
        let all: Vec<&str> = search_dsrs(&scope, "", sort)
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(all.len(), 10);
        assert_eq!(all[0], "DSR4");

        let hits: Vec<&str> = search_dsrs(&scope, "t1", sort)
            .iter()
            .map(|d| d.id.as_str())
            .collect();
        assert_eq!(hits, vec!["DSR2", "DSR1"]);
    }
}
