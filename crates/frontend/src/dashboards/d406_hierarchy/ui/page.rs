//! Organisation hierarchy with revenue roll-ups.
//!
//! The tree view expands region by region; the level views list every node
//! of one level flat. Selecting a territory scopes the DSR page to it.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{KpiCard, KpiFormat};
use crate::shared::components::table::{format_inr, format_percent};
use crate::shared::components::ui::AchievementBadge;
use crate::shared::filters::use_filters;
use crate::shared::icons::icon;
use crate::shared::scope::use_scope;
use contracts::dashboards::d406_hierarchy::{
    hierarchy_counts, hierarchy_tree, RegionNode, Rollup,
};
use contracts::shared::filters::FilterUpdate;
use contracts::shared::navigation::AppRoute;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HierarchyLevel {
    Tree,
    Regions,
    Areas,
    Territories,
}

impl HierarchyLevel {
    pub fn from_route(route: AppRoute) -> Self {
        match route {
            AppRoute::HierarchyRegions => HierarchyLevel::Regions,
            AppRoute::HierarchyAreas => HierarchyLevel::Areas,
            AppRoute::HierarchyTerritories => HierarchyLevel::Territories,
            _ => HierarchyLevel::Tree,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            HierarchyLevel::Tree => "Hierarchy",
            HierarchyLevel::Regions => "Regions",
            HierarchyLevel::Areas => "Areas",
            HierarchyLevel::Territories => "Territories",
        }
    }

    fn child_label(&self) -> &'static str {
        match self {
            HierarchyLevel::Regions => "Areas",
            HierarchyLevel::Areas => "Territories",
            _ => "DSRs",
        }
    }
}

/// One node of a flat level listing
#[derive(Debug, Clone, PartialEq)]
struct LevelRow {
    id: String,
    name: String,
    parent: Option<String>,
    children: usize,
    rollup: Rollup,
}

fn level_rows(tree: &[RegionNode], level: HierarchyLevel) -> Vec<LevelRow> {
    match level {
        HierarchyLevel::Tree | HierarchyLevel::Regions => tree
            .iter()
            .map(|r| LevelRow {
                id: r.id.clone(),
                name: r.name.clone(),
                parent: None,
                children: r.areas.len(),
                rollup: r.rollup.clone(),
            })
            .collect(),
        HierarchyLevel::Areas => tree
            .iter()
            .flat_map(|r| {
                r.areas.iter().map(move |a| LevelRow {
                    id: a.id.clone(),
                    name: a.name.clone(),
                    parent: Some(r.name.clone()),
                    children: a.territories.len(),
                    rollup: a.rollup.clone(),
                })
            })
            .collect(),
        HierarchyLevel::Territories => tree
            .iter()
            .flat_map(|r| r.areas.iter())
            .flat_map(|a| {
                a.territories.iter().map(move |t| LevelRow {
                    id: t.id.clone(),
                    name: t.name.clone(),
                    parent: Some(a.name.clone()),
                    children: t.dsrs.len(),
                    rollup: t.rollup.clone(),
                })
            })
            .collect(),
    }
}

/// Revenue, target and achievement of one node
#[component]
fn RollupSummary(rollup: Rollup) -> impl IntoView {
    view! {
        <span class="hierarchy__figures">
            <span class="hierarchy__revenue">{format_inr(rollup.revenue)}</span>
            <span class="hierarchy__target">{format!("of {}", format_inr(rollup.target))}</span>
            <AchievementBadge achievement=rollup.achievement() />
        </span>
    }
}

#[component]
fn HierarchyTree(
    #[prop(into)] tree: Signal<Vec<RegionNode>>,
    on_territory: Callback<String>,
) -> impl IntoView {
    let expanded = RwSignal::new(HashSet::<String>::new());
    let seeded = StoredValue::new(false);

    // Regions start expanded on first render
    Effect::new(move |_| {
        if !seeded.get_value() {
            let ids: HashSet<String> = tree.with(|t| t.iter().map(|r| r.id.clone()).collect());
            if !ids.is_empty() {
                expanded.set(ids);
                seeded.set_value(true);
            }
        }
    });

    let toggle = move |id: String| {
        expanded.update(|set| {
            if !set.remove(&id) {
                set.insert(id);
            }
        });
    };
    let is_open = move |id: &str| expanded.with(|set| set.contains(id));

    move || {
        let regions = tree.get();
        if regions.is_empty() {
            return view! { <div class="table__empty">"No hierarchy nodes in view"</div> }.into_any();
        }
        regions
            .into_iter()
            .map(|region| {
                let region_id = region.id.clone();
                let region_open = is_open(&region.id);
                let areas = region_open.then(|| {
                    region
                        .areas
                        .iter()
                        .map(|area| {
                            let area_id = area.id.clone();
                            let area_open = is_open(&area.id);
                            let territories = area_open.then(|| {
                                area.territories
                                    .iter()
                                    .map(|t| {
                                        let tid = t.id.clone();
                                        view! {
                                            <li class="hierarchy__node hierarchy__node--territory">
                                                <button
                                                    class="hierarchy__row"
                                                    title="Show DSRs in this territory"
                                                    on:click=move |_| on_territory.run(tid.clone())
                                                >
                                                    {icon("map-pin")}
                                                    <span class="hierarchy__name">{t.name.clone()}</span>
                                                    <span class="hierarchy__count">{format!("{} DSRs", t.rollup.dsr_count)}</span>
                                                    <RollupSummary rollup=t.rollup.clone() />
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            });
                            view! {
                                <li class="hierarchy__node hierarchy__node--area">
                                    <button class="hierarchy__row" on:click=move |_| toggle(area_id.clone())>
                                        {icon(if area_open { "chevron-down" } else { "chevron-right" })}
                                        <span class="hierarchy__name">{area.name.clone()}</span>
                                        <span class="hierarchy__count">{format!("{} territories", area.territories.len())}</span>
                                        <RollupSummary rollup=area.rollup.clone() />
                                    </button>
                                    <ul class="hierarchy__children">{territories}</ul>
                                </li>
                            }
                        })
                        .collect_view()
                });
                view! {
                    <li class="hierarchy__node hierarchy__node--region">
                        <button class="hierarchy__row" on:click=move |_| toggle(region_id.clone())>
                            {icon(if region_open { "chevron-down" } else { "chevron-right" })}
                            {icon("building")}
                            <span class="hierarchy__name">{region.name.clone()}</span>
                            <span class="hierarchy__count">{format!("{} areas", region.areas.len())}</span>
                            <RollupSummary rollup=region.rollup.clone() />
                        </button>
                        <ul class="hierarchy__children">{areas}</ul>
                    </li>
                }
            })
            .collect_view()
            .into_any()
    }
}

#[component]
fn LevelTable(#[prop(into)] tree: Signal<Vec<RegionNode>>, level: HierarchyLevel) -> impl IntoView {
    let rows = move || tree.with(|t| level_rows(t, level));

    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Name"</TableHeaderCell>
                    <TableHeaderCell>"Parent"</TableHeaderCell>
                    <TableHeaderCell>{level.child_label()}</TableHeaderCell>
                    <TableHeaderCell>"Revenue"</TableHeaderCell>
                    <TableHeaderCell>"Target"</TableHeaderCell>
                    <TableHeaderCell>"Achievement"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || rows()
                    .into_iter()
                    .map(|row| view! {
                        <TableRow>
                            <TableCell>
                                <TableCellLayout>
                                    <div class="table__primary">{row.name.clone()}</div>
                                    <div class="table__secondary">{row.id.clone()}</div>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell>{row.parent.clone().unwrap_or_else(|| "—".to_string())}</TableCell>
                            <TableCell><span class="table__number">{row.children}</span></TableCell>
                            <TableCell><span class="table__number">{format_inr(row.rollup.revenue)}</span></TableCell>
                            <TableCell><span class="table__number">{format_inr(row.rollup.target)}</span></TableCell>
                            <TableCell>
                                <span class="table__number">{format_percent(row.rollup.achievement())}</span>
                                " "
                                <AchievementBadge achievement=row.rollup.achievement() />
                            </TableCell>
                        </TableRow>
                    })
                    .collect_view()}
            </TableBody>
        </Table>
    }
}

#[component]
pub fn HierarchyPage(level: HierarchyLevel) -> impl IntoView {
    let scope = use_scope();
    let filters = use_filters();
    let nav = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let tree = Memo::new(move |_| scope.with(hierarchy_tree));
    let counts = Memo::new(move |_| scope.with(hierarchy_counts));

    let on_territory = Callback::new(move |territory_id: String| {
        log::debug!("drill into territory {}", territory_id);
        filters.set_filter(FilterUpdate::Territory(Some(territory_id)));
        nav.navigate(AppRoute::Dsr);
    });

    let body = match level {
        HierarchyLevel::Tree => view! {
            <ul class="hierarchy">
                <HierarchyTree tree=tree on_territory=on_territory />
            </ul>
        }
        .into_any(),
        _ => view! { <LevelTable tree=tree level=level /> }.into_any(),
    };

    view! {
        <div class="page">
            <PageHeader
                title=level.title()
                subtitle="Revenue and target roll-ups across the sales organisation".to_string()
            />

            <div class="page__content">
                <div class="kpi-grid">
                    <KpiCard
                        title="Regions"
                        icon_name="building"
                        value=Signal::derive(move || Some(counts.get().regions as f64))
                        format=KpiFormat::Number
                    />
                    <KpiCard
                        title="Areas"
                        icon_name="map"
                        value=Signal::derive(move || Some(counts.get().areas as f64))
                        format=KpiFormat::Number
                    />
                    <KpiCard
                        title="Territories"
                        icon_name="map-pin"
                        value=Signal::derive(move || Some(counts.get().territories as f64))
                        format=KpiFormat::Number
                    />
                    <KpiCard
                        title="DSRs"
                        icon_name="users"
                        value=Signal::derive(move || Some(counts.get().dsrs as f64))
                        format=KpiFormat::Number
                    />
                </div>

                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">{level.title()}</h3>
                    </div>
                    <div class="card__body">{body}</div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::resolve_scope;
    use contracts::shared::filters::Filters;
    use contracts::shared::mock_data::MOCK;

    #[test]
    fn test_level_rows() {
        let scope = resolve_scope(None, &Filters::default(), &MOCK);
        let tree = hierarchy_tree(&scope);

        let regions = level_rows(&tree, HierarchyLevel::Regions);
        assert_eq!(regions.len(), 3);
        assert!(regions.iter().all(|r| r.parent.is_none()));

        let territories = level_rows(&tree, HierarchyLevel::Territories);
        assert_eq!(territories.len(), scope.territories.len());
        let pune = territories.iter().find(|t| t.name == "Pune").unwrap();
        assert_eq!(pune.children, 0);
        assert_eq!(pune.rollup.achievement(), None);
    }

    #[test]
    fn test_level_from_route() {
        assert_eq!(HierarchyLevel::from_route(AppRoute::HierarchyAreas), HierarchyLevel::Areas);
        assert_eq!(HierarchyLevel::from_route(AppRoute::Hierarchy), HierarchyLevel::Tree);
    }
}
