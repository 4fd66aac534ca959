use super::table::DsrTable;
use crate::shared::components::filter_panel::GlobalFilters;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{KpiCard, KpiFormat};
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::scope::use_scope;
use contracts::dashboards::d405_dsr_stats::{dsr_stats, search_dsrs};
use contracts::domain::a002_dsr::Dsr;
use contracts::shared::sorting::SortState;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DsrPerformancePage() -> impl IntoView {
    let scope = use_scope();
    let search = RwSignal::new(String::new());
    let (export_error, set_export_error) = signal(None::<String>);

    let stats = Memo::new(move |_| scope.with(|s| dsr_stats(s.dsrs.iter().copied())));

    let matching = Signal::derive(move || {
        let query = search.get();
        scope.with(|s| {
            search_dsrs(s, &query, SortState::default())
                .into_iter()
                .cloned()
                .collect::<Vec<Dsr>>()
        })
    });

    let table_title = Signal::derive(move || {
        Some(if search.get().trim().is_empty() {
            "DSR List".to_string()
        } else {
            format!("DSR List ({} results)", matching.with(|m| m.len()))
        })
    });

    let on_export = move |_| {
        let rows = matching.get_untracked();
        match export_to_csv(&rows, "dsr_performance.csv") {
            Ok(()) => {
                log::info!("exported {} DSR rows", rows.len());
                set_export_error.set(None);
            }
            Err(e) => {
                log::warn!("DSR export failed: {}", e);
                set_export_error.set(Some(e));
            }
        }
    };

    view! {
        <div class="page">
            <PageHeader
                title="DSR Performance"
                subtitle="Monitor and analyze Distribution Sales Representative performance".to_string()
            >
                <Button appearance=ButtonAppearance::Secondary on_click=on_export>
                    {icon("file")}
                    "Export Report"
                </Button>
            </PageHeader>

            <div class="page__content">
                <GlobalFilters />

                {move || export_error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <div class="kpi-grid">
                    <KpiCard
                        title="Total DSRs"
                        icon_name="users"
                        value=Signal::derive(move || Some(stats.get().total as f64))
                        format=KpiFormat::Number
                    />
                    <KpiCard
                        title="Total Revenue"
                        icon_name="trending-up"
                        value=Signal::derive(move || Some(stats.get().total_revenue))
                        format=KpiFormat::Currency
                        subtitle=Signal::derive(move || {
                            stats.get().achievement.map(|a| format!("{}% of target", a))
                        })
                    />
                    <KpiCard
                        title="On Target"
                        icon_name="target"
                        value=Signal::derive(move || Some(stats.get().on_target as f64))
                        format=KpiFormat::Number
                        subtitle=Signal::derive(move || {
                            stats.get().on_target_share.map(|p| format!("{}% of DSRs", p))
                        })
                    />
                    <KpiCard
                        title="Below Target"
                        icon_name="alert-triangle"
                        value=Signal::derive(move || Some(stats.get().below_target as f64))
                        format=KpiFormat::Number
                        subtitle=Signal::derive(|| Some("Needs attention".to_string()))
                    />
                </div>

                <div class="page__toolbar">
                    <SearchInput value=search placeholder="Search DSRs by name, phone, or territory..." />
                </div>

                <DsrTable dsrs=matching title=table_title highlight=search />
            </div>
        </div>
    }
}
