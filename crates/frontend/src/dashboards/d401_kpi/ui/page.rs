//! Landing dashboard: headline KPIs, daily trend, SKU contribution, DSR
//! overview and the alerts feed, all within the session and filter scope.

use crate::dashboards::d402_sales_series::ui::SalesChart;
use crate::dashboards::d403_sku_pareto::ui::SkuParetoChart;
use crate::dashboards::d405_dsr_stats::ui::DsrTable;
use crate::shared::components::alerts_feed::AlertsFeed;
use crate::shared::components::filter_panel::GlobalFilters;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{KpiCard, KpiFormat};
use crate::shared::components::table::{format_inr, format_inr_compact};
use crate::shared::icons::icon;
use crate::shared::scope::use_scope;
use crate::system::auth::context::use_auth;
use chrono::Local;
use contracts::dashboards::d401_kpi::kpi_summary;
use contracts::dashboards::d402_sales_series::sales_series;
use contracts::dashboards::d403_sku_pareto::sku_pareto;
use contracts::domain::a002_dsr::Dsr;
use contracts::domain::a005_alert::Alert;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let scope = use_scope();
    let (auth_state, _) = use_auth();
    let last_updated = Local::now().format("%-I:%M %p").to_string();
    let all_alerts_open = RwSignal::new(false);

    let welcome = move || {
        auth_state.with(|a| match &a.session {
            Some(s) => format!("Welcome back, {} • {}", s.name, s.role.label()),
            None => "Welcome back".to_string(),
        })
    };

    let kpis = Memo::new(move |_| scope.with(kpi_summary));
    let series = Memo::new(move |_| {
        let window = scope.window();
        scope.with(|s| sales_series(s, window))
    });
    let pareto = Memo::new(move |_| scope.with(sku_pareto));
    let dsrs = Signal::derive(move || {
        scope.with(|s| s.dsrs.iter().map(|d| (*d).clone()).collect::<Vec<Dsr>>())
    });
    let alerts = Signal::derive(move || {
        scope.with(|s| s.alerts().into_iter().cloned().collect::<Vec<Alert>>())
    });

    view! {
        <div class="page">
            <PageHeader title="Dashboard" subtitle=Signal::derive(move || Some(welcome()))>
                <span class="page__meta">
                    {icon("clock")}
                    {format!("Last updated {}", last_updated)}
                </span>
            </PageHeader>

            <div class="page__content">
                <GlobalFilters />

                <div class="kpi-grid">
                    <KpiCard
                        title="Revenue MTD"
                        icon_name="indian-rupee"
                        value=Signal::derive(move || Some(kpis.get().revenue))
                        format=KpiFormat::Currency
                        trend=Signal::derive(move || kpis.get().revenue_trend)
                        trend_label="vs last month"
                        subtitle=Signal::derive(move || {
                            kpis.get().avg_selling_price.map(|p| format!("ASP {}", format_inr(p)))
                        })
                    />
                    <KpiCard
                        title="Target Achievement"
                        icon_name="target"
                        value=Signal::derive(move || kpis.get().attainment.map(|a| a as f64))
                        format=KpiFormat::Percent
                        subtitle=Signal::derive(move || {
                            Some(format!("Target: {}", format_inr_compact(kpis.get().target)))
                        })
                    />
                    <KpiCard
                        title="Active Outlets"
                        icon_name="store"
                        value=Signal::derive(move || Some(kpis.get().outlets_active as f64))
                        format=KpiFormat::Number
                        subtitle=Signal::derive(move || {
                            Some(format!("{} lapsed", kpis.get().outlets_lapsed))
                        })
                    />
                    <KpiCard
                        title="SKU Penetration"
                        icon_name="percent"
                        value=Signal::derive(move || kpis.get().penetration.map(|p| p as f64))
                        format=KpiFormat::Percent
                        subtitle=Signal::derive(|| Some("Avg across outlets".to_string()))
                    />
                </div>

                <div class="chart-grid">
                    <SalesChart points=series title="Daily Sales Trend (MTD)" />
                    <SkuParetoChart entries=pareto title="SKU Revenue Contribution" />
                </div>

                <div class="dashboard__bottom">
                    <DsrTable dsrs=dsrs title="DSR Performance Overview".to_string() />
                    <AlertsFeed
                        alerts=alerts
                        on_view_all=Callback::new(move |_| all_alerts_open.set(true))
                    />
                </div>
            </div>

            <Dialog open=all_alerts_open>
                <DialogSurface>
                    <DialogBody>
                        <DialogTitle>"All Alerts"</DialogTitle>
                        <DialogContent>
                            <AlertsFeed alerts=alerts max_items=usize::MAX />
                        </DialogContent>
                        <DialogActions>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| all_alerts_open.set(false)>
                                "Close"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                </DialogSurface>
            </Dialog>
        </div>
    }
}
