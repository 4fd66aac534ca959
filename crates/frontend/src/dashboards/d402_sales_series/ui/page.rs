//! Analytics page: a fixed 60-day trend, SKU distribution, regional
//! performance and derived insights.

use super::chart::SalesChart;
use crate::dashboards::d403_sku_pareto::ui::SkuParetoChart;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{KpiCard, KpiFormat};
use crate::shared::components::table::format_inr_compact;
use crate::shared::components::ui::AchievementBand;
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::scope::use_scope;
use chrono::{Datelike, Duration, Weekday};
use contracts::dashboards::d402_sales_series::{sales_series, series_stats, SalesPoint};
use contracts::dashboards::d403_sku_pareto::{sku_pareto, top_share};
use contracts::dashboards::d406_hierarchy::{hierarchy_tree, regional_performance, RegionNode};
use contracts::shared::config::AppConfig;
use contracts::shared::filters::DateWindow;
use contracts::shared::math::{percent_of, trend_percent};
use leptos::prelude::*;

/// The trailing analytics window ending today
fn analytics_window() -> DateWindow {
    let end = today();
    let start = end - Duration::days(AppConfig::ANALYTICS_WINDOW_DAYS as i64 - 1);
    DateWindow::new(start, end)
}

/// The window of equal length just before `window`
fn previous_window(window: DateWindow) -> DateWindow {
    let len = window.len_days() as i64;
    DateWindow::new(
        window.start - Duration::days(len),
        window.start - Duration::days(1),
    )
}

fn is_weekend(point: &SalesPoint) -> bool {
    matches!(point.date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// How far the average weekend day falls below the average weekday, in percent
fn weekend_dip(points: &[SalesPoint]) -> Option<i64> {
    let (weekend, weekday): (Vec<&SalesPoint>, Vec<&SalesPoint>) =
        points.iter().partition(|p| is_weekend(p));
    if weekend.is_empty() || weekday.is_empty() {
        return None;
    }
    let avg = |ps: &[&SalesPoint]| ps.iter().map(|p| p.revenue).sum::<f64>() / ps.len() as f64;
    percent_of(avg(&weekday) - avg(&weekend), avg(&weekday))
}

/// Region with the largest revenue growth over the previous period
fn fastest_growing(tree: &[RegionNode]) -> Option<(String, i64)> {
    tree.iter()
        .filter_map(|region| {
            let previous: f64 = region
                .areas
                .iter()
                .flat_map(|a| a.territories.iter())
                .flat_map(|t| t.dsrs.iter())
                .map(|d| d.previous_revenue)
                .sum();
            trend_percent(region.rollup.revenue, previous).map(|t| (region.name.clone(), t))
        })
        .max_by_key(|(_, trend)| *trend)
}

#[component]
fn InsightCard(
    icon_name: &'static str,
    #[prop(into)] title: String,
    #[prop(into)] text: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="insight-card">
            <div class="insight-card__icon">{icon(icon_name)}</div>
            <div class="insight-card__body">
                <h4 class="insight-card__title">{title}</h4>
                <p class="insight-card__text">{move || text.get()}</p>
            </div>
        </div>
    }
}

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let scope = use_scope();
    let window = analytics_window();

    let points = Memo::new(move |_| scope.with(|s| sales_series(s, window)));
    let previous_total = Memo::new(move |_| {
        scope.with(|s| {
            sales_series(s, previous_window(window))
                .iter()
                .map(|p| p.revenue)
                .sum::<f64>()
        })
    });
    let stats = Memo::new(move |_| points.with(|p| series_stats(p)));
    let pareto = Memo::new(move |_| scope.with(sku_pareto));
    let tree = Memo::new(move |_| scope.with(hierarchy_tree));
    let regions = Memo::new(move |_| tree.with(|t| regional_performance(t)));

    let total_trend = Signal::derive(move || {
        stats
            .get()
            .and_then(|s| trend_percent(s.total, previous_total.get()))
    });

    let weekend_text = Signal::derive(move || match points.with(|p| weekend_dip(p)) {
        Some(dip) if dip > 0 => format!(
            "Weekend sales run {}% below weekdays. Consider weekend promotions.",
            dip
        ),
        Some(_) => "Weekend sales keep pace with weekdays.".to_string(),
        None => "Not enough data to compare weekdays and weekends.".to_string(),
    });

    let concentration_text = Signal::derive(move || {
        let entries = pareto.get();
        if entries.is_empty() {
            return "No SKU revenue in view.".to_string();
        }
        format!(
            "Top 3 SKUs contribute {:.0}% of revenue. Diversify the portfolio to reduce risk.",
            top_share(&entries, 3)
        )
    });

    let growth_text = Signal::derive(move || match tree.with(|t| fastest_growing(t)) {
        Some((name, trend)) => format!(
            "{} shows {}{}% growth against the previous period.",
            name,
            if trend > 0 { "+" } else { "" },
            trend
        ),
        None => "No regional history to compare.".to_string(),
    });

    let region_rows = move || {
        let rows = regions.get();
        if rows.is_empty() {
            return view! { <div class="chart__empty">"No data available"</div> }.into_any();
        }
        rows.into_iter()
            .map(|r| {
                let area_count = tree.with(|t| {
                    t.iter()
                        .find(|n| n.id == r.id)
                        .map(|n| n.areas.len())
                        .unwrap_or(0)
                });
                let width = r.achievement.unwrap_or(0).clamp(0, 100);
                let bar_class = format!("progress__bar {}", AchievementBand::of(r.achievement).css_class());
                let achievement = r
                    .achievement
                    .map(|a| format!("{}%", a))
                    .unwrap_or_else(|| "—".to_string());
                view! {
                    <div class="region-row">
                        <div class="region-row__header">
                            <span class="region-row__name">{r.name.clone()}</span>
                            <span class="region-row__value">{format_inr_compact(r.revenue)}</span>
                        </div>
                        <div class="progress">
                            <div class=bar_class style=format!("width: {}%", width)></div>
                        </div>
                        <div class="region-row__meta">
                            {format!("{} of target • {} areas", achievement, area_count)}
                        </div>
                    </div>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="page">
            <PageHeader
                title="Analytics"
                subtitle="Deep dive into sales trends, regional performance, and forecasting".to_string()
            />

            <div class="page__content">
                <div class="kpi-grid">
                    <KpiCard
                        title="Total Revenue (60d)"
                        icon_name="trending-up"
                        value=Signal::derive(move || stats.get().map(|s| s.total))
                        format=KpiFormat::Currency
                        trend=total_trend
                        trend_label="vs previous 60 days"
                    />
                    <KpiCard
                        title="Avg Daily Revenue"
                        icon_name="calendar"
                        value=Signal::derive(move || stats.get().map(|s| s.avg_daily))
                        format=KpiFormat::Currency
                    />
                    <KpiCard
                        title="Peak Day Revenue"
                        icon_name="target"
                        value=Signal::derive(move || stats.get().map(|s| s.peak))
                        format=KpiFormat::Currency
                        subtitle=Signal::derive(|| Some("Best performing day".to_string()))
                    />
                    <KpiCard
                        title="Revenue Variance"
                        icon_name="percent"
                        value=Signal::derive(move || {
                            stats.get().and_then(|s| s.spread).map(|v| v as f64)
                        })
                        format=KpiFormat::Percent
                        subtitle=Signal::derive(|| Some("Max vs Min spread".to_string()))
                    />
                </div>

                <div class="chart-grid">
                    <SalesChart points=points title="Sales Trend Analysis (60 Days)" />
                    <SkuParetoChart entries=pareto title="SKU Revenue Distribution" />
                </div>

                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Regional Performance"</h3>
                    </div>
                    <div class="card__body region-list">{region_rows}</div>
                </div>

                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"Key Insights"</h3>
                    </div>
                    <div class="card__body insight-grid">
                        <InsightCard icon_name="calendar" title="Weekend Pattern" text=weekend_text />
                        <InsightCard icon_name="package" title="Top SKU Concentration" text=concentration_text />
                        <InsightCard icon_name="trending-up" title="Growth Opportunity" text=growth_text />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(y: i32, m: u32, d: u32, revenue: f64) -> SalesPoint {
        SalesPoint {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            revenue,
            quantity: 0,
            forecast: None,
        }
    }

    #[test]
    fn test_weekend_dip() {
        // 2024-01-05 is a Friday
        let points = vec![
            point(2024, 1, 4, 1000.0),
            point(2024, 1, 5, 1000.0),
            point(2024, 1, 6, 700.0),
            point(2024, 1, 7, 700.0),
        ];
        assert_eq!(weekend_dip(&points), Some(30));
        assert_eq!(weekend_dip(&points[..2]), None);
    }

    #[test]
    fn test_previous_window() {
        let window = DateWindow::new(
            NaiveDate::from_ymd_opt(2024, 1, 11).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        );
        let prev = previous_window(window);
        assert_eq!(prev.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(prev.end, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    }
}
