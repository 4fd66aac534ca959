//! Daily sales area chart with a revenue / quantity toggle.
//!
//! The forecast is drawn as a dashed line over the most recent points and
//! only in revenue mode.

use crate::shared::components::chart::{
    area_attr, label_indexes, nice_max, points_attr, ticks, ChartFrame,
};
use crate::shared::components::table::{format_inr_compact, format_number};
use crate::shared::date_utils::format_day_month;
use contracts::dashboards::d402_sales_series::SalesPoint;
use leptos::prelude::*;

const MAX_X_LABELS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesMetric {
    Revenue,
    Quantity,
}

impl SalesMetric {
    fn value(&self, point: &SalesPoint) -> f64 {
        match self {
            SalesMetric::Revenue => point.revenue,
            SalesMetric::Quantity => point.quantity as f64,
        }
    }

    fn axis_label(&self, value: f64) -> String {
        match self {
            SalesMetric::Revenue => format_inr_compact(value),
            SalesMetric::Quantity => format_number(value),
        }
    }
}

/// Line and forecast coordinates for one metric
struct Plot {
    max: f64,
    line: Vec<(f64, f64)>,
    forecast: Vec<(f64, f64)>,
}

fn plot(points: &[SalesPoint], metric: SalesMetric, show_forecast: bool, frame: &ChartFrame) -> Plot {
    let forecast_on = show_forecast && metric == SalesMetric::Revenue;
    let peak = points
        .iter()
        .map(|p| {
            let forecast = if forecast_on { p.forecast.unwrap_or(0.0) } else { 0.0 };
            metric.value(p).max(forecast)
        })
        .fold(0.0, f64::max);
    let max = nice_max(peak);
    let n = points.len();

    let line = points
        .iter()
        .enumerate()
        .map(|(i, p)| (frame.point_x(i, n), frame.y(metric.value(p), max)))
        .collect();

    let forecast = if forecast_on {
        points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.forecast.map(|f| (frame.point_x(i, n), frame.y(f, max))))
            .collect()
    } else {
        Vec::new()
    };

    Plot { max, line, forecast }
}

#[component]
pub fn SalesChart(
    #[prop(into)] points: Signal<Vec<SalesPoint>>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, default = true)] show_forecast: bool,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Sales Trend".to_string());
    let metric = RwSignal::new(SalesMetric::Revenue);
    let frame = ChartFrame::default();

    let toggle_class = move |m: SalesMetric| {
        if metric.get() == m {
            "chart-toggle__btn chart-toggle__btn--active"
        } else {
            "chart-toggle__btn"
        }
    };

    let chart = move || {
        let data = points.get();
        if data.is_empty() {
            return view! { <div class="chart__empty">"No data available"</div> }.into_any();
        }
        let m = metric.get();
        let Plot { max, line, forecast } = plot(&data, m, show_forecast, &frame);
        let baseline = frame.baseline();

        let grid = ticks(max, 4)
            .into_iter()
            .map(|t| {
                let y = frame.y(t, max);
                view! {
                    <line x1=frame.left x2={frame.width - frame.right} y1=y y2=y class="chart__grid" stroke-dasharray="3 3" />
                    <text x={frame.left - 8.0} y={y + 4.0} text-anchor="end" class="chart__tick">{m.axis_label(t)}</text>
                }
            })
            .collect_view();

        let x_labels = label_indexes(data.len(), MAX_X_LABELS)
            .into_iter()
            .map(|i| {
                let x = frame.point_x(i, data.len());
                view! {
                    <text x=x y={baseline + 18.0} text-anchor="middle" class="chart__tick">
                        {format_day_month(data[i].date)}
                    </text>
                }
            })
            .collect_view();

        let hover = data
            .iter()
            .zip(line.iter())
            .map(|(p, (x, y))| {
                let label = format!("{}: {}", format_day_month(p.date), m.axis_label(m.value(p)));
                view! {
                    <circle cx={*x} cy={*y} r="3" class="chart__dot">
                        <title>{label}</title>
                    </circle>
                }
            })
            .collect_view();

        let forecast_view = (!forecast.is_empty()).then(|| {
            view! {
                <polyline points=points_attr(&forecast) fill="none" class="chart__forecast" stroke-width="2" stroke-dasharray="5 5" />
            }
        });

        view! {
            <svg viewBox=frame.view_box() class="chart__svg" preserveAspectRatio="none" role="img">
                <defs>
                    <linearGradient id="sales-fill" x1="0" y1="0" x2="0" y2="1">
                        <stop offset="5%" stop-color="currentColor" stop-opacity="0.3" />
                        <stop offset="95%" stop-color="currentColor" stop-opacity="0" />
                    </linearGradient>
                </defs>
                {grid}
                <polygon points=area_attr(&line, baseline) fill="url(#sales-fill)" />
                <polyline points=points_attr(&line) fill="none" class="chart__line" stroke-width="2" />
                {forecast_view}
                {hover}
                {x_labels}
            </svg>
        }
        .into_any()
    };

    view! {
        <div class="card chart">
            <div class="card__header">
                <h3 class="card__title">{title}</h3>
                <div class="chart-toggle">
                    <button class=move || toggle_class(SalesMetric::Revenue) on:click=move |_| metric.set(SalesMetric::Revenue)>
                        "Revenue"
                    </button>
                    <button class=move || toggle_class(SalesMetric::Quantity) on:click=move |_| metric.set(SalesMetric::Quantity)>
                        "Quantity"
                    </button>
                </div>
            </div>
            <div class="chart__body">{chart}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(day: u32, revenue: f64, forecast: Option<f64>) -> SalesPoint {
        SalesPoint {
            date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            revenue,
            quantity: (revenue / 45.0).round() as u64,
            forecast,
        }
    }

    #[test]
    fn test_forecast_only_in_revenue_mode() {
        let frame = ChartFrame::default();
        let data = vec![point(1, 9_000.0, None), point(2, 10_000.0, Some(12_000.0))];

        let revenue = plot(&data, SalesMetric::Revenue, true, &frame);
        assert_eq!(revenue.max, 20_000.0);
        assert_eq!(revenue.line.len(), 2);
        assert_eq!(revenue.forecast.len(), 1);

        let quantity = plot(&data, SalesMetric::Quantity, true, &frame);
        assert!(quantity.forecast.is_empty());
        assert_eq!(quantity.max, 500.0);

        let hidden = plot(&data, SalesMetric::Revenue, false, &frame);
        assert!(hidden.forecast.is_empty());
        assert_eq!(hidden.max, 10_000.0);
    }
}
