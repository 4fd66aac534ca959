//! SKU revenue bars with the cumulative share line on a 0-100% right axis

use crate::shared::components::chart::{nice_max, points_attr, ticks, ChartFrame};
use crate::shared::components::table::{format_inr, format_inr_compact};
use contracts::dashboards::d403_sku_pareto::ParetoEntry;
use leptos::prelude::*;

fn pareto_frame() -> ChartFrame {
    ChartFrame {
        right: 48.0,
        bottom: 80.0,
        ..ChartFrame::default()
    }
}

#[component]
pub fn SkuParetoChart(
    #[prop(into)] entries: Signal<Vec<ParetoEntry>>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "SKU Revenue Share".to_string());
    let frame = pareto_frame();

    let chart = move || {
        let data = entries.get();
        if data.is_empty() {
            return view! { <div class="chart__empty">"No data available"</div> }.into_any();
        }
        let n = data.len();
        let max = nice_max(data.iter().map(|e| e.revenue).fold(0.0, f64::max));
        let bar_width = frame.slot_width(n) * 0.6;
        let baseline = frame.baseline();
        let right_x = frame.width - frame.right;

        let grid = ticks(max, 4)
            .into_iter()
            .zip(ticks(100.0, 4))
            .map(|(value, pct)| {
                let y = frame.y(value, max);
                view! {
                    <line x1=frame.left x2=right_x y1=y y2=y class="chart__grid" stroke-dasharray="3 3" />
                    <text x={frame.left - 8.0} y={y + 4.0} text-anchor="end" class="chart__tick">{format_inr_compact(value)}</text>
                    <text x={right_x + 8.0} y={y + 4.0} text-anchor="start" class="chart__tick">{format!("{}%", pct)}</text>
                }
            })
            .collect_view();

        let bars = data
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let cx = frame.slot_x(i, n);
                let top = frame.y(e.revenue, max);
                let label_y = baseline + 12.0;
                let tooltip = format!(
                    "{}: {} ({}%, cumulative {}%)",
                    e.name,
                    format_inr(e.revenue),
                    e.share,
                    e.cumulative_share
                );
                view! {
                    <rect x={cx - bar_width / 2.0} y=top width=bar_width height={baseline - top} rx="3" class="chart__bar">
                        <title>{tooltip}</title>
                    </rect>
                    <text
                        x=cx
                        y=label_y
                        text-anchor="end"
                        class="chart__tick chart__tick--small"
                        transform=format!("rotate(-45 {:.1} {:.1})", cx, label_y)
                    >
                        {e.name.clone()}
                    </text>
                }
            })
            .collect_view();

        let cumulative: Vec<(f64, f64)> = data
            .iter()
            .enumerate()
            .map(|(i, e)| (frame.slot_x(i, n), frame.y(e.cumulative_share, 100.0)))
            .collect();

        let dots = cumulative
            .iter()
            .map(|(x, y)| view! { <circle cx={*x} cy={*y} r="3" class="chart__dot chart__dot--accent" /> })
            .collect_view();

        view! {
            <svg viewBox=frame.view_box() class="chart__svg" role="img">
                {grid}
                {bars}
                <polyline points=points_attr(&cumulative) fill="none" class="chart__line chart__line--accent" stroke-width="2" />
                {dots}
            </svg>
        }
        .into_any()
    };

    view! {
        <div class="card chart">
            <div class="card__header">
                <h3 class="card__title">{title}</h3>
                <div class="chart__legend">
                    <span class="chart__legend-item"><span class="chart__swatch chart__swatch--bar"></span>"Revenue"</span>
                    <span class="chart__legend-item"><span class="chart__swatch chart__swatch--line"></span>"Cumulative %"</span>
                </div>
            </div>
            <div class="chart__body">{chart}</div>
        </div>
    }
}
