use crate::shared::date_utils::format_date;
use contracts::dashboards::d404_penetration::{PenetrationCell, PenetrationMatrix};
use leptos::prelude::*;

fn cell_tooltip(cell: &PenetrationCell) -> String {
    match (cell.has_sku, cell.last_purchase) {
        (true, Some(date)) => format!(
            "{} × {}: stocked, last purchase {}",
            cell.outlet_name,
            cell.sku_name,
            format_date(date)
        ),
        (true, None) => format!("{} × {}: stocked", cell.outlet_name, cell.sku_name),
        (false, _) => format!("{} × {}: not stocked", cell.outlet_name, cell.sku_name),
    }
}

/// Outlet x SKU grid; filled cells mark a stocked SKU
#[component]
pub fn PenetrationHeatmap(#[prop(into)] matrix: Signal<PenetrationMatrix>) -> impl IntoView {
    let grid = move || {
        let m = matrix.get();
        if m.cells.is_empty() {
            return view! { <div class="chart__empty">"No data available"</div> }.into_any();
        }
        let columns = format!("grid-template-columns: 160px repeat({}, minmax(48px, 1fr))", m.skus.len());

        let header = m
            .skus
            .iter()
            .map(|(_, name)| view! { <div class="heatmap__sku" title=name.clone()>{name.clone()}</div> })
            .collect_view();

        let rows = m
            .outlets
            .iter()
            .map(|(outlet_id, outlet_name)| {
                let cells = m
                    .skus
                    .iter()
                    .map(|(sku_id, _)| match m.cell(outlet_id, sku_id) {
                        Some(cell) => {
                            let class = if cell.has_sku {
                                "heatmap__cell heatmap__cell--stocked"
                            } else {
                                "heatmap__cell"
                            };
                            view! { <div class=class title=cell_tooltip(cell)></div> }.into_any()
                        }
                        None => view! { <div class="heatmap__cell"></div> }.into_any(),
                    })
                    .collect_view();
                view! {
                    <div class="heatmap__outlet" title=outlet_name.clone()>{outlet_name.clone()}</div>
                    {cells}
                }
            })
            .collect_view();

        view! {
            <div class="heatmap__grid" style=columns>
                <div class="heatmap__corner"></div>
                {header}
                {rows}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="card heatmap">
            <div class="card__header">
                <h3 class="card__title">"SKU Penetration"</h3>
                <span class="card__meta">
                    {move || matrix.with(|m| {
                        format!("{}% overall • {} of {} cells", m.overall, m.stocked_cells(), m.cells.len())
                    })}
                </span>
            </div>
            <div class="card__body">{grid}</div>
            <div class="heatmap__legend">
                <span class="heatmap__legend-item"><span class="heatmap__cell heatmap__cell--stocked"></span>"Stocked"</span>
                <span class="heatmap__legend-item"><span class="heatmap__cell"></span>"Not stocked"</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_cell_tooltip() {
        let mut cell = PenetrationCell {
            outlet_id: "O1".to_string(),
            outlet_name: "Sharma Stores".to_string(),
            sku_id: "SKU1".to_string(),
            sku_name: "Tea 250g".to_string(),
            has_sku: true,
            last_purchase: NaiveDate::from_ymd_opt(2024, 1, 15),
        };
        assert!(cell_tooltip(&cell).ends_with("last purchase 15 Jan 2024"));
        cell.has_sku = false;
        cell.last_purchase = None;
        assert_eq!(cell_tooltip(&cell), "Sharma Stores × Tea 250g: not stocked");
    }
}
