//! Products page: SKU catalogue with revenue and outlet penetration.

use super::chart::SkuParetoChart;
use crate::dashboards::d404_penetration::ui::PenetrationHeatmap;
use crate::shared::components::filter_panel::GlobalFilters;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::{format_inr, format_percent, TableCellMoney};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::scope::use_scope;
use contracts::dashboards::d403_sku_pareto::{sku_pareto, sku_revenue};
use contracts::dashboards::d404_penetration::{penetration_matrix, sku_penetration};
use contracts::dashboards::DataScope;
use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, PartialEq)]
struct ProductRow {
    id: String,
    name: String,
    category: String,
    price: f64,
    unit: String,
    revenue: f64,
    outlets_stocking: usize,
    penetration: Option<i64>,
}

/// Products in scope matching `query`, highest revenue first
fn product_rows(scope: &DataScope, query: &str) -> Vec<ProductRow> {
    let revenue = sku_revenue(scope);
    let penetration = sku_penetration(scope);

    let mut rows: Vec<ProductRow> = scope
        .products
        .iter()
        .filter(|p| p.matches(query))
        .map(|p| {
            let stock = penetration.iter().find(|s| s.sku_id == p.id);
            ProductRow {
                id: p.id.clone(),
                name: p.name.clone(),
                category: p.category.clone(),
                price: p.price,
                unit: p.unit.clone(),
                revenue: revenue
                    .iter()
                    .find(|(product, _)| product.id == p.id)
                    .map(|(_, r)| *r)
                    .unwrap_or(0.0),
                outlets_stocking: stock.map(|s| s.outlets_stocking).unwrap_or(0),
                penetration: stock.and_then(|s| s.percent),
            }
        })
        .collect();

    rows.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    rows
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let scope = use_scope();
    let search = RwSignal::new(String::new());

    let pareto = Memo::new(move |_| scope.with(sku_pareto));
    let matrix = Memo::new(move |_| scope.with(penetration_matrix));
    let rows = Memo::new(move |_| {
        let query = search.get();
        scope.with(|s| product_rows(s, &query))
    });

    view! {
        <div class="page">
            <PageHeader
                title="Products"
                subtitle="SKU revenue contribution and outlet penetration".to_string()
            />

            <div class="page__content">
                <GlobalFilters />

                <div class="chart-grid">
                    <SkuParetoChart entries=pareto title="SKU Revenue Contribution" />
                    <PenetrationHeatmap matrix=matrix />
                </div>

                <div class="page__toolbar">
                    <SearchInput value=search placeholder="Search SKUs by name or category..." />
                </div>

                <div class="card">
                    <div class="card__header">
                        <h3 class="card__title">"SKU List"</h3>
                        <span class="card__meta">{move || format!("{} SKUs", rows.with(|r| r.len()))}</span>
                    </div>
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"SKU"</TableHeaderCell>
                                <TableHeaderCell>"Category"</TableHeaderCell>
                                <TableHeaderCell>"Price"</TableHeaderCell>
                                <TableHeaderCell>"Revenue"</TableHeaderCell>
                                <TableHeaderCell>"Outlets"</TableHeaderCell>
                                <TableHeaderCell>"Penetration"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let list = rows.get();
                                if list.is_empty() {
                                    return view! {
                                        <TableRow>
                                            <TableCell>
                                                <div class="table__empty">"No SKUs found"</div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                    .into_any();
                                }
                                let query = search.get_untracked();
                                list.into_iter()
                                    .map(|row| {
                                        let name_hl = highlight_matches(&row.name, &query);
                                        let category_hl = highlight_matches(&row.category, &query);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <div class="table__primary">{name_hl}</div>
                                                        <div class="table__secondary">{row.id.clone()}</div>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>{category_hl}</TableCell>
                                                <TableCell>
                                                    <span class="table__number">
                                                        {format!("{} / {}", format_inr(row.price), row.unit)}
                                                    </span>
                                                </TableCell>
                                                <TableCellMoney value=row.revenue />
                                                <TableCell>
                                                    <span class="table__number">{row.outlets_stocking}</span>
                                                </TableCell>
                                                <TableCell>
                                                    <span class="table__number">{format_percent(row.penetration)}</span>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </TableBody>
                    </Table>
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
    fn test_product_rows() {
        let filters = Filters::default();
        let scope = resolve_scope(None, &filters, &MOCK);

        let rows = product_rows(&scope, "");
        assert_eq!(rows.len(), scope.products.len());
        assert!(rows.windows(2).all(|w| w[0].revenue >= w[1].revenue));

        let noodles = product_rows(&scope, "noodles");
        assert_eq!(noodles.len(), 2);
        assert!(noodles.iter().all(|r| r.category == "Noodles"));
    }
}
