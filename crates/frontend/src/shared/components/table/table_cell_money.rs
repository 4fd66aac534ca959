//! Right-aligned rupee amount cell

use super::number_format::format_inr;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableCellMoney(
    value: f64,
    #[prop(optional, default = false)] bold: bool,
) -> impl IntoView {
    let style = if bold {
        "text-align: right; font-variant-numeric: tabular-nums; font-weight: 600;"
    } else {
        "text-align: right; font-variant-numeric: tabular-nums;"
    };

    view! {
        <TableCell>
            <TableCellLayout>
                <span style=style>{format_inr(value)}</span>
            </TableCellLayout>
        </TableCell>
    }
}
