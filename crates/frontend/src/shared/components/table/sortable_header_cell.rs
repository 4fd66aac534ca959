//! Clickable table header that drives a shared `SortState`
//!
//! ```text
//! <SortableHeaderCell label="Revenue" field=SortField::Revenue sort=sort align="right" />
//! ```

use contracts::shared::sorting::{SortField, SortState};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    field: SortField,
    sort: RwSignal<SortState>,
    /// "left" or "right"
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    let indicator_class = move || {
        if sort.get().field == field {
            "table__sort-indicator table__sort-indicator--active"
        } else {
            "table__sort-indicator"
        }
    };

    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| sort.update(|s| s.toggle(field))
            >
                {label}
                <span class=indicator_class>{move || sort.get().indicator(field)}</span>
            </div>
        </TableHeaderCell>
    }
}
