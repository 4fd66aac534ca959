//! Global filter bar shown above the dashboard pages.
//!
//! Every control writes through [`FiltersContext`], which keeps the URL query
//! in step. Changing the region also clears area and territory.

use crate::shared::date_utils::{format_iso, format_window, parse_iso};
use crate::shared::filters::use_filters;
use crate::shared::icons::icon;
use crate::shared::scope::use_scope;
use contracts::enums::{Channel, DateRangeKind};
use contracts::shared::filters::{FilterPatch, FilterUpdate};
use contracts::shared::mock_data::MOCK;
use leptos::prelude::*;
use thaw::*;

/// Empty option value stands for "all"
fn option_id(value: String) -> Option<String> {
    Some(value).filter(|v| !v.is_empty())
}

#[component]
pub fn GlobalFilters() -> impl IntoView {
    let ctx = use_filters();
    let scope = use_scope();
    let filters = ctx.filters;

    let active_count = move || filters.with(|f| f.active_count());
    let is_custom = move || filters.with(|f| f.date_range == DateRangeKind::Custom);
    let region_id = move || filters.with(|f| f.region_id.clone());

    let on_date_range = move |ev: leptos::ev::Event| {
        if let Some(kind) = DateRangeKind::from_code(&event_target_value(&ev)) {
            ctx.set_filter(FilterUpdate::DateRange(kind));
        }
    };

    let on_region = move |ev: leptos::ev::Event| {
        ctx.set_filters(FilterPatch::select_region(option_id(event_target_value(&ev))));
    };

    let on_area = move |ev: leptos::ev::Event| {
        ctx.set_filters(FilterPatch::select_area(option_id(event_target_value(&ev))));
    };

    let on_channel = move |ev: leptos::ev::Event| {
        let channel = Channel::from_code(&event_target_value(&ev));
        ctx.set_filter(FilterUpdate::Channel(channel));
    };

    let toggle_sku = move |sku_id: &'static str| {
        let mut ids = filters.with_untracked(|f| f.sku_ids.clone());
        if let Some(pos) = ids.iter().position(|id| id == sku_id) {
            ids.remove(pos);
        } else {
            ids.push(sku_id.to_string());
        }
        ctx.set_filter(FilterUpdate::SkuIds(ids));
    };

    let sku_label = move || {
        filters.with(|f| match f.sku_ids.len() {
            0 => "All SKUs".to_string(),
            1 => MOCK
                .product(&f.sku_ids[0])
                .map(|p| p.name.clone())
                .unwrap_or_else(|| "1 SKU".to_string()),
            n => format!("{} SKUs", n),
        })
    };

    view! {
        <div class="global-filters">
            <div class="global-filters__item">
                {icon("calendar")}
                <select
                    class="global-filters__select"
                    on:change=on_date_range
                    prop:value=move || filters.with(|f| f.date_range.code())
                >
                    {DateRangeKind::all()
                        .into_iter()
                        .map(|kind| view! { <option value=kind.code()>{kind.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <Show when=is_custom>
                <div class="global-filters__item global-filters__dates">
                    <input
                        type="date"
                        class="global-filters__date"
                        prop:value=move || filters.with(|f| f.start_date.map(format_iso).unwrap_or_default())
                        on:change=move |ev| {
                            ctx.set_filter(FilterUpdate::StartDate(parse_iso(&event_target_value(&ev))));
                        }
                    />
                    <span>"-"</span>
                    <input
                        type="date"
                        class="global-filters__date"
                        prop:value=move || filters.with(|f| f.end_date.map(format_iso).unwrap_or_default())
                        on:change=move |ev| {
                            ctx.set_filter(FilterUpdate::EndDate(parse_iso(&event_target_value(&ev))));
                        }
                    />
                </div>
            </Show>

            <div class="global-filters__item">
                <select
                    class="global-filters__select"
                    class:global-filters__select--active=move || region_id().is_some()
                    on:change=on_region
                    prop:value=move || region_id().unwrap_or_default()
                >
                    <option value="">"All Regions"</option>
                    {move || scope
                        .regions()
                        .into_iter()
                        .map(|r| view! { <option value=r.id.clone()>{r.name.clone()}</option> })
                        .collect_view()}
                </select>
            </div>

            {move || region_id().map(|rid| {
                let areas: Vec<_> = MOCK.areas_in(&rid).collect();
                view! {
                    <div class="global-filters__item">
                        <select
                            class="global-filters__select"
                            class:global-filters__select--active=move || filters.with(|f| f.area_id.is_some())
                            on:change=on_area
                            prop:value=move || filters.with(|f| f.area_id.clone().unwrap_or_default())
                        >
                            <option value="">"All Areas"</option>
                            {areas
                                .into_iter()
                                .map(|a| view! { <option value=a.id.clone()>{a.name.clone()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                }
            })}

            <div class="global-filters__item">
                <select
                    class="global-filters__select"
                    class:global-filters__select--active=move || filters.with(|f| f.channel.is_some())
                    on:change=on_channel
                    prop:value=move || filters.with(|f| f.channel.map(|c| c.code()).unwrap_or(""))
                >
                    <option value="">"All Channels"</option>
                    {Channel::all()
                        .into_iter()
                        .map(|c| view! { <option value=c.code()>{c.code()}</option> })
                        .collect_view()}
                </select>
            </div>

            <details class="global-filters__item global-filters__dropdown">
                <summary class="global-filters__summary">
                    {sku_label}
                    {icon("chevron-down")}
                </summary>
                <div class="global-filters__menu">
                    {MOCK
                        .products
                        .iter()
                        .map(|p| {
                            let id: &'static str = p.id.as_str();
                            view! {
                                <label class="global-filters__option">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || filters.with(|f| f.sku_ids.iter().any(|s| s == id))
                                        on:change=move |_| toggle_sku(id)
                                    />
                                    {p.name.clone()}
                                </label>
                            }
                        })
                        .collect_view()}
                </div>
            </details>

            <Show when=move || { active_count() > 0 }>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| ctx.reset_filters()>
                    {icon("x")}
                    {move || format!("Clear ({})", active_count())}
                </Button>
            </Show>

            <div class="global-filters__window">
                {move || format_window(scope.window())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_id() {
        assert_eq!(option_id(String::new()), None);
        assert_eq!(option_id("R1".to_string()), Some("R1".to_string()));
    }
}
