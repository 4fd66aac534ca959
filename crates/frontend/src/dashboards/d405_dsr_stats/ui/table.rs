use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::table::{
    format_inr, format_percent, SortableHeaderCell, TableCellMoney,
};
use crate::shared::components::ui::AchievementBadge;
use crate::shared::filters::use_filters;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a002_dsr::Dsr;
use contracts::shared::filters::FilterUpdate;
use contracts::shared::mock_data::MOCK;
use contracts::shared::navigation::AppRoute;
use contracts::shared::sorting::{sort_list, SortField, SortState};
use leptos::prelude::*;
use thaw::*;

/// Sortable DSR list; a row click opens the detail dialog
#[component]
pub fn DsrTable(
    #[prop(into)] dsrs: Signal<Vec<Dsr>>,
    #[prop(optional, into)] title: MaybeProp<String>,
    /// Search text to highlight in names
    #[prop(optional, into)]
    highlight: Signal<String>,
) -> impl IntoView {
    let title = move || title.get().unwrap_or_else(|| "DSR Performance".to_string());
    let sort = RwSignal::new(SortState::default());
    let selected = RwSignal::new(None::<Dsr>);
    let dialog_open = RwSignal::new(false);

    let sorted = move || {
        let mut rows = dsrs.get();
        sort_list(&mut rows, sort.get());
        rows
    };

    let open_detail = move |dsr: Dsr| {
        log::debug!("open DSR detail {}", dsr.id);
        selected.set(Some(dsr));
        dialog_open.set(true);
    };

    view! {
        <div class="card dsr-table">
            <div class="card__header">
                <h3 class="card__title">{title}</h3>
                <span class="card__meta">{move || format!("{} DSRs", dsrs.with(|d| d.len()))}</span>
            </div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <SortableHeaderCell label="DSR Name" field=SortField::Name sort=sort />
                        <SortableHeaderCell label="Outlets" field=SortField::Outlets sort=sort align="right" />
                        <SortableHeaderCell label="Revenue MTD" field=SortField::Revenue sort=sort align="right" />
                        <SortableHeaderCell label="Target" field=SortField::Target sort=sort align="right" />
                        <TableHeaderCell>"Achievement"</TableHeaderCell>
                        <TableHeaderCell>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = sorted();
                        if rows.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell>
                                        <div class="table__empty">"No DSRs found"</div>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }
                        rows.into_iter()
                            .map(|dsr| {
                                let query = highlight.get();
                                let for_row = dsr.clone();
                                let for_button = dsr.clone();
                                let achievement = dsr.achievement();
                                view! {
                                    <TableRow
                                        class="table__row--clickable"
                                        on:click=move |_| open_detail(for_row.clone())
                                    >
                                        <TableCell>
                                            <TableCellLayout>
                                                <div>
                                                    <div class="dsr-table__name">{highlight_matches(&dsr.name, &query)}</div>
                                                    <div class="dsr-table__phone">{dsr.phone.clone()}</div>
                                                </div>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span style="text-align: right;">{dsr.outlets}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCellMoney value=dsr.revenue bold=true />
                                        <TableCellMoney value=dsr.target />
                                        <TableCell>
                                            <TableCellLayout>
                                                <AchievementBadge achievement=achievement />
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <button
                                                class="table__icon-btn"
                                                title="View details"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    open_detail(for_button.clone());
                                                }
                                            >
                                                {icon("chevron-right")}
                                            </button>
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

        <DsrDetailDialog open=dialog_open dsr=selected />
    }
}

#[component]
fn DsrDetailDialog(open: RwSignal<bool>, dsr: RwSignal<Option<Dsr>>) -> impl IntoView {
    let ctx = use_filters();
    let nav =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let territory_name = move |id: &str| {
        MOCK.territory(id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| id.to_string())
    };

    let view_outlets = move |_| {
        if let Some(d) = dsr.get_untracked() {
            ctx.set_filter(FilterUpdate::Dsr(Some(d.id)));
            open.set(false);
            nav.navigate(AppRoute::Products);
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || dsr.get().map(|d| d.name).unwrap_or_default()}
                    </DialogTitle>
                    <DialogContent>
                        {move || dsr.get().map(|d| view! {
                            <div class="dsr-detail">
                                <p class="dsr-detail__subtitle">"DSR Performance Details"</p>

                                <h4 class="dsr-detail__section">"Contact Information"</h4>
                                <div class="dsr-detail__line">{icon("phone")}{d.phone.clone()}</div>
                                <div class="dsr-detail__line">
                                    {icon("map-pin")}
                                    {format!("Territory: {}", territory_name(&d.territory_id))}
                                </div>

                                <h4 class="dsr-detail__section">"Performance Summary"</h4>
                                <div class="dsr-detail__grid">
                                    <div class="dsr-detail__metric">
                                        <span class="dsr-detail__metric-label">"Revenue MTD"</span>
                                        <span class="dsr-detail__metric-value">{format_inr(d.revenue)}</span>
                                    </div>
                                    <div class="dsr-detail__metric">
                                        <span class="dsr-detail__metric-label">"Target"</span>
                                        <span class="dsr-detail__metric-value">{format_inr(d.target)}</span>
                                    </div>
                                    <div class="dsr-detail__metric">
                                        <span class="dsr-detail__metric-label">"Outlets"</span>
                                        <span class="dsr-detail__metric-value">{d.outlets}</span>
                                    </div>
                                    <div class="dsr-detail__metric">
                                        <span class="dsr-detail__metric-label">"Achievement"</span>
                                        <span class="dsr-detail__metric-value">{format_percent(d.achievement())}</span>
                                    </div>
                                </div>

                                <h4 class="dsr-detail__section">"Activity"</h4>
                                <p class="dsr-detail__line">
                                    {format!("Last active: {}", d.last_active.format("%-d %B %Y"))}
                                </p>
                            </div>
                        })}
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Primary on_click=view_outlets>
                            "View Outlets"
                        </Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Close"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
