//! Sidebar with role-filtered, collapsible menu items

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use contracts::shared::navigation::{is_active, visible_nav_items, NavItem};
use leptos::prelude::*;

#[component]
fn NavLink(item: &'static NavItem, #[prop(optional)] nested: bool) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <a
            href=item.route.path()
            class="app-sidebar__item"
            class:app-sidebar__item--nested=nested
            class:app-sidebar__item--active=move || {
                let current = ctx.current_path();
                if nested { current == item.route.path() } else { item.is_active(current) }
            }
            on:click=move |ev| {
                ev.prevent_default();
                ctx.navigate(item.route);
            }
        >
            <div class="app-sidebar__item-content">
                {(!nested).then(|| icon(item.icon))}
                <span>{item.label}</span>
            </div>
        </a>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    // Hierarchy starts expanded
    let expanded_groups = RwSignal::new(vec!["Hierarchy"]);

    let items = move || visible_nav_items(auth_state.get().role());

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                {icon("trending-up")}
                <div>
                    <div class="app-sidebar__title">"FMCG Analytics"</div>
                    <div class="app-sidebar__subtitle">"Sales Dashboard"</div>
                </div>
            </div>

            <nav class="app-sidebar__nav">
                {move || items().into_iter().map(|item| {
                    if item.children.is_empty() {
                        return view! { <NavLink item=item /> }.into_any();
                    }

                    let group = item.label;
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                class:app-sidebar__item--active=move || {
                                    let current = ctx.current_path();
                                    item.children.iter().any(|child| is_active(child.route.path(), current))
                                }
                                on:click=move |_| {
                                    expanded_groups.update(|groups| {
                                        if let Some(pos) = groups.iter().position(|g| *g == group) {
                                            groups.remove(pos);
                                        } else {
                                            groups.push(group);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group)
                                >
                                    {icon("chevron-down")}
                                </div>
                            </div>

                            <Show when=move || expanded_groups.get().contains(&group)>
                                <div class="app-sidebar__children">
                                    {item.children.iter().map(|child| view! { <NavLink item=child nested=true /> }).collect_view()}
                                </div>
                            </Show>
                        </div>
                    }.into_any()
                }).collect_view()}
            </nav>

            {move || auth_state.get().session.map(|session| view! {
                <div class="app-sidebar__user">
                    <div class="app-sidebar__avatar">{session.initials()}</div>
                    <div class="app-sidebar__user-text">
                        <div class="app-sidebar__user-name">{session.name.clone()}</div>
                        <div class="app-sidebar__user-role">{session.role.label()}</div>
                    </div>
                </div>
            })}
        </div>
    }
}
