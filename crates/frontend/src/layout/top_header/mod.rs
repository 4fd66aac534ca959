//! TopHeader component - application top bar.
//!
//! Sidebar toggle, page title, user badge and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth, use_session_store};
use contracts::shared::navigation::AppRoute;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();
    let store = use_session_store();

    let logout = move |_| {
        do_logout(store, set_auth_state);
        ctx.redirect(AppRoute::Login);
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">{move || ctx.route.get().title()}</span>
            </div>

            <div class="top-header__actions">
                {move || auth_state.get().session.map(|session| view! {
                    <div class="top-header__user" title=session.role.label()>
                        <span class="top-header__avatar">{session.initials()}</span>
                        <span class="top-header__user-name">{session.name.clone()}</span>
                        <span class="top-header__role-badge">{session.role.as_str()}</span>
                    </div>
                })}

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.navigate(AppRoute::SettingsProfile)
                    title="Profile"
                >
                    {icon("user")}
                </button>

                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
