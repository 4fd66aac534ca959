//! Auth gate and the signed-in layout.
//!
//! The gate keeps the route and the session consistent: protected routes
//! without a session go to `/login`, `/login` with a session goes to the
//! dashboard.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use contracts::shared::navigation::{guard_route, AppRoute, RouteDecision};
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <AppRoutes /> }.into_any()
        />
    }
}

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();
    let authenticated = move || auth_state.with(|a| a.is_authenticated());

    Effect::new(move |_| {
        match guard_route(ctx.route.get(), authenticated()) {
            RouteDecision::Allow => {}
            RouteDecision::RedirectToLogin => ctx.redirect(AppRoute::Login),
            RouteDecision::RedirectToDashboard => ctx.redirect(AppRoute::Dashboard),
        }
    });

    view! {
        <Show
            when=move || authenticated() && ctx.route.get() != AppRoute::Login
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
