use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::filters::FiltersContext;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let global = AppGlobalContext::new();
    let filters = FiltersContext::new();

    // Both listen to popstate: one for the path, one for the query
    global.init_router_integration();
    filters.init_history_sync();

    provide_context(global);
    provide_context(filters);

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppShell />
            </AuthProvider>
        </ConfigProvider>
    }
}
