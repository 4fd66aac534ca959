pub mod global_context;
pub mod left;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------+
/// |  Sidebar  |       TopHeader        |
/// |           +------------------------+
/// |           |        Content         |
/// +------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="app-layout">
            <aside data-zone="left" class="app-sidebar" class:hidden=move || !ctx.left_open.get()>
                {left()}
            </aside>

            <div class="app-main">
                <TopHeader />
                <main data-zone="center" class="app-content">
                    {center()}
                </main>
            </div>
        </div>
    }
}
