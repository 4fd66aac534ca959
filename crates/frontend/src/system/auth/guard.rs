use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires a role of at least `min_rank`
#[component]
pub fn RequireRank(min_rank: u8, children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().role().is_some_and(|r| r.rank() >= min_rank)
            fallback=|| view! {
                <div class="access-denied">
                    <h2>"Access restricted"</h2>
                    <p>"Your role does not have access to this page."</p>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
