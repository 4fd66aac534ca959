use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_login, use_auth, use_session_store};
use contracts::shared::navigation::AppRoute;
use contracts::system::Role;
use leptos::prelude::*;
use thaw::*;

/// Demo sign-in: pick a role, optionally type a display name
#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (_, set_auth_state) = use_auth();
    let store = use_session_store();

    let selected = RwSignal::new(None::<Role>);
    let name = RwSignal::new(String::new());
    let (error_message, set_error_message) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(role) = selected.get_untracked() else {
            set_error_message.set(Some("Select a role to continue".to_string()));
            return;
        };
        set_error_message.set(None);
        do_login(store, set_auth_state, role, &name.get_untracked());
        log::info!("signed in as {}", role);
        ctx.navigate(AppRoute::Dashboard);
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-box__brand">{icon("bar-chart")}</div>
                <h1>"FMCG Sales Analytics"</h1>
                <h2>"Select your role to sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="role-grid">
                        {Role::ALL
                            .into_iter()
                            .map(|role| view! {
                                <button
                                    type="button"
                                    class="role-card"
                                    class:role-card--selected=move || selected.get() == Some(role)
                                    on:click=move |_| selected.set(Some(role))
                                >
                                    <span class="role-card__code">{role.as_str()}</span>
                                    <span class="role-card__label">{role.label()}</span>
                                    <span class="role-card__description">{role.description()}</span>
                                </button>
                            })
                            .collect_view()}
                    </div>

                    <div class="form-group">
                        <label for="display-name">"Your name (optional)"</label>
                        <input
                            type="text"
                            id="display-name"
                            placeholder="Enter your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || selected.get().is_none()
                    >
                        {move || match selected.get() {
                            Some(role) => format!("Continue as {}", role.as_str()),
                            None => "Continue".to_string(),
                        }}
                    </button>
                </form>

                <div class="login-info">
                    <p>"Demo mode: data is generated locally and scoped to the selected role."</p>
                </div>
            </div>
        </div>
    }
}
