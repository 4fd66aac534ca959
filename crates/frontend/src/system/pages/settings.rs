use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;
use crate::system::auth::context::use_auth;
use contracts::shared::mock_data::MOCK;
use contracts::shared::navigation::AppRoute;
use contracts::system::Session;
use leptos::prelude::*;

/// Scope rows shown on the profile: label, id and resolved name
fn scope_rows(session: &Session) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    let levels = [
        ("Region", &session.region_id),
        ("Area", &session.area_id),
        ("Territory", &session.territory_id),
        ("DSR", &session.dsr_id),
    ];
    for (label, id) in levels {
        if let Some(id) = id {
            let name = MOCK.entity_name(id).map(str::to_string).unwrap_or_else(|| id.clone());
            rows.push((label, format!("{} ({})", name, id)));
        }
    }
    rows
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, _) = use_auth();

    let tab_class = move |route: AppRoute| {
        if ctx.route.get() == route {
            "tabs__item tabs__item--active"
        } else {
            "tabs__item"
        }
    };

    let profile = move || {
        auth_state.with(|a| a.session.clone()).map(|session| {
            let scope = scope_rows(&session);
            view! {
                <div class="card profile">
                    <div class="profile__header">
                        <div class="profile__avatar">{session.initials()}</div>
                        <div>
                            <h3 class="profile__name">{session.name.clone()}</h3>
                            <p class="profile__role">{session.role.label()}</p>
                        </div>
                    </div>
                    <dl class="profile__details">
                        <dt>"User ID"</dt>
                        <dd>{session.id.clone()}</dd>
                        <dt>"Role"</dt>
                        <dd>{format!("{} ({})", session.role.as_str(), session.role.label())}</dd>
                        <dt>"Access"</dt>
                        <dd>{session.role.description()}</dd>
                        {scope
                            .into_iter()
                            .map(|(label, value)| view! {
                                <dt>{label}</dt>
                                <dd>{value}</dd>
                            })
                            .collect_view()}
                    </dl>
                </div>
            }
        })
    };

    view! {
        <div class="page">
            <PageHeader title="Settings" subtitle="Profile and application preferences".to_string() />
            <div class="page__content">
                <div class="tabs">
                    <button class=move || tab_class(AppRoute::Settings) on:click=move |_| ctx.navigate(AppRoute::Settings)>
                        "General"
                    </button>
                    <button class=move || tab_class(AppRoute::SettingsProfile) on:click=move |_| ctx.navigate(AppRoute::SettingsProfile)>
                        "Profile"
                    </button>
                </div>
                {move || if ctx.route.get() == AppRoute::SettingsProfile {
                    profile().into_any()
                } else {
                    view! {
                        <div class="card">
                            <div class="card__header">
                                <h3 class="card__title">"General"</h3>
                            </div>
                            <div class="card__body">
                                <p>"Data source: built-in demo dataset"</p>
                                <p>"Filters are kept in the address bar, so a copied link reopens the same view."</p>
                            </div>
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::Role;

    #[test]
    fn test_scope_rows() {
        let rsm = Session::for_role(Role::Rsm, "Alice");
        let rows = scope_rows(&rsm);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].0, "Region");
        assert!(rows[0].1.ends_with("(R1)"));

        let asm = Session::for_role(Role::Asm, "");
        assert_eq!(scope_rows(&asm).len(), 2);
    }
}
