//! Maps the current [`AppRoute`] to its page.
//!
//! Role-gated pages are wrapped in [`RequireRank`] with the same minimum rank
//! as their sidebar entry.

use crate::dashboards::d401_kpi::ui::DashboardPage;
use crate::dashboards::d402_sales_series::ui::AnalyticsPage;
use crate::dashboards::d403_sku_pareto::ui::ProductsPage;
use crate::dashboards::d405_dsr_stats::ui::DsrPerformancePage;
use crate::dashboards::d406_hierarchy::ui::{HierarchyLevel, HierarchyPage};
use crate::layout::global_context::AppGlobalContext;
use crate::system::auth::guard::RequireRank;
use crate::system::pages::settings::SettingsPage;
use crate::usecases::u501_csv_upload::view::UploadPage;
use contracts::shared::navigation::{AppRoute, NAV_ITEMS};
use leptos::prelude::*;
use thaw::*;

/// Minimum rank for a route, taken from its sidebar entry or parent entry
fn required_rank(route: AppRoute) -> Option<u8> {
    NAV_ITEMS
        .iter()
        .find(|item| item.route == route || item.children.iter().any(|c| c.route == route))
        .and_then(|item| item.min_rank)
}

#[component]
fn NotFoundPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="page page--centered">
            <h1 class="page__title">"404"</h1>
            <p class="page__subtitle">"The page you are looking for does not exist."</p>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate(AppRoute::Dashboard)>
                "Back to Dashboard"
            </Button>
        </div>
    }
}

fn page_for(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Dashboard | AppRoute::Login => view! { <DashboardPage /> }.into_any(),
        AppRoute::Hierarchy
        | AppRoute::HierarchyRegions
        | AppRoute::HierarchyAreas
        | AppRoute::HierarchyTerritories => {
            view! { <HierarchyPage level=HierarchyLevel::from_route(route) /> }.into_any()
        }
        AppRoute::Dsr => view! { <DsrPerformancePage /> }.into_any(),
        AppRoute::Products => view! { <ProductsPage /> }.into_any(),
        AppRoute::Analytics => view! { <AnalyticsPage /> }.into_any(),
        AppRoute::Upload => view! { <UploadPage /> }.into_any(),
        AppRoute::Settings | AppRoute::SettingsProfile => view! { <SettingsPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

/// Page for the current route
#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    move || {
        let route = ctx.route.get();
        match required_rank(route) {
            Some(min_rank) => view! {
                <RequireRank min_rank=min_rank>
                    {move || page_for(route)}
                </RequireRank>
            }
            .into_any(),
            None => page_for(route),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rank() {
        assert_eq!(required_rank(AppRoute::Dashboard), None);
        assert_eq!(required_rank(AppRoute::HierarchyAreas), Some(3));
        assert_eq!(required_rank(AppRoute::Dsr), Some(2));
        assert_eq!(required_rank(AppRoute::Upload), Some(4));
        assert_eq!(required_rank(AppRoute::NotFound), None);
    }
}
