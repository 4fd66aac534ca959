//! Routes, sidebar entries and role gating.
//!
//! Gating here is presentation only: it decides what the shell shows, it is
//! not an access-control boundary.

use crate::system::roles::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Dashboard,
    Hierarchy,
    HierarchyRegions,
    HierarchyAreas,
    HierarchyTerritories,
    Dsr,
    Products,
    Analytics,
    Upload,
    Settings,
    SettingsProfile,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
}

/// Sidebar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: AppRoute,
    pub label: &'static str,
    pub icon: &'static str,
    /// Lowest role rank that sees the entry; `None` for everyone
    pub min_rank: Option<u8>,
    pub children: &'static [NavItem],
}

const fn leaf(route: AppRoute, label: &'static str, icon: &'static str) -> NavItem {
    NavItem {
        route,
        label,
        icon,
        min_rank: None,
        children: &[],
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    leaf(AppRoute::Dashboard, "Dashboard", "layout-dashboard"),
    NavItem {
        route: AppRoute::Hierarchy,
        label: "Hierarchy",
        icon: "building",
        min_rank: Some(3),
        children: &[
            leaf(AppRoute::HierarchyRegions, "Regions", "map"),
            leaf(AppRoute::HierarchyAreas, "Areas", "map-pin"),
            leaf(AppRoute::HierarchyTerritories, "Territories", "target"),
        ],
    },
    NavItem {
        route: AppRoute::Dsr,
        label: "DSR Performance",
        icon: "users",
        min_rank: Some(2),
        children: &[],
    },
    leaf(AppRoute::Products, "Products", "package"),
    leaf(AppRoute::Analytics, "Analytics", "bar-chart"),
    NavItem {
        route: AppRoute::Upload,
        label: "Upload Data",
        icon: "upload",
        min_rank: Some(4),
        children: &[],
    },
    leaf(AppRoute::Settings, "Settings", "settings"),
];

impl AppRoute {
    pub const ALL: [AppRoute; 13] = [
        AppRoute::Login,
        AppRoute::Dashboard,
        AppRoute::Hierarchy,
        AppRoute::HierarchyRegions,
        AppRoute::HierarchyAreas,
        AppRoute::HierarchyTerritories,
        AppRoute::Dsr,
        AppRoute::Products,
        AppRoute::Analytics,
        AppRoute::Upload,
        AppRoute::Settings,
        AppRoute::SettingsProfile,
        AppRoute::NotFound,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            AppRoute::Login => "/login",
            AppRoute::Dashboard => "/dashboard",
            AppRoute::Hierarchy => "/hierarchy",
            AppRoute::HierarchyRegions => "/hierarchy/regions",
            AppRoute::HierarchyAreas => "/hierarchy/areas",
            AppRoute::HierarchyTerritories => "/hierarchy/territories",
            AppRoute::Dsr => "/dsr",
            AppRoute::Products => "/products",
            AppRoute::Analytics => "/analytics",
            AppRoute::Upload => "/upload",
            AppRoute::Settings => "/settings",
            AppRoute::SettingsProfile => "/settings/profile",
            AppRoute::NotFound => "/404",
        }
    }

    /// Trailing slashes are ignored, `/` is the dashboard
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return AppRoute::Dashboard;
        }
        AppRoute::ALL
            .into_iter()
            .find(|route| *route != AppRoute::NotFound && route.path() == path)
            .unwrap_or(AppRoute::NotFound)
    }

    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Login => "Sign in",
            AppRoute::Dashboard => "Dashboard",
            AppRoute::Hierarchy => "Sales Hierarchy",
            AppRoute::HierarchyRegions => "Regions",
            AppRoute::HierarchyAreas => "Areas",
            AppRoute::HierarchyTerritories => "Territories",
            AppRoute::Dsr => "DSR Performance",
            AppRoute::Products => "Products",
            AppRoute::Analytics => "Analytics",
            AppRoute::Upload => "Upload Data",
            AppRoute::Settings => "Settings",
            AppRoute::SettingsProfile => "Profile",
            AppRoute::NotFound => "Page not found",
        }
    }

    pub fn requires_session(&self) -> bool {
        !matches!(self, AppRoute::Login | AppRoute::NotFound)
    }
}

impl NavItem {
    pub fn is_visible_to(&self, role: Option<Role>) -> bool {
        let rank = role.map(|r| r.rank()).unwrap_or(0);
        self.min_rank.map_or(true, |min| rank >= min)
    }

    /// Exact match or a sub-path of the entry
    pub fn is_active(&self, current_path: &str) -> bool {
        is_active(self.route.path(), current_path)
    }
}

/// Top-level entries the role may see
pub fn visible_nav_items(role: Option<Role>) -> Vec<&'static NavItem> {
    NAV_ITEMS
        .iter()
        .filter(|item| item.is_visible_to(role))
        .collect()
}

pub fn guard_route(route: AppRoute, session_present: bool) -> RouteDecision {
    match (route, session_present) {
        (AppRoute::Login, true) => RouteDecision::RedirectToDashboard,
        (route, false) if route.requires_session() => RouteDecision::RedirectToLogin,
        _ => RouteDecision::Allow,
    }
}

pub fn is_active(item_path: &str, current_path: &str) -> bool {
    current_path == item_path
        || current_path
            .strip_prefix(item_path)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(role: Option<Role>) -> Vec<&'static str> {
        visible_nav_items(role).iter().map(|i| i.label).collect()
    }

    #[test]
    fn test_visibility_follows_rank() {
        for role in Role::ALL {
            for item in NAV_ITEMS {
                let expected = item.min_rank.map_or(true, |min| role.rank() >= min);
                assert_eq!(item.is_visible_to(Some(role)), expected, "{:?} {}", role, item.label);
            }
        }
    }

    #[test]
    fn test_menu_per_role() {
        assert_eq!(
            labels(Some(Role::Dsr)),
            vec!["Dashboard", "Products", "Analytics", "Settings"]
        );
        assert_eq!(
            labels(Some(Role::Tsm)),
            vec!["Dashboard", "Hierarchy", "DSR Performance", "Products", "Analytics", "Settings"]
        );
        assert_eq!(labels(Some(Role::Asm)).len(), 7);
        assert_eq!(labels(None), labels(Some(Role::Dsr)));
    }

    #[test]
    fn test_path_round_trip() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::from_path(route.path()), route);
        }
        assert_eq!(AppRoute::from_path("/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/dsr/"), AppRoute::Dsr);
        assert_eq!(AppRoute::from_path("/unknown"), AppRoute::NotFound);
    }

    #[test]
    fn test_guard_route() {
        assert_eq!(guard_route(AppRoute::Dashboard, false), RouteDecision::RedirectToLogin);
        assert_eq!(guard_route(AppRoute::Dashboard, true), RouteDecision::Allow);
        assert_eq!(guard_route(AppRoute::Login, true), RouteDecision::RedirectToDashboard);
        assert_eq!(guard_route(AppRoute::Login, false), RouteDecision::Allow);
        assert_eq!(guard_route(AppRoute::NotFound, false), RouteDecision::Allow);
    }

    #[test]
    fn test_is_active() {
        assert!(is_active("/hierarchy", "/hierarchy"));
        assert!(is_active("/hierarchy", "/hierarchy/regions"));
        assert!(!is_active("/dsr", "/dsrs"));
        assert!(!is_active("/settings", "/dashboard"));
    }
}
