//! Navigation surface and the per-view route guard.
//!
//! The guard is a convenience for steering users to the right view. It is
//! evaluated once per navigation and is not an authorization boundary.

use serde::Serialize;

use crate::roles::Role;
use crate::session::Session;

/// Every logical view a client can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Landing,
    Login,
    AdminDashboard,
    StartupDashboard,
    CreateMarketplace,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::AdminDashboard => "/dashboard/admin",
            Self::StartupDashboard => "/dashboard/startup",
            Self::CreateMarketplace => "/dashboard/startup/create",
        }
    }

    /// The home dashboard for a role.
    pub fn dashboard_for(role: Role) -> Self {
        match role {
            Role::Admin => Self::AdminDashboard,
            Role::Startup => Self::StartupDashboard,
        }
    }

    /// The role a view requires, or `None` for public views.
    pub fn required_role(self) -> Option<Role> {
        match self {
            Self::Landing | Self::Login => None,
            Self::AdminDashboard => Some(Role::Admin),
            Self::StartupDashboard | Self::CreateMarketplace => Some(Role::Startup),
        }
    }
}

/// Result of evaluating the guard on entry to a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Redirect(Route),
}

/// Decide whether `session` may see `route`.
///
/// Public views always render. Otherwise no session goes to login, and a
/// session for the other role goes to that role's own dashboard.
pub fn guard_route(session: Option<&Session>, route: Route) -> GuardOutcome {
    let Some(required) = route.required_role() else {
        return GuardOutcome::Render;
    };
    match session {
        None => GuardOutcome::Redirect(Route::Login),
        Some(s) if s.role != required => GuardOutcome::Redirect(Route::dashboard_for(s.role)),
        Some(_) => GuardOutcome::Render,
    }
}

/// One entry in a dashboard shell's sidebar. `route` is `None` for entries
/// that are placeholders in the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub route: Option<Route>,
}

const fn nav(label: &'static str, route: Option<Route>) -> NavItem {
    NavItem { label, route }
}

const ADMIN_NAV: [NavItem; 6] = [
    nav("Dashboard", Some(Route::AdminDashboard)),
    nav("Marketplaces", None),
    nav("Users", None),
    nav("Analytics", None),
    nav("Reports", None),
    nav("Settings", None),
];

const STARTUP_NAV: [NavItem; 5] = [
    nav("Dashboard", Some(Route::StartupDashboard)),
    nav("Create Marketplace", Some(Route::CreateMarketplace)),
    nav("Submissions", None),
    nav("Settings", None),
    nav("Billing", None),
];

/// Static description of a dashboard shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardShell {
    pub title: &'static str,
    pub role: Role,
    pub nav: &'static [NavItem],
}

impl DashboardShell {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self {
                title: "NFTfy Admin",
                role,
                nav: &ADMIN_NAV,
            },
            Role::Startup => Self {
                title: "NFTfy",
                role,
                nav: &STARTUP_NAV,
            },
        }
    }
}
