//! Handlers for the admin and startup dashboard shells.

use axum::extract::State;
use axum::Json;
use nftfy_core::navigation::{DashboardShell, NavItem};
use nftfy_core::roles::Role;
use nftfy_core::wizard::WizardStep;
use serde::Serialize;

use crate::middleware::guard::{RequireAdmin, RequireStartup};
use crate::response::DataResponse;
use crate::state::AppState;

/// A sidebar entry. `path` is absent for entries that lead nowhere yet.
#[derive(Debug, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: Option<&'static str>,
}

impl From<&NavItem> for NavLink {
    fn from(item: &NavItem) -> Self {
        Self {
            label: item.label,
            path: item.route.map(|r| r.path()),
        }
    }
}

/// Dashboard shell payload.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub email: String,
    pub role: Role,
    pub nav: Vec<NavLink>,
    /// Step of the caller's unfinished wizard, startup shell only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wizard_step: Option<WizardStep>,
}

fn shell_view(role: Role, email: String) -> DashboardView {
    let shell = DashboardShell::for_role(role);
    DashboardView {
        title: shell.title,
        email,
        role,
        nav: shell.nav.iter().map(NavLink::from).collect(),
        wizard_step: None,
    }
}

/// GET /api/v1/dashboard/admin
pub async fn admin_dashboard(
    RequireAdmin(auth): RequireAdmin,
) -> Json<DataResponse<DashboardView>> {
    Json(DataResponse {
        data: shell_view(Role::Admin, auth.session.email),
    })
}

/// GET /api/v1/dashboard/startup
pub async fn startup_dashboard(
    State(state): State<AppState>,
    RequireStartup(auth): RequireStartup,
) -> Json<DataResponse<DashboardView>> {
    let mut view = shell_view(Role::Startup, auth.session.email);
    if let Some(slot) = state.wizards.get(&auth.token_hash).await {
        view.wizard_step = Some(slot.state.lock().await.current_step());
    }
    Json(DataResponse { data: view })
}
