//! Route definitions for the dashboard shells.

use axum::routing::get;
use axum::Router;

use super::wizard;
use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET /admin     -> admin_dashboard (admin only)
/// GET /startup   -> startup_dashboard (startup only)
///
/// /startup/create  -> wizard routes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin", get(dashboard::admin_dashboard))
        .route("/startup", get(dashboard::startup_dashboard))
        .nest("/startup/create", wizard::router())
}
