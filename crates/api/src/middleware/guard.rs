//! Route guard extractors for the dashboard shells.
//!
//! Each extractor evaluates [`guard_route`] for the view it protects; the
//! required role comes from [`Route::required_role`]. A redirect
//! outcome rejects the request with `303 See Other` pointing at the view the
//! caller should go to instead.

use axum::extract::FromRequestParts;
use axum::http::header::LOCATION;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use nftfy_core::navigation::{guard_route, GuardOutcome, Route};
use serde_json::json;

use super::session::{AuthSession, CurrentSession};
use crate::state::AppState;

/// API path serving each logical view.
pub fn api_path(route: Route) -> &'static str {
    match route {
        Route::Landing => "/",
        Route::Login => "/api/v1/auth/login",
        Route::AdminDashboard => "/api/v1/dashboard/admin",
        Route::StartupDashboard => "/api/v1/dashboard/startup",
        Route::CreateMarketplace => "/api/v1/dashboard/startup/create",
    }
}

/// Rejection produced when the guard sends the caller elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuardRedirect(pub Route);

impl IntoResponse for GuardRedirect {
    fn into_response(self) -> Response {
        let location = api_path(self.0);
        let body = json!({
            "redirect": self.0.path(),
            "location": location,
        });
        (StatusCode::SEE_OTHER, [(LOCATION, location)], Json(body)).into_response()
    }
}

fn enforce(auth: Option<AuthSession>, route: Route) -> Result<AuthSession, GuardRedirect> {
    match guard_route(auth.as_ref().map(|a| &a.session), route) {
        GuardOutcome::Render => auth.ok_or(GuardRedirect(Route::Login)),
        GuardOutcome::Redirect(to) => {
            tracing::debug!(
                view = route.path(),
                email = auth.as_ref().map(|a| a.session.email.as_str()),
                to = to.path(),
                "Route guard redirect"
            );
            Err(GuardRedirect(to))
        }
    }
}

/// Requires an `admin` session.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(auth): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthSession);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = GuardRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentSession(auth) = match CurrentSession::from_request_parts(parts, state).await {
            Ok(current) => current,
            Err(never) => match never {},
        };
        enforce(auth, Route::AdminDashboard).map(RequireAdmin)
    }
}

/// Requires a `startup` session. Also guards the nested wizard.
pub struct RequireStartup(pub AuthSession);

impl FromRequestParts<AppState> for RequireStartup {
    type Rejection = GuardRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentSession(auth) = match CurrentSession::from_request_parts(parts, state).await {
            Ok(current) => current,
            Err(never) => match never {},
        };
        enforce(auth, Route::StartupDashboard).map(RequireStartup)
    }
}
