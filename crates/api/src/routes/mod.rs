pub mod auth;
pub mod dashboard;
pub mod health;
pub mod landing;
pub mod wizard;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login view, sign in (public)
/// /auth/logout                                     sign out (requires token)
/// /auth/session                                    current session
///
/// /dashboard/admin                                 admin shell (admin only)
/// /dashboard/startup                               startup shell (startup only)
/// /dashboard/startup/create                        wizard get, update, discard
/// /dashboard/startup/create/next                   advance (POST)
/// /dashboard/startup/create/back                   go back (POST)
/// /dashboard/startup/create/submit                 submit (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login, logout, session).
        .nest("/auth", auth::router())
        // Role-guarded dashboard shells and the wizard inside the startup shell.
        .nest("/dashboard", dashboard::router())
}
