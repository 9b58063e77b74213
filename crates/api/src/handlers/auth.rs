//! Handlers for the `/auth` resource (login, logout, current session).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use nftfy_core::credentials::DEMO_ACCOUNTS;
use nftfy_core::error::CoreError;
use nftfy_core::navigation::Route;
use nftfy_core::session::Session;
use serde::{Deserialize, Serialize};

use crate::auth::token::hash_session_token;
use crate::error::{AppError, AppResult};
use crate::middleware::session::{AuthToken, CurrentSession};
use crate::response::DataResponse;
use crate::state::AppState;

/// Shown for every failed login, whichever field was wrong.
const INVALID_CREDENTIALS: &str =
    "Invalid email or password. Try startup@example.com / startup123 or admin@example.com / admin123";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Opaque token; send back as `Authorization: Bearer <token>`.
    pub token: String,
    pub session: Session,
    /// Dashboard view for the session's role.
    pub redirect: &'static str,
}

/// What the login view shows before the user signs in.
#[derive(Debug, Serialize)]
pub struct LoginPage {
    pub title: &'static str,
    pub demo_accounts: Vec<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/auth/login
///
/// The login view, including the demo account hints.
pub async fn login_page() -> Json<LoginPage> {
    Json(LoginPage {
        title: "NFTfy",
        demo_accounts: DEMO_ACCOUNTS
            .iter()
            .map(|a| format!("{} / {}", a.email, a.password))
            .collect(),
    })
}

/// POST /api/v1/auth/login
///
/// Check the credentials and write the session. A caller that already holds
/// a known token keeps it and its stored session is overwritten; anyone else
/// gets a fresh token. A failed attempt leaves any stored session untouched.
pub async fn login(
    State(state): State<AppState>,
    presented: Option<AuthToken>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let Some(role) = state.credentials.verify(&input.email, &input.password) else {
        tracing::info!(email = %input.email, "Login failed");
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    };

    let session = Session {
        email: input.email,
        role,
    };

    let reused = match presented {
        Some(AuthToken(token)) => {
            let previous = state.sessions.read(&token).await;
            if state.sessions.overwrite(&token, &session).await {
                // The wizard belongs to whoever was signed in before.
                if previous.as_ref() != Some(&session) {
                    state.wizards.discard(&hash_session_token(&token)).await;
                }
                Some(token)
            } else {
                None
            }
        }
        None => None,
    };
    let reused_token = reused.is_some();
    let token = match reused {
        Some(token) => token,
        None => state.sessions.sign_in(&session).await.0,
    };

    tracing::info!(email = %session.email, role = %role, reused_token, "Login succeeded");

    Ok(Json(LoginResponse {
        token,
        session,
        redirect: Route::dashboard_for(role).path(),
    }))
}

/// POST /api/v1/auth/logout
///
/// Clear the caller's session and discard their wizard. Returns 204 No
/// Content even if the token was already gone.
pub async fn logout(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
) -> AppResult<StatusCode> {
    let hash = hash_session_token(&token);
    let known = state.sessions.sign_out(&token).await;
    let had_wizard = state.wizards.discard(&hash).await;

    tracing::info!(known, had_wizard, "Logged out");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/session
///
/// The caller's current session, or 401 if not signed in.
pub async fn current_session(
    CurrentSession(auth): CurrentSession,
) -> AppResult<Json<DataResponse<Session>>> {
    let auth = auth.ok_or_else(|| {
        AppError::Core(CoreError::Unauthorized("Not signed in".into()))
    })?;
    Ok(Json(DataResponse { data: auth.session }))
}
