//! Bearer-token session extractors for Axum handlers.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, OptionalFromRequestParts};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use nftfy_core::error::CoreError;
use nftfy_core::session::Session;

use crate::auth::token::hash_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// The Bearer token from the `Authorization` header, if well-formed.
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
}

/// A signed-in caller.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Plaintext token as presented by the client.
    pub token: String,
    /// SHA-256 of `token`; keys server-side per-client state.
    pub token_hash: String,
    pub session: Session,
}

/// The caller's session, or `None` when the token is missing, unknown, or
/// its stored record does not parse.
///
/// ```ignore
/// async fn whoami(CurrentSession(auth): CurrentSession) -> AppResult<Json<()>> {
///     if let Some(auth) = auth {
///         tracing::info!(email = %auth.session.email, "signed in");
///     }
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Option<AuthSession>);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            return Ok(CurrentSession(None));
        };

        let auth = state.sessions.read(token).await.map(|session| AuthSession {
            token: token.to_string(),
            token_hash: hash_session_token(token),
            session,
        });

        Ok(CurrentSession(auth))
    }
}

/// A Bearer token that must be present, whether or not it is still valid.
///
/// As `Option<AuthToken>` it never rejects: a missing or malformed header
/// is `None`.
#[derive(Debug, Clone)]
pub struct AuthToken(pub String);

impl FromRequestParts<AppState> for AuthToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        bearer_token(parts)
            .map(|t| AuthToken(t.to_string()))
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing or malformed Authorization header. Expected: Bearer <token>".into(),
                ))
            })
    }
}

impl OptionalFromRequestParts<AppState> for AuthToken {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(bearer_token(parts).map(|t| AuthToken(t.to_string())))
    }
}
