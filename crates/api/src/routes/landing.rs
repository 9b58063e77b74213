use axum::routing::get;
use axum::Router;

use crate::handlers::landing;
use crate::state::AppState;

/// Mount the landing view at the root (not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(landing::landing))
}
