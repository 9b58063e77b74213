//! Route definitions for the create-marketplace wizard.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::wizard;
use crate::state::AppState;

/// Routes mounted at `/dashboard/startup/create`. All require a startup
/// session.
///
/// ```text
/// GET    /         -> get_wizard
/// PATCH  /         -> update_wizard
/// DELETE /         -> discard_wizard
/// POST   /next     -> next_step
/// POST   /back     -> previous_step
/// POST   /submit   -> submit_wizard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(wizard::get_wizard)
                .patch(wizard::update_wizard)
                .delete(wizard::discard_wizard),
        )
        .route("/next", post(wizard::next_step))
        .route("/back", post(wizard::previous_step))
        .route("/submit", post(wizard::submit_wizard))
}
