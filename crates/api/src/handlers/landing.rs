//! Public landing view.

use axum::Json;
use nftfy_core::navigation::Route;
use serde::Serialize;

use crate::middleware::guard::api_path;

#[derive(Debug, Serialize)]
pub struct LandingPage {
    pub title: &'static str,
    pub tagline: &'static str,
    /// Where the "Login" call to action leads.
    pub login: &'static str,
}

/// GET /
pub async fn landing() -> Json<LandingPage> {
    Json(LandingPage {
        title: "NFTfy",
        tagline: "Your No-Code Gateway to Web3",
        login: api_path(Route::Login),
    })
}
