//! Sidebar endpoints.

use super::{json_body, ApiRejection};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use shared::sidemenu::{bottom_section, BottomSection, Session};

/// Creates the sidebar routes.
///
/// # Routes
///
/// - `POST /api/v1/sidemenu/bottom` - Bottom section for a session snapshot
pub fn sidemenu_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/sidemenu/bottom", post(get_bottom_section))
        .with_state(state)
}

/// Handler for POST /api/v1/sidemenu/bottom.
async fn get_bottom_section(
    State(state): State<AppState>,
    payload: Result<Json<Session>, JsonRejection>,
) -> Result<Json<BottomSection>, ApiRejection> {
    let session = json_body(payload)?;
    Ok(Json(bottom_section(&session, state.bottom_nav())))
}
