//! Route definitions for the checklist endpoints (PRD-20).
//!
//! All endpoints require authentication.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::checklist;
use crate::state::AppState;

/// Routes mounted at `/user/checklist`.
///
/// ```text
/// GET    /        -> get_checklist (?programme_id= selects the scope)
/// PUT    /items   -> upsert_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(checklist::get_checklist))
        .route("/items", put(checklist::upsert_item))
}
