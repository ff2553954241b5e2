//! Route definitions for the gamification endpoints (PRD-18, PRD-19).
//!
//! All endpoints require authentication; the direct award additionally
//! requires the admin role.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::gamification;
use crate::state::AppState;

/// Routes mounted at `/user/gamification`.
///
/// ```text
/// POST   /login-ping        -> login_ping
/// POST   /actions           -> track_action
/// GET    /stats             -> get_stats
/// GET    /leaderboard       -> get_leaderboard
/// GET    /xp/transactions   -> list_transactions
/// POST   /xp/award          -> award_xp (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login-ping", post(gamification::login_ping))
        .route("/actions", post(gamification::track_action))
        .route("/stats", get(gamification::get_stats))
        .route("/leaderboard", get(gamification::get_leaderboard))
        .route("/xp/transactions", get(gamification::list_transactions))
        .route("/xp/award", post(gamification::award_xp))
}
