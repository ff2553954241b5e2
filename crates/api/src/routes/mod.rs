pub mod checklist;
pub mod gamification;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /user/gamification/login-ping          record login, maintain streak
/// /user/gamification/actions             track a rewarded action
/// /user/gamification/stats               aggregated dashboard stats
/// /user/gamification/leaderboard         top users by XP
/// /user/gamification/xp/transactions     recent audit entries
/// /user/gamification/xp/award            direct award (admin only)
///
/// /user/checklist                        scoped checklist payload
/// /user/checklist/items                  single-step upsert
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/user/gamification", gamification::router())
        .nest("/user/checklist", checklist::router())
}
