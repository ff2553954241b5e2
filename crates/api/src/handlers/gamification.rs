//! Handlers for the gamification endpoints (PRD-18, PRD-19).
//!
//! All endpoints require authentication. Awards and action tracking
//! propagate errors; the streak ping and stats read never fail toward
//! the client.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use cribwise_core::types::DbId;
use cribwise_db::models::profile::LeaderboardEntry;
use cribwise_db::repositories::{ProfileRepo, XpTransactionRepo};

use crate::engine;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default page size for the leaderboard and the audit listing.
const DEFAULT_PAGE_SIZE: i64 = 10;
/// Largest page either listing will serve.
const MAX_PAGE_SIZE: i64 = 100;

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// DTO for tracking a rewarded action.
#[derive(Debug, Deserialize)]
pub struct TrackActionRequest {
    pub action: String,
}

/// DTO for a direct XP award (admin tooling).
#[derive(Debug, Deserialize)]
pub struct AwardXpRequest {
    pub user_id: DbId,
    pub amount: i64,
    pub reason: String,
}

/// Query parameters for paged listings.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub limit: Option<i64>,
}

impl PageQuery {
    /// Resolve the page size, rejecting out-of-range values.
    fn resolve(&self) -> AppResult<i64> {
        let limit = self.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        if !(1..=MAX_PAGE_SIZE).contains(&limit) {
            return Err(AppError::BadRequest(format!(
                "limit must be between 1 and {MAX_PAGE_SIZE}, got {limit}"
            )));
        }
        Ok(limit)
    }
}

// ---------------------------------------------------------------------------
// POST /user/gamification/login-ping
// ---------------------------------------------------------------------------

/// Record a login ping for the authenticated user and maintain their
/// consecutive-day streak. Always returns a streak payload; internal
/// failures degrade to `{ streak: 0 }`.
pub async fn login_ping(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let update = engine::streak::update_login_streak(&state.pool, auth.user_id).await;

    if update.is_degraded() {
        tracing::debug!(user_id = auth.user_id, "Serving degraded streak payload");
    }

    Ok(Json(DataResponse {
        data: update.into_inner(),
    }))
}

// ---------------------------------------------------------------------------
// POST /user/gamification/actions
// ---------------------------------------------------------------------------

/// Track a rewarded action for the authenticated user.
///
/// Unknown action keys are rejected with 400 `INVALID_ACTION` before any
/// write happens.
pub async fn track_action(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<TrackActionRequest>,
) -> AppResult<impl IntoResponse> {
    let award = engine::xp::track_action(&state.pool, auth.user_id, &input.action).await?;

    tracing::info!(
        user_id = auth.user_id,
        action = %input.action,
        new_xp = award.new_xp,
        "Action tracked"
    );

    Ok(Json(DataResponse { data: award }))
}

// ---------------------------------------------------------------------------
// POST /user/gamification/xp/award
// ---------------------------------------------------------------------------

/// Directly award XP to any user. Admin-only; backs moderation and
/// compensation tooling.
pub async fn award_xp(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<AwardXpRequest>,
) -> AppResult<impl IntoResponse> {
    auth.require_admin()?;

    let award =
        engine::xp::award_xp(&state.pool, input.user_id, input.amount, &input.reason).await?;

    tracing::info!(
        admin_id = auth.user_id,
        user_id = input.user_id,
        amount = input.amount,
        reason = %input.reason,
        "Direct XP award"
    );

    Ok(Json(DataResponse { data: award }))
}

// ---------------------------------------------------------------------------
// GET /user/gamification/stats
// ---------------------------------------------------------------------------

/// Aggregated gamification stats for the authenticated user. Degrades to
/// a zeroed payload on internal failure rather than erroring.
pub async fn get_stats(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let stats = engine::stats::get_user_stats(&state.pool, auth.user_id).await;

    if stats.is_degraded() {
        tracing::debug!(user_id = auth.user_id, "Serving degraded stats payload");
    }

    Ok(Json(DataResponse {
        data: stats.into_inner(),
    }))
}

// ---------------------------------------------------------------------------
// GET /user/gamification/leaderboard
// ---------------------------------------------------------------------------

/// Top users by XP, annotated with their 1-based page position.
pub async fn get_leaderboard(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<impl IntoResponse> {
    let limit = query.resolve()?;

    let profiles = ProfileRepo::leaderboard(&state.pool, limit).await?;
    let entries = LeaderboardEntry::rank_page(profiles);

    Ok(Json(DataResponse { data: entries }))
}

// ---------------------------------------------------------------------------
// GET /user/gamification/xp/transactions
// ---------------------------------------------------------------------------

/// Recent XP audit entries for the authenticated user, newest first.
pub async fn list_transactions(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<impl IntoResponse> {
    let limit = query.resolve()?;

    let entries = XpTransactionRepo::list_recent(&state.pool, auth.user_id, limit).await?;

    Ok(Json(DataResponse { data: entries }))
}
