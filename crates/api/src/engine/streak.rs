//! Login-streak maintenance (PRD-18).

use serde::Serialize;
use sqlx::PgPool;

use cribwise_core::degrade::Degradable;
use cribwise_core::error::CoreError;
use cribwise_core::rewards;
use cribwise_core::streak::StreakDecision;
use cribwise_core::types::DbId;
use cribwise_db::repositories::ProfileRepo;

use crate::engine::xp;
use crate::error::AppResult;

/// Result of a login ping.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StreakUpdate {
    pub streak: i32,
}

/// Record a login ping and maintain the consecutive-day streak.
///
/// Lenient path: any internal failure degrades to `{ streak: 0 }` rather
/// than surfacing an error, so dashboards render a zero instead of
/// breaking. The degraded case stays distinguishable for tests and
/// logging via [`Degradable`].
pub async fn update_login_streak(pool: &PgPool, user_id: DbId) -> Degradable<StreakUpdate> {
    match try_update(pool, user_id).await {
        Ok(streak) => Degradable::Fresh(StreakUpdate { streak }),
        Err(e) => {
            tracing::error!(user_id, error = %e, "Login streak update failed");
            Degradable::Degraded(StreakUpdate { streak: 0 })
        }
    }
}

async fn try_update(pool: &PgPool, user_id: DbId) -> AppResult<i32> {
    let profile = ProfileRepo::find_by_id(pool, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "UserProfile",
            id: user_id,
        })?;

    let now = chrono::Utc::now();
    let decision = StreakDecision::evaluate(profile.last_login_at, now);

    if decision == StreakDecision::SameDay {
        // Repeat ping inside the same 24h window: no XP, no timestamp touch.
        tracing::debug!(user_id, streak = profile.login_streak, "Same-day login ping");
        return Ok(profile.login_streak);
    }

    let next = decision.next_streak(profile.login_streak);
    ProfileRepo::record_login(pool, user_id, next).await?;

    if decision == StreakDecision::Extend {
        xp::track_action(pool, user_id, rewards::ACTION_STREAK_MAINTAINED).await?;
    }

    // Flat daily award for every ping outside the same-day window.
    xp::track_action(pool, user_id, rewards::ACTION_DAILY_LOGIN).await?;

    tracing::info!(user_id, streak = next, decision = ?decision, "Login streak updated");
    Ok(next)
}
