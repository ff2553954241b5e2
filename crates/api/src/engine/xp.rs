//! XP awarding and action tracking (PRD-18).

use serde::Serialize;
use sqlx::PgPool;

use cribwise_core::error::CoreError;
use cribwise_core::leveling;
use cribwise_core::rewards;
use cribwise_core::types::DbId;
use cribwise_db::repositories::{ProfileRepo, XpTransactionRepo};

use crate::error::AppResult;

/// Outcome of a successful XP award.
#[derive(Debug, Clone, Serialize)]
pub struct XpAward {
    pub new_xp: i64,
    pub new_level: i32,
    pub leveled_up: bool,
    /// Bonus reported when a level boundary was crossed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level_bonus: Option<i64>,
}

/// Award `amount` XP to a user and persist the derived level with it.
///
/// Only the profile read and the progress update can fail the award.
/// The audit-log append and the level-up cascade are best-effort: their
/// failures are logged and the award still reports success. Negative
/// amounts are accepted and simply decrease the total.
///
/// Two concurrent awards for the same user can race on the
/// read-modify-write of the XP total; the counter is soft, so no locking
/// is taken.
pub async fn award_xp(
    pool: &PgPool,
    user_id: DbId,
    amount: i64,
    reason: &str,
) -> AppResult<XpAward> {
    let profile = ProfileRepo::find_by_id(pool, user_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "UserProfile",
            id: user_id,
        })?;

    let new_xp = profile.xp + amount;
    let new_level = leveling::level_for_xp(new_xp);
    let leveled_up = new_level > profile.level;

    ProfileRepo::update_progress(pool, user_id, new_xp, new_level).await?;

    // Best-effort audit append. Losing an audit row must not undo the award.
    if let Err(e) = XpTransactionRepo::insert(pool, user_id, amount, reason, new_xp).await {
        tracing::warn!(
            user_id,
            amount,
            reason,
            error = %e,
            "Failed to append XP transaction"
        );
    }

    let mut level_bonus = None;
    if leveled_up {
        level_bonus = Some(leveling::level_bonus(new_level));

        if let Err(e) =
            unlock_level_achievements(pool, user_id, new_level, &profile.achievement_codes()).await
        {
            tracing::warn!(
                user_id,
                new_level,
                error = %e,
                "Level-up achievement check failed"
            );
        }

        tracing::info!(user_id, new_level, new_xp, "User leveled up");
    }

    Ok(XpAward {
        new_xp,
        new_level,
        leveled_up,
        level_bonus,
    })
}

/// Award the configured XP for a tracked action.
///
/// Unknown action keys fail with `InvalidAction` before any write. The
/// audit reason is the humanized action key.
pub async fn track_action(pool: &PgPool, user_id: DbId, action: &str) -> AppResult<XpAward> {
    let amount = rewards::reward_for_action(action)?;
    award_xp(pool, user_id, amount, &rewards::humanize_action(action)).await
}

/// Merge every achievement code qualified at `level` into the stored set.
///
/// The set is a union: codes already held are skipped and nothing is
/// ever removed.
async fn unlock_level_achievements(
    pool: &PgPool,
    user_id: DbId,
    level: i32,
    existing: &[String],
) -> Result<(), sqlx::Error> {
    let newly: Vec<String> = leveling::newly_qualified(level, existing)
        .into_iter()
        .map(str::to_string)
        .collect();

    if newly.is_empty() {
        return Ok(());
    }

    ProfileRepo::merge_achievements(pool, user_id, &newly).await?;
    tracing::info!(user_id, level, achievements = ?newly, "Achievements unlocked");
    Ok(())
}
