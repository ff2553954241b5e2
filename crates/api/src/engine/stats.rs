//! Aggregated gamification stats (PRD-19).

use sqlx::PgPool;

use cribwise_core::degrade::Degradable;
use cribwise_core::types::DbId;
use cribwise_db::models::stats::UserStats;
use cribwise_db::repositories::{ActivityRepo, ProfileRepo};

/// Fetch the stats dashboard payload for a user.
///
/// The four activity counts are fetched concurrently and each defaults
/// to zero independently when its query fails; a profile read failure
/// degrades the whole payload to the zeroed default. The HTTP caller
/// always receives a payload, never an error.
pub async fn get_user_stats(pool: &PgPool, user_id: DbId) -> Degradable<UserStats> {
    let profile = match ProfileRepo::find_by_id(pool, user_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            tracing::debug!(user_id, "No profile for stats request");
            return Degradable::Degraded(UserStats::default());
        }
        Err(e) => {
            tracing::error!(user_id, error = %e, "Profile read failed for stats request");
            return Degradable::Degraded(UserStats::default());
        }
    };

    let (views, messages, downloads, connections) = tokio::join!(
        ActivityRepo::count_property_views(pool, user_id),
        ActivityRepo::count_messages_sent(pool, user_id),
        ActivityRepo::count_material_downloads(pool, user_id),
        ActivityRepo::count_connections(pool, user_id),
    );

    let mut degraded = false;
    let mut count_or_zero = |label: &'static str, result: Result<i64, sqlx::Error>| match result {
        Ok(count) => count,
        Err(e) => {
            degraded = true;
            tracing::warn!(user_id, count = label, error = %e, "Count query failed, defaulting to 0");
            0
        }
    };

    let properties_viewed = count_or_zero("property_views", views);
    let messages_sent = count_or_zero("messages_sent", messages);
    let materials_downloaded = count_or_zero("material_downloads", downloads);
    let connections_made = count_or_zero("connections", connections);

    let stats = UserStats {
        xp: profile.xp,
        level: profile.level,
        login_streak: profile.login_streak,
        achievements: profile.achievement_codes(),
        properties_viewed,
        messages_sent,
        materials_downloaded,
        connections_made,
    };

    if degraded {
        Degradable::Degraded(stats)
    } else {
        Degradable::Fresh(stats)
    }
}
