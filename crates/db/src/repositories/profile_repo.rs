//! Repository for the `user_profiles` table (PRD-18).

use cribwise_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{CreateUserProfile, UserProfile};

/// Column list for `user_profiles` queries.
const COLUMNS: &str = "\
    id, display_name, university, xp, level, login_streak, \
    last_login_at, achievements, created_at, updated_at";

/// Provides CRUD operations for user gamification profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a new profile row with default gamification counters.
    pub async fn create(
        pool: &PgPool,
        input: &CreateUserProfile,
    ) -> Result<UserProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_profiles (display_name, university) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(&input.display_name)
            .bind(&input.university)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by id. Returns `None` if no profile exists.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UserProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_profiles WHERE id = $1");
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Persist a recomputed XP total and its derived level in one UPDATE,
    /// so the two fields are never observed out of sync.
    pub async fn update_progress(
        pool: &PgPool,
        id: DbId,
        xp: i64,
        level: i32,
    ) -> Result<UserProfile, sqlx::Error> {
        let query = format!(
            "UPDATE user_profiles \
             SET xp = $2, level = $3, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(id)
            .bind(xp)
            .bind(level)
            .fetch_one(pool)
            .await
    }

    /// Merge achievement codes into the stored set.
    ///
    /// Takes the union of the existing array and the new codes via jsonb
    /// concatenation, deduplicated with a subquery. Codes are never
    /// removed, even if one was granted erroneously.
    pub async fn merge_achievements(
        pool: &PgPool,
        id: DbId,
        codes: &[String],
    ) -> Result<UserProfile, sqlx::Error> {
        let query = format!(
            "UPDATE user_profiles \
             SET achievements = (\
                 SELECT COALESCE(jsonb_agg(DISTINCT elem), '[]'::jsonb) \
                 FROM jsonb_array_elements(achievements || $2) AS elem\
             ), \
             updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(id)
            .bind(serde_json::to_value(codes).unwrap_or_default())
            .fetch_one(pool)
            .await
    }

    /// Record a login: the new streak value and `last_login_at = NOW()`
    /// are written together.
    pub async fn record_login(
        pool: &PgPool,
        id: DbId,
        streak: i32,
    ) -> Result<UserProfile, sqlx::Error> {
        let query = format!(
            "UPDATE user_profiles \
             SET login_streak = $2, last_login_at = NOW(), updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(id)
            .bind(streak)
            .fetch_one(pool)
            .await
    }

    /// Top `limit` profiles by XP descending.
    ///
    /// Ties in xp fall back to the database's default ordering, which is
    /// stable but unspecified.
    pub async fn leaderboard(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<UserProfile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_profiles \
             ORDER BY xp DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, UserProfile>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
