//! Count queries over the activity tables (PRD-19).
//!
//! The stats dashboard needs four independent counts. Each is a separate
//! query so a failure in one table cannot corrupt the others; the engine
//! defaults a failed count to zero on its own.

use cribwise_core::types::DbId;
use sqlx::PgPool;

/// Read-only count queries for user activity.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Number of property detail views recorded for a user.
    pub async fn count_property_views(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM property_views WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Number of messages sent by a user.
    pub async fn count_messages_sent(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE sender_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Number of study materials downloaded by a user.
    pub async fn count_material_downloads(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM material_downloads WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Number of roommate connections made by a user.
    pub async fn count_connections(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM connections WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }
}
