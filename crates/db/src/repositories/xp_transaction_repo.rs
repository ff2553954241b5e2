//! Repository for the append-only `xp_transactions` table (PRD-18).

use cribwise_core::types::DbId;
use sqlx::PgPool;

use crate::models::xp_transaction::XpTransaction;

/// Column list for `xp_transactions` queries.
const COLUMNS: &str = "id, user_id, amount, reason, new_total, created_at";

/// Provides append and listing for the XP audit log.
///
/// There is no update or delete: the log is an audit trail. Callers
/// treat insert failures as best-effort and never fail the award that
/// produced them.
pub struct XpTransactionRepo;

impl XpTransactionRepo {
    /// Append one audit row.
    pub async fn insert(
        pool: &PgPool,
        user_id: DbId,
        amount: i64,
        reason: &str,
        new_total: i64,
    ) -> Result<XpTransaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO xp_transactions (user_id, amount, reason, new_total) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, XpTransaction>(&query)
            .bind(user_id)
            .bind(amount)
            .bind(reason)
            .bind(new_total)
            .fetch_one(pool)
            .await
    }

    /// Most recent entries for a user, newest first.
    pub async fn list_recent(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
    ) -> Result<Vec<XpTransaction>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM xp_transactions \
             WHERE user_id = $1 \
             ORDER BY created_at DESC \
             LIMIT $2"
        );
        sqlx::query_as::<_, XpTransaction>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Number of audit rows for a user. Used by tests to assert that a
    /// rejected action performed no writes.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM xp_transactions WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }
}
