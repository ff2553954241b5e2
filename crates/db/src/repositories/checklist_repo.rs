//! Repository for the `checklists` table (PRD-20).

use cribwise_core::types::DbId;
use sqlx::PgPool;

use crate::models::checklist::ChecklistRow;

/// Column list for `checklists` queries.
const COLUMNS: &str = "id, user_id, scope_key, items, created_at, updated_at";

/// Provides lookup and whole-payload upsert for checklist state.
pub struct ChecklistRepo;

impl ChecklistRepo {
    /// Find the row for `(user_id, scope_key)`. Returns `None` if no
    /// state has ever been recorded for the pair.
    pub async fn find(
        pool: &PgPool,
        user_id: DbId,
        scope_key: &str,
    ) -> Result<Option<ChecklistRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM checklists \
             WHERE user_id = $1 AND scope_key = $2"
        );
        sqlx::query_as::<_, ChecklistRow>(&query)
            .bind(user_id)
            .bind(scope_key)
            .fetch_optional(pool)
            .await
    }

    /// Write the full item list for the pair, creating the row on first
    /// write.
    ///
    /// The whole list is replaced: concurrent upserts to the same scope
    /// are last-writer-wins on the entire payload, not a per-step merge.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        scope_key: &str,
        items: &serde_json::Value,
    ) -> Result<ChecklistRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO checklists (user_id, scope_key, items) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (user_id, scope_key) DO UPDATE \
             SET items = EXCLUDED.items, updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChecklistRow>(&query)
            .bind(user_id)
            .bind(scope_key)
            .bind(items)
            .fetch_one(pool)
            .await
    }
}
