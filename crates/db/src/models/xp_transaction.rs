//! XP audit-log model (PRD-18).

use cribwise_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the append-only `xp_transactions` table.
///
/// Rows are created once per awarded action and never mutated or
/// deleted. `new_total` snapshots the XP balance after the award.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct XpTransaction {
    pub id: DbId,
    pub user_id: DbId,
    pub amount: i64,
    pub reason: String,
    pub new_total: i64,
    pub created_at: Timestamp,
}
