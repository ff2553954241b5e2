//! Checklist payload row model and DTOs (PRD-20).

use cribwise_core::checklist::ChecklistItemState;
use cribwise_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `checklists` table: all item state for one
/// `(user_id, scope_key)` pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChecklistRow {
    pub id: DbId,
    pub user_id: DbId,
    pub scope_key: String,
    pub items: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ChecklistRow {
    /// Decode the JSONB item array into typed item states.
    pub fn item_states(&self) -> Result<Vec<ChecklistItemState>, serde_json::Error> {
        serde_json::from_value(self.items.clone())
    }
}

/// DTO for a single step state as submitted by the client.
///
/// `updated_at` is server-assigned, so it is absent here.
#[derive(Debug, Clone, Deserialize)]
pub struct ChecklistItemInput {
    pub step_id: String,
    pub done: bool,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub due_date: Option<chrono::NaiveDate>,
}

impl ChecklistItemInput {
    /// Stamp the input into a stored item state.
    pub fn into_state(self, now: Timestamp) -> ChecklistItemState {
        ChecklistItemState {
            step_id: self.step_id,
            done: self.done,
            note: self.note,
            due_date: self.due_date,
            updated_at: now,
        }
    }
}

/// DTO for the single-step upsert request. `programme_id` selects the
/// programme scope; absent means the generic onboarding checklist.
#[derive(Debug, Deserialize)]
pub struct UpsertChecklistItem {
    #[serde(default)]
    pub programme_id: Option<DbId>,
    pub item: ChecklistItemInput,
}
