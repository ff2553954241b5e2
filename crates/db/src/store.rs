//! Postgres implementation of the checklist store seam (PRD-20).

use async_trait::async_trait;

use cribwise_core::checklist::{ChecklistItemState, ChecklistScope, ChecklistStore};
use cribwise_core::error::CoreError;
use cribwise_core::types::DbId;

use crate::repositories::ChecklistRepo;
use crate::DbPool;

/// Durable checklist store backed by the `checklists` table.
pub struct PgChecklistStore {
    pool: DbPool,
}

impl PgChecklistStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChecklistStore for PgChecklistStore {
    async fn load(
        &self,
        user_id: DbId,
        scope: &ChecklistScope,
    ) -> Result<Option<Vec<ChecklistItemState>>, CoreError> {
        let row = ChecklistRepo::find(&self.pool, user_id, &scope.storage_key())
            .await
            .map_err(|e| CoreError::Internal(e.to_string()))?;

        match row {
            Some(row) => {
                let items = row.item_states().map_err(|e| {
                    tracing::error!(
                        user_id,
                        scope_key = %row.scope_key,
                        error = %e,
                        "Stored checklist items failed to decode"
                    );
                    CoreError::Internal(e.to_string())
                })?;
                Ok(Some(items))
            }
            None => Ok(None),
        }
    }

    async fn store(
        &self,
        user_id: DbId,
        scope: &ChecklistScope,
        items: Vec<ChecklistItemState>,
    ) -> Result<Vec<ChecklistItemState>, CoreError> {
        let json = serde_json::to_value(&items)
            .map_err(|e| CoreError::Internal(e.to_string()))?;

        let row = ChecklistRepo::upsert(&self.pool, user_id, &scope.storage_key(), &json)
            .await
            .map_err(|e| CoreError::Internal(e.to_string()))?;

        row.item_states()
            .map_err(|e| CoreError::Internal(e.to_string()))
    }
}
