//! Admissions and onboarding checklist state (PRD-20).
//!
//! A user's checklist progress is namespaced by a [`ChecklistScope`]: the
//! generic onboarding checklist, or one admissions checklist per programme.
//! Step definitions live in the guide content service; this module only
//! tracks per-step completion state.
//!
//! Persistence goes through the [`ChecklistStore`] seam so the same upsert
//! path runs against the Postgres table in production and
//! [`MemoryChecklistStore`] in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use validator::Validate;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Scope
// ---------------------------------------------------------------------------

/// Namespace for a user's checklist state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChecklistScope {
    /// The generic onboarding checklist.
    Generic,
    /// The admissions checklist for one programme.
    Programme { programme_id: DbId },
}

impl ChecklistScope {
    /// Storage key discriminant for this scope.
    ///
    /// Combined with the user id by the store, so two users or two
    /// programmes never collide on a key.
    pub fn storage_key(&self) -> String {
        match self {
            ChecklistScope::Generic => "generic".to_string(),
            ChecklistScope::Programme { programme_id } => format!("programme:{programme_id}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Item state
// ---------------------------------------------------------------------------

/// Completion state for a single checklist step.
///
/// `step_id` references a step defined by the guide content service and is
/// unique within one `(user, scope)` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ChecklistItemState {
    #[validate(length(min = 1, max = 120))]
    pub step_id: String,
    pub done: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 2000))]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<chrono::NaiveDate>,
    pub updated_at: Timestamp,
}

/// Replace the item with the same `step_id` in place, or append.
///
/// The relative order of all other items is preserved, so repeated
/// upserts never reshuffle the list a user sees.
pub fn upsert_item(items: &mut Vec<ChecklistItemState>, item: ChecklistItemState) {
    match items.iter_mut().find(|existing| existing.step_id == item.step_id) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}

// ---------------------------------------------------------------------------
// Store seam
// ---------------------------------------------------------------------------

/// Persistence seam for checklist state.
///
/// The production implementation is the Postgres-backed `checklists`
/// table; [`MemoryChecklistStore`] backs unit tests. `load` returning
/// `None` is the absent-state sentinel: no state has ever been recorded
/// for the pair. It is not an error.
#[async_trait]
pub trait ChecklistStore: Send + Sync {
    /// Load the full item list for `(user_id, scope)`.
    async fn load(
        &self,
        user_id: DbId,
        scope: &ChecklistScope,
    ) -> Result<Option<Vec<ChecklistItemState>>, CoreError>;

    /// Write back the full item list, creating state on first write.
    async fn store(
        &self,
        user_id: DbId,
        scope: &ChecklistScope,
        items: Vec<ChecklistItemState>,
    ) -> Result<Vec<ChecklistItemState>, CoreError>;
}

/// In-memory checklist store.
///
/// Process-lifetime only: state is lost on restart and there is no
/// cross-instance sharing. Used as the test double behind
/// [`ChecklistStore`]; production traffic goes to the database-backed
/// implementation.
#[derive(Default)]
pub struct MemoryChecklistStore {
    entries: RwLock<HashMap<(DbId, String), Vec<ChecklistItemState>>>,
}

impl MemoryChecklistStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChecklistStore for MemoryChecklistStore {
    async fn load(
        &self,
        user_id: DbId,
        scope: &ChecklistScope,
    ) -> Result<Option<Vec<ChecklistItemState>>, CoreError> {
        let entries = self.entries.read().await;
        Ok(entries.get(&(user_id, scope.storage_key())).cloned())
    }

    async fn store(
        &self,
        user_id: DbId,
        scope: &ChecklistScope,
        items: Vec<ChecklistItemState>,
    ) -> Result<Vec<ChecklistItemState>, CoreError> {
        let mut entries = self.entries.write().await;
        entries.insert((user_id, scope.storage_key()), items.clone());
        Ok(items)
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Fetch the full checklist payload for `(user_id, scope)`.
///
/// `None` means no state has ever been recorded for the pair.
pub async fn get_checklist<S: ChecklistStore + ?Sized>(
    store: &S,
    user_id: DbId,
    scope: &ChecklistScope,
) -> Result<Option<Vec<ChecklistItemState>>, CoreError> {
    store.load(user_id, scope).await
}

/// Upsert a single step's state and return the updated payload.
///
/// The whole list is written back in one operation. Concurrent upserts to
/// the same scope are last-writer-wins on the entire list, not a per-step
/// merge; multi-tab users can lose a step update.
pub async fn upsert_checklist_item<S: ChecklistStore + ?Sized>(
    store: &S,
    user_id: DbId,
    scope: &ChecklistScope,
    item: ChecklistItemState,
) -> Result<Vec<ChecklistItemState>, CoreError> {
    item.validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let mut items = store.load(user_id, scope).await?.unwrap_or_default();
    upsert_item(&mut items, item);
    store.store(user_id, scope, items).await
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
