//! Handlers for the admissions/onboarding checklist (PRD-20).
//!
//! All endpoints require authentication. The checklist is scoped per
//! user: generic onboarding by default, or one namespace per programme
//! when `programme_id` is given.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use cribwise_core::checklist::{self, ChecklistScope};
use cribwise_core::types::DbId;
use cribwise_db::models::checklist::UpsertChecklistItem;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters selecting the checklist scope.
#[derive(Debug, Deserialize)]
pub struct ScopeQuery {
    pub programme_id: Option<DbId>,
}

fn scope_for(programme_id: Option<DbId>) -> ChecklistScope {
    match programme_id {
        Some(programme_id) => ChecklistScope::Programme { programme_id },
        None => ChecklistScope::Generic,
    }
}

// ---------------------------------------------------------------------------
// GET /user/checklist
// ---------------------------------------------------------------------------

/// Get the authenticated user's checklist payload for the requested scope.
///
/// `data` is `null` when no state has ever been recorded for the pair --
/// the absent-state sentinel, not an error.
pub async fn get_checklist(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<ScopeQuery>,
) -> AppResult<impl IntoResponse> {
    let scope = scope_for(query.programme_id);

    let items =
        checklist::get_checklist(state.checklist_store.as_ref(), auth.user_id, &scope).await?;

    tracing::debug!(
        user_id = auth.user_id,
        scope = %scope.storage_key(),
        present = items.is_some(),
        "Fetched checklist"
    );

    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// PUT /user/checklist/items
// ---------------------------------------------------------------------------

/// Upsert one step's state and return the updated payload.
pub async fn upsert_item(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpsertChecklistItem>,
) -> AppResult<impl IntoResponse> {
    let scope = scope_for(input.programme_id);
    let item = input.item.into_state(chrono::Utc::now());
    let step_id = item.step_id.clone();

    let items = checklist::upsert_checklist_item(
        state.checklist_store.as_ref(),
        auth.user_id,
        &scope,
        item,
    )
    .await?;

    tracing::info!(
        user_id = auth.user_id,
        scope = %scope.storage_key(),
        step_id = %step_id,
        "Checklist item upserted"
    );

    Ok(Json(DataResponse { data: items }))
}
