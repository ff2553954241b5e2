use std::sync::Arc;

use cribwise_core::checklist::ChecklistStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cribwise_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Checklist persistence seam. Production wires the Postgres-backed
    /// store; tests may inject the in-memory double.
    pub checklist_store: Arc<dyn ChecklistStore>,
}
