//! Aggregated gamification stats DTO (PRD-19).

use serde::Serialize;

/// Dashboard payload: profile counters plus the four activity counts.
///
/// The default value is the zeroed fallback returned when the underlying
/// reads fail; `level` still starts at 1 because levels never go below it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub xp: i64,
    pub level: i32,
    pub login_streak: i32,
    pub achievements: Vec<String>,
    pub properties_viewed: i64,
    pub messages_sent: i64,
    pub materials_downloaded: i64,
    pub connections_made: i64,
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            login_streak: 0,
            achievements: Vec::new(),
            properties_viewed: 0,
            messages_sent: 0,
            materials_downloaded: 0,
            connections_made: 0,
        }
    }
}
