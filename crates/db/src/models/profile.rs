//! User gamification profile model and DTOs (PRD-18).

use cribwise_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `user_profiles` table (the gamification subset of the
/// platform profile).
///
/// `level` is always written together with `xp` from the same derivation;
/// `achievements` is a JSONB array of achievement-code strings that only
/// ever grows.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProfile {
    pub id: DbId,
    pub display_name: String,
    pub university: Option<String>,
    pub xp: i64,
    pub level: i32,
    pub login_streak: i32,
    pub last_login_at: Option<Timestamp>,
    pub achievements: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserProfile {
    /// Decode the achievements JSONB array into codes, skipping any
    /// non-string entries.
    pub fn achievement_codes(&self) -> Vec<String> {
        self.achievements
            .as_array()
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// DTO for creating a profile row. Used by the platform signup flow and
/// by tests; gamification counters all start from their defaults.
#[derive(Debug, Deserialize)]
pub struct CreateUserProfile {
    pub display_name: String,
    pub university: Option<String>,
}

/// A leaderboard row: profile fields plus the 1-based rank within the
/// returned page.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub user_id: DbId,
    pub display_name: String,
    pub xp: i64,
    pub level: i32,
}

impl LeaderboardEntry {
    /// Annotate a page of profiles (already ordered by XP descending)
    /// with their 1-based position. Rank is the page position, not a
    /// global tie-aware rank.
    pub fn rank_page(profiles: Vec<UserProfile>) -> Vec<LeaderboardEntry> {
        profiles
            .into_iter()
            .enumerate()
            .map(|(idx, p)| LeaderboardEntry {
                rank: idx as i64 + 1,
                user_id: p.id,
                display_name: p.display_name,
                xp: p.xp,
                level: p.level,
            })
            .collect()
    }
}
