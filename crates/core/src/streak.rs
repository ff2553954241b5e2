//! Login-streak state machine (PRD-18).
//!
//! A streak counts consecutive-day logins, bucketed by elapsed time since
//! the last recorded login rather than by calendar date:
//!
//! - under 24h: same day, nothing changes;
//! - 24h to 48h: the streak extends by one;
//! - 48h or more: the streak is broken and restarts at 1.
//!
//! The decision is pure so the windows can be tested without a clock or a
//! database; the engine applies the resulting writes and XP awards.

use chrono::Duration;

use crate::types::Timestamp;

/// Elapsed time below which a login counts as the same day.
const SAME_DAY_HOURS: i64 = 24;

/// Elapsed time at which a streak is considered broken.
const BROKEN_HOURS: i64 = 48;

/// What a login ping does to the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakDecision {
    /// First recorded login ever.
    Start,
    /// Repeat login inside the same 24h window.
    SameDay,
    /// Login in the 24-48h window extends the streak.
    Extend,
    /// 48h or more since the last login breaks the streak.
    Reset,
}

impl StreakDecision {
    /// Classify a login at `now` against the previously recorded login.
    pub fn evaluate(last_login: Option<Timestamp>, now: Timestamp) -> Self {
        let Some(last) = last_login else {
            return StreakDecision::Start;
        };

        let elapsed = now - last;
        if elapsed < Duration::hours(SAME_DAY_HOURS) {
            StreakDecision::SameDay
        } else if elapsed < Duration::hours(BROKEN_HOURS) {
            StreakDecision::Extend
        } else {
            StreakDecision::Reset
        }
    }

    /// The streak value after applying this decision to `current`.
    pub fn next_streak(self, current: i32) -> i32 {
        match self {
            StreakDecision::Start | StreakDecision::Reset => 1,
            StreakDecision::SameDay => current,
            StreakDecision::Extend => current + 1,
        }
    }
}
