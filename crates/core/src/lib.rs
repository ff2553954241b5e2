//! Cribwise domain logic.
//!
//! Pure gamification and checklist rules shared by the persistence and API
//! layers: leveling arithmetic, the action reward table, the login-streak
//! state machine, checklist scope and upsert semantics, and the checklist
//! store seam. Nothing in this crate touches the database or HTTP.

pub mod checklist;
pub mod degrade;
pub mod error;
pub mod leveling;
pub mod rewards;
pub mod streak;
pub mod types;
