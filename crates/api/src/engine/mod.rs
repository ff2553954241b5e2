//! Gamification engine (PRD-18, PRD-19).
//!
//! Orchestrates the XP, streak, and stats contracts over the repository
//! layer so handlers stay thin. The per-operation failure policies live
//! here: awards and action tracking propagate errors as results, while
//! streak updates and stats reads degrade to a zeroed default.

pub mod stats;
pub mod streak;
pub mod xp;
