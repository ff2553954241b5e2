//! Request handlers for the `/api/v1` surface.

pub mod checklist;
pub mod gamification;
