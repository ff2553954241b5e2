//! Action reward table (PRD-18).
//!
//! Static configuration mapping tracked user actions to XP amounts.
//! Values are tuned between 5 (routine actions) and 100 (referrals).

use crate::error::CoreError;

/// Flat award granted once per calendar day on login.
pub const ACTION_DAILY_LOGIN: &str = "daily_login";
/// Awarded when a login extends an active streak.
pub const ACTION_STREAK_MAINTAINED: &str = "streak_maintained";
/// Awarded when the profile reaches 100% completion.
pub const ACTION_PROFILE_COMPLETED: &str = "profile_completed";
/// Awarded per property detail view.
pub const ACTION_PROPERTY_VIEWED: &str = "property_viewed";
/// Awarded when an agent lists a property.
pub const ACTION_PROPERTY_LISTED: &str = "property_listed";
/// Awarded for posting a property review.
pub const ACTION_REVIEW_POSTED: &str = "review_posted";
/// Awarded per message sent.
pub const ACTION_MESSAGE_SENT: &str = "message_sent";
/// Awarded for uploading a study material.
pub const ACTION_MATERIAL_UPLOADED: &str = "material_uploaded";
/// Awarded per study material download.
pub const ACTION_MATERIAL_DOWNLOADED: &str = "material_downloaded";
/// Awarded when a roommate match is accepted by both sides.
pub const ACTION_ROOMMATE_MATCH: &str = "roommate_match";
/// Awarded when a referred student signs up.
pub const ACTION_REFERRAL_SIGNUP: &str = "referral_signup";

/// The full action-to-XP table.
pub const XP_REWARDS: &[(&str, i64)] = &[
    (ACTION_DAILY_LOGIN, 10),
    (ACTION_STREAK_MAINTAINED, 15),
    (ACTION_PROFILE_COMPLETED, 50),
    (ACTION_PROPERTY_VIEWED, 5),
    (ACTION_PROPERTY_LISTED, 25),
    (ACTION_REVIEW_POSTED, 20),
    (ACTION_MESSAGE_SENT, 5),
    (ACTION_MATERIAL_UPLOADED, 30),
    (ACTION_MATERIAL_DOWNLOADED, 5),
    (ACTION_ROOMMATE_MATCH, 25),
    (ACTION_REFERRAL_SIGNUP, 100),
];

/// Look up the XP amount for an action key.
///
/// Unknown keys fail with [`CoreError::InvalidAction`] so callers can
/// reject the request before any write happens.
pub fn reward_for_action(action: &str) -> Result<i64, CoreError> {
    XP_REWARDS
        .iter()
        .find(|(key, _)| *key == action)
        .map(|(_, amount)| *amount)
        .ok_or_else(|| CoreError::InvalidAction(action.to_string()))
}

/// Turn an action key into the human-readable audit reason:
/// underscores become spaces, everything lowercased.
pub fn humanize_action(action: &str) -> String {
    action.replace('_', " ").to_lowercase()
}
