//! Database-backed tests for the XP engine contracts.
//!
//! Exercise `award_xp`, `track_action`, and `update_login_streak` directly
//! against a migrated database, verifying the xp/level invariant, the
//! level-up cascade, the audit trail, and the streak windows.

mod common;

use assert_matches::assert_matches;
use sqlx::PgPool;

use cribwise_api::engine::{streak, xp};
use cribwise_api::error::AppError;
use cribwise_core::error::CoreError;
use cribwise_db::repositories::{ProfileRepo, XpTransactionRepo};

use common::seed_profile;

/// Backdate a profile's last login and set its current streak.
async fn backdate_login(pool: &PgPool, user_id: i64, hours_ago: i64, streak: i32) {
    sqlx::query(
        "UPDATE user_profiles \
         SET last_login_at = NOW() - ($2 || ' hours')::interval, login_streak = $3 \
         WHERE id = $1",
    )
    .bind(user_id)
    .bind(hours_ago.to_string())
    .bind(streak)
    .execute(pool)
    .await
    .expect("backdate should succeed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn award_updates_xp_and_level_together(pool: PgPool) {
    let profile = seed_profile(&pool, "amaka").await;

    let award = xp::award_xp(&pool, profile.id, 42, "test award").await.unwrap();
    assert_eq!(award.new_xp, 42);
    assert_eq!(award.new_level, 1);
    assert!(!award.leveled_up);

    let stored = ProfileRepo::find_by_id(&pool, profile.id).await.unwrap().unwrap();
    assert_eq!(stored.xp, 42);
    assert_eq!(stored.level, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn boundary_crossing_award_levels_up(pool: PgPool) {
    let profile = seed_profile(&pool, "chidi").await;
    ProfileRepo::update_progress(&pool, profile.id, 95, 1).await.unwrap();

    let award = xp::award_xp(&pool, profile.id, 10, "test award").await.unwrap();

    assert_eq!(award.new_xp, 105);
    assert_eq!(award.new_level, 2);
    assert!(award.leveled_up);
    assert_eq!(award.level_bonus, Some(20));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn level_up_unlocks_threshold_achievements(pool: PgPool) {
    let profile = seed_profile(&pool, "bisi").await;
    ProfileRepo::update_progress(&pool, profile.id, 495, 5).await.unwrap();

    let award = xp::award_xp(&pool, profile.id, 10, "test award").await.unwrap();
    assert!(award.leveled_up);
    assert_eq!(award.new_level, 6);

    let stored = ProfileRepo::find_by_id(&pool, profile.id).await.unwrap().unwrap();
    assert_eq!(stored.achievement_codes(), vec!["level_5".to_string()]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn negative_award_decreases_total(pool: PgPool) {
    let profile = seed_profile(&pool, "efe").await;
    ProfileRepo::update_progress(&pool, profile.id, 20, 1).await.unwrap();

    let award = xp::award_xp(&pool, profile.id, -30, "refund").await.unwrap();

    // No floor at zero; the derived level still never drops below 1.
    assert_eq!(award.new_xp, -10);
    assert_eq!(award.new_level, 1);
    assert!(!award.leveled_up);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn award_for_missing_profile_fails_not_found(pool: PgPool) {
    let result = xp::award_xp(&pool, 9999, 10, "test award").await;

    assert_matches!(
        result,
        Err(AppError::Core(CoreError::NotFound { entity: "UserProfile", id: 9999 }))
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn awards_append_to_the_audit_log(pool: PgPool) {
    let profile = seed_profile(&pool, "kemi").await;

    xp::award_xp(&pool, profile.id, 10, "first").await.unwrap();
    xp::award_xp(&pool, profile.id, 5, "second").await.unwrap();

    let entries = XpTransactionRepo::list_recent(&pool, profile.id, 10).await.unwrap();
    assert_eq!(entries.len(), 2);
    // Newest first; new_total snapshots the balance after each award.
    assert_eq!(entries[0].reason, "second");
    assert_eq!(entries[0].new_total, 15);
    assert_eq!(entries[1].new_total, 10);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_action_performs_no_writes(pool: PgPool) {
    let profile = seed_profile(&pool, "tunde").await;

    let result = xp::track_action(&pool, profile.id, "UNKNOWN_ACTION").await;
    assert_matches!(result, Err(AppError::Core(CoreError::InvalidAction(_))));

    let stored = ProfileRepo::find_by_id(&pool, profile.id).await.unwrap().unwrap();
    assert_eq!(stored.xp, 0);
    assert_eq!(
        XpTransactionRepo::count_for_user(&pool, profile.id).await.unwrap(),
        0
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn tracked_action_uses_humanized_reason(pool: PgPool) {
    let profile = seed_profile(&pool, "ngozi").await;

    let award = xp::track_action(&pool, profile.id, "property_viewed").await.unwrap();
    assert_eq!(award.new_xp, 5);

    let entries = XpTransactionRepo::list_recent(&pool, profile.id, 1).await.unwrap();
    assert_eq!(entries[0].reason, "property viewed");
}

// ---------------------------------------------------------------------------
// Streak windows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn first_login_starts_streak_and_awards_daily_xp(pool: PgPool) {
    let profile = seed_profile(&pool, "sade").await;

    let update = streak::update_login_streak(&pool, profile.id).await;
    assert!(!update.is_degraded());
    assert_eq!(update.into_inner().streak, 1);

    let stored = ProfileRepo::find_by_id(&pool, profile.id).await.unwrap().unwrap();
    assert_eq!(stored.login_streak, 1);
    assert!(stored.last_login_at.is_some());
    assert_eq!(stored.xp, 10); // daily_login
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn same_day_ping_changes_nothing(pool: PgPool) {
    let profile = seed_profile(&pool, "yinka").await;

    streak::update_login_streak(&pool, profile.id).await;
    let second = streak::update_login_streak(&pool, profile.id).await;

    assert_eq!(second.into_inner().streak, 1);

    let stored = ProfileRepo::find_by_id(&pool, profile.id).await.unwrap().unwrap();
    assert_eq!(stored.login_streak, 1);
    // The repeat ping granted no additional daily XP.
    assert_eq!(stored.xp, 10);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn thirty_hour_gap_extends_streak_with_bonus(pool: PgPool) {
    let profile = seed_profile(&pool, "obi").await;
    backdate_login(&pool, profile.id, 30, 3).await;

    let update = streak::update_login_streak(&pool, profile.id).await;
    assert_eq!(update.into_inner().streak, 4);

    let stored = ProfileRepo::find_by_id(&pool, profile.id).await.unwrap().unwrap();
    assert_eq!(stored.login_streak, 4);
    // streak_maintained (15) plus daily_login (10).
    assert_eq!(stored.xp, 25);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn fifty_hour_gap_resets_streak(pool: PgPool) {
    let profile = seed_profile(&pool, "zara").await;
    backdate_login(&pool, profile.id, 50, 3).await;

    let update = streak::update_login_streak(&pool, profile.id).await;
    assert_eq!(update.into_inner().streak, 1);

    let stored = ProfileRepo::find_by_id(&pool, profile.id).await.unwrap().unwrap();
    assert_eq!(stored.login_streak, 1);
    // Only the flat daily award, no streak bonus.
    assert_eq!(stored.xp, 10);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_profile_degrades_to_zero_streak(pool: PgPool) {
    let update = streak::update_login_streak(&pool, 9999).await;

    assert!(update.is_degraded());
    assert_eq!(update.into_inner().streak, 0);
}
