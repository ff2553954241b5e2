//! XP and level arithmetic (PRD-18).
//!
//! A user's level is derived from their XP total: one level per
//! [`XP_PER_LEVEL`] XP, starting at level 1. The derivation lives here so
//! the persistence layer always writes `xp` and `level` from the same
//! computation and the two fields never drift apart.

/// XP required per level.
pub const XP_PER_LEVEL: i64 = 100;

/// Achievement codes unlocked when a level threshold is reached.
///
/// All thresholds satisfied at the current level unlock together, so a
/// user jumping from level 4 to level 11 in one award receives both
/// `level_5` and `level_10`.
pub const LEVEL_ACHIEVEMENTS: &[(i32, &str)] = &[
    (5, "level_5"),
    (10, "level_10"),
    (25, "level_25"),
    (50, "level_50"),
    (100, "level_100"),
];

/// Derive the level for an XP total.
///
/// Levels start at 1 and never go below it, even when refunds push the
/// XP total negative.
pub fn level_for_xp(xp: i64) -> i32 {
    let derived = xp.div_euclid(XP_PER_LEVEL) + 1;
    derived.max(1) as i32
}

/// Bonus XP reported when a user reaches `level`.
///
/// TODO: decide whether this bonus should be credited back into the XP
/// total; today it is only surfaced in the award response.
pub fn level_bonus(level: i32) -> i64 {
    i64::from(level) * 10
}

/// Achievement codes qualified at `level` that are not already in
/// `existing`. The stored set only ever grows; callers merge these into
/// it, never replace it.
pub fn newly_qualified(level: i32, existing: &[String]) -> Vec<&'static str> {
    LEVEL_ACHIEVEMENTS
        .iter()
        .filter(|(threshold, _)| level >= *threshold)
        .map(|(_, code)| *code)
        .filter(|code| !existing.iter().any(|have| have == code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_starts_at_one() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(99), 1);
    }

    #[test]
    fn level_advances_every_hundred_xp() {
        assert_eq!(level_for_xp(100), 2);
        assert_eq!(level_for_xp(105), 2);
        assert_eq!(level_for_xp(250), 3);
        assert_eq!(level_for_xp(1000), 11);
    }

    #[test]
    fn negative_totals_clamp_to_level_one() {
        assert_eq!(level_for_xp(-1), 1);
        assert_eq!(level_for_xp(-500), 1);
    }

    #[test]
    fn boundary_award_crosses_level() {
        // 95 XP is level 1; +10 lands on 105, level 2.
        assert_eq!(level_for_xp(95), 1);
        assert_eq!(level_for_xp(105), 2);
    }

    #[test]
    fn all_thresholds_unlock_together() {
        let unlocked = newly_qualified(11, &[]);
        assert_eq!(unlocked, vec!["level_5", "level_10"]);
    }

    #[test]
    fn already_held_codes_are_not_repeated() {
        let existing = vec!["level_5".to_string()];
        let unlocked = newly_qualified(11, &existing);
        assert_eq!(unlocked, vec!["level_10"]);
    }

    #[test]
    fn below_first_threshold_unlocks_nothing() {
        assert!(newly_qualified(4, &[]).is_empty());
    }

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(newly_qualified(5, &[]), vec!["level_5"]);
    }

    #[test]
    fn bonus_scales_with_level() {
        assert_eq!(level_bonus(2), 20);
        assert_eq!(level_bonus(10), 100);
    }
}
