//! Scoring module - line clear points, level progression and gravity speed
//!
//! - Clearing `n` lines awards `LINE_SCORES[n] * level`.
//! - Level is `total_lines / 10 + 1`, so every game starts at level 1.
//! - Gravity runs every `1000 / level` milliseconds; the engine only reports
//!   the level and the front end schedules ticks from it.

use crate::types::{BASE_GRAVITY_MS, LINES_PER_LEVEL, LINE_SCORES};

/// Points for clearing `lines` rows at `level`.
/// Zero lines (or an impossible count above four) awards nothing.
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    match LINE_SCORES.get(lines) {
        Some(&base) => base.saturating_mul(level),
        None => 0,
    }
}

/// Level reached after `total_lines` cleared lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level, in milliseconds (never below 1ms)
pub fn gravity_interval_ms(level: u32) -> u32 {
    (BASE_GRAVITY_MS / level.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_scores_level_one() {
        assert_eq!(line_clear_points(0, 1), 0);
        assert_eq!(line_clear_points(1, 1), 100);
        assert_eq!(line_clear_points(2, 1), 300);
        assert_eq!(line_clear_points(3, 1), 500);
        assert_eq!(line_clear_points(4, 1), 800);
    }

    #[test]
    fn test_line_scores_scale_with_level() {
        assert_eq!(line_clear_points(4, 3), 2400);
        assert_eq!(line_clear_points(1, 5), 500);
        assert_eq!(line_clear_points(5, 3), 0);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(19), 2);
        assert_eq!(level_for_lines(20), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_gravity_interval_strictly_decreases_early_on() {
        assert_eq!(gravity_interval_ms(1), 1000);
        assert_eq!(gravity_interval_ms(2), 500);
        assert_eq!(gravity_interval_ms(3), 333);
        assert_eq!(gravity_interval_ms(0), 1000);

        let mut prev = u32::MAX;
        for level in 1..=30 {
            let interval = gravity_interval_ms(level);
            assert!(interval < prev, "level {} did not speed up", level);
            prev = interval;
        }
        assert_eq!(gravity_interval_ms(5000), 1);
    }
}
